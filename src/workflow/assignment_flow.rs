//! 申请处理流程 - 流程层
//!
//! 核心职责：定义"一条申请"的完整处理流程
//!
//! 流程顺序：
//! 1. 打开阅卷人编辑弹窗
//! 2. 读取已分配名单，决定动作（跳过 / 先删默认 / 直接追加）
//! 3. 随机挑选两名阅卷人（在任何写操作之前，挑选失败不会留下半成品）
//! 4. 写入两人并保存

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::UiSession;
use crate::models::{Application, Grader};
use crate::services::{GraderEditor, GraderSelection, RecordWriter};
use crate::workflow::assignment_ctx::AssignmentCtx;

/// 申请处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已分配两名阅卷人
    Assigned,
    /// 跳过（已有两人，无需动作）
    Skipped,
}

/// 已分配状态对应的处理动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignAction {
    /// 已有两人及以上，什么都不写
    Skip,
    /// 恰好一人且是当前操作者：宿主系统默认把 hiring lead 填了进来，先删掉再补两人
    ReplaceDefault,
    /// 空着，或那一人不是当前操作者：直接追加
    Append,
}

/// 根据已分配名单决定动作
pub fn plan_action(assigned: &[String], current_operator: &str) -> AssignAction {
    if assigned.len() >= 2 {
        return AssignAction::Skip;
    }
    if assigned.len() == 1 && assigned[0] == current_operator {
        return AssignAction::ReplaceDefault;
    }
    AssignAction::Append
}

/// 申请处理流程
///
/// - 编排单条申请的完整处理
/// - 决定何时读、何时挑、何时写
/// - 不持有任何资源（page）
/// - 只依赖业务能力（services）
pub struct AssignmentFlow {
    editor: GraderEditor,
    selection: GraderSelection,
    record_writer: RecordWriter,
    roster: Vec<Grader>,
}

impl AssignmentFlow {
    pub fn new(config: &Config, roster: Vec<Grader>) -> Self {
        Self {
            editor: GraderEditor::new(),
            selection: GraderSelection::new(config.selection_seed),
            record_writer: RecordWriter::with_path(&config.output_log_file),
            roster,
        }
    }

    pub async fn run(
        &mut self,
        session: &UiSession,
        application: &Application,
        ctx: &AssignmentCtx,
    ) -> Result<ProcessResult> {
        info!(
            "{} 候选人: {} / 职位: {}",
            ctx, application.candidate, application.job
        );

        self.editor.open(session, &application.application_id).await?;

        let assigned = self.editor.assigned_graders(session).await?;
        let action = plan_action(&assigned, &ctx.current_operator);

        if action == AssignAction::Skip {
            info!("{} 已有 {} 名阅卷人，跳过", ctx, assigned.len());
            return Ok(ProcessResult::Skipped);
        }

        // 先挑人再动页面：人数不足时直接报错，弹窗保持原样
        let (grader1, grader2) = self.selection.pick_pair(application, &self.roster)?;

        self.editor.focus_search(session).await?;

        if action == AssignAction::ReplaceDefault {
            warn!("{} 唯一的已分配记录是当前操作者本人（默认带入），先删除", ctx);
            self.editor.remove_default_entry(session).await?;
        }

        self.editor.add_grader(session, &grader1).await?;
        self.editor.add_grader(session, &grader2).await?;

        info!(
            "{} ✓ 候选人 {} 的笔试已分配给: {}, {}",
            ctx, application.candidate, grader1.name, grader2.name
        );

        self.editor.save(session).await?;
        self.record_writer.write(application, &grader1, &grader2)?;

        Ok(ProcessResult::Assigned)
    }
}
