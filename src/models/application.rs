//! 申请记录模型
//!
//! 列表页每一行对应一条候选人的笔试申请

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// 列表行中表示"还有评分卡未完成"的标记文案
pub const SCORECARD_DUE_MARKER: &str = "Scorecard due";

/// 从列表页 DOM 提取的原始行数据
///
/// 每个字段都可能缺失（如已撤回的候选人行结构不完整），
/// 缺失与否在 [`Application::from_raw`] 统一判定
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPersonRow {
    /// 行上的 application 属性
    pub application_id: Option<String>,
    /// 候选人显示名
    pub candidate: Option<String>,
    /// 职位名（可能带着数字编制号）
    pub job: Option<String>,
    /// 面试折叠按钮的文案，用于判断是否待评分
    pub toggle_text: Option<String>,
}

/// 一条待处理的笔试申请
///
/// 每次翻页重新构建，跨页的同一性以 `application_id` 相等判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// 稳定标识，用于在页面中重新定位该行
    pub application_id: String,
    /// 候选人显示名，仅用于日志
    pub candidate: String,
    /// 规范化后的职位名（去掉编制号），过滤和分组的键
    pub job: String,
    /// 是否还有评分卡待完成
    pub to_grade: bool,
}

impl Application {
    /// 从原始行构建申请记录
    ///
    /// 四个字段必须全部可解析，任一缺失返回 None（由调用方记录并丢弃）
    pub fn from_raw(raw: &RawPersonRow) -> Option<Self> {
        let application_id = raw.application_id.clone()?;
        let candidate = raw.candidate.clone()?;
        let job = normalize_job(raw.job.as_deref()?);
        let to_grade = raw.toggle_text.as_deref()?.contains(SCORECARD_DUE_MARKER);

        Some(Self {
            application_id,
            candidate,
            job,
            to_grade,
        })
    }
}

/// 规范化职位名：去掉职位名旁边的数字编制号，如 "Backend Engineer (1024)"
fn normalize_job(job: &str) -> String {
    static REQUISITION_RE: OnceLock<Regex> = OnceLock::new();
    let re = REQUISITION_RE.get_or_init(|| Regex::new(r"\(\d+\)").expect("内置正则"));
    re.replace_all(job, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawPersonRow {
        RawPersonRow {
            application_id: Some("10086".to_string()),
            candidate: Some("张三".to_string()),
            job: Some("Backend Engineer (1024)".to_string()),
            toggle_text: Some("2 interviews, Scorecard due".to_string()),
        }
    }

    #[test]
    fn test_from_raw_full_row() {
        let app = Application::from_raw(&full_row()).expect("四个字段齐全应当解析成功");
        assert_eq!(app.application_id, "10086");
        assert_eq!(app.candidate, "张三");
        assert_eq!(app.job, "Backend Engineer");
        assert!(app.to_grade);
    }

    #[test]
    fn test_from_raw_missing_field_is_dropped() {
        for strip in 0..4 {
            let mut row = full_row();
            match strip {
                0 => row.application_id = None,
                1 => row.candidate = None,
                2 => row.job = None,
                _ => row.toggle_text = None,
            }
            assert!(Application::from_raw(&row).is_none(), "缺字段 {} 应当被丢弃", strip);
        }
    }

    #[test]
    fn test_to_grade_requires_marker() {
        let mut row = full_row();
        row.toggle_text = Some("2 interviews, all scorecards complete".to_string());
        let app = Application::from_raw(&row).expect("字段齐全");
        assert!(!app.to_grade);
    }

    #[test]
    fn test_normalize_job_strips_requisition_id() {
        assert_eq!(normalize_job("Data Scientist (42)"), "Data Scientist");
        assert_eq!(normalize_job("  Data Scientist  "), "Data Scientist");
        // 没有编制号时原样保留
        assert_eq!(normalize_job("Data Scientist"), "Data Scientist");
    }
}
