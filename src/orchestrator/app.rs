//! 应用生命周期 - 编排层
//!
//! ## 职责
//!
//! 1. **资源管理**：连接浏览器，构建唯一的 UiSession
//! 2. **前置解析**：加载名单、导航到列表页、识别当前操作者
//! 3. **逐条调度**：驱动 ApplicationSource，把每条申请交给 AssignmentFlow
//! 4. **统计输出**：记录分配/跳过数量，写分配记录文件
//!
//! 整个处理严格串行：页面是唯一的共享资源，同一时刻只允许一个
//! 逻辑操作驱动它。任何一条申请处理失败都会终止整次运行；
//! 重跑会从列表首页重新枚举，已配满的申请会被幂等地跳过。

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::info;

use crate::browser;
use crate::config::Config;
use crate::infrastructure::UiSession;
use crate::models::{load_roster, Roster};
use crate::orchestrator::application_source::ApplicationSource;
use crate::services::{find_current_operator, GreenhouseListing};
use crate::workflow::{AssignmentCtx, AssignmentFlow, ProcessResult};

/// 应用主结构
pub struct App {
    config: Config,
    // 握着 Browser 保证连接在整次运行期间存活
    _browser: Browser,
    session: UiSession,
}

impl App {
    /// 初始化应用：写日志文件头、连接浏览器、构建会话
    pub async fn initialize(config: Config) -> Result<Self> {
        init_record_file(&config)?;
        log_startup(&config);

        let (browser, page) =
            browser::connect_to_browser_and_page(config.browser_debug_port, &config.main_url)
                .await?;

        let session = UiSession::new(page, Duration::from_secs(config.selector_timeout_secs));

        Ok(Self {
            config,
            _browser: browser,
            session,
        })
    }

    /// 运行主逻辑
    pub async fn run(&self) -> Result<()> {
        let roster = load_roster(&self.config.roster_file).await?;

        // 导航到笔试待处理列表页（枚举器要求从首页开始）
        self.session.navigate(&self.config.listing_url()).await?;

        let current_operator = find_current_operator(&self.session).await?;
        info!("✓ 当前操作者: {}", current_operator);

        let stats = self.process_all(&roster, &current_operator).await?;

        print_final_stats(&stats, &self.config);
        Ok(())
    }

    /// 逐条处理列表中的申请
    async fn process_all(&self, roster: &Roster, current_operator: &str) -> Result<ProcessingStats> {
        let job_filter: HashSet<String> = roster.jobs.iter().cloned().collect();
        let listing = GreenhouseListing::new(&self.session);
        let mut source = ApplicationSource::new(listing, job_filter);
        let mut flow = AssignmentFlow::new(&self.config, roster.graders.clone());

        let mut stats = ProcessingStats::default();

        while let Some(application) = source.next().await? {
            stats.total += 1;
            let ctx = AssignmentCtx::new(stats.total, current_operator.to_string());

            match flow.run(&self.session, &application, &ctx).await? {
                ProcessResult::Assigned => stats.assigned += 1,
                ProcessResult::Skipped => stats.skipped += 1,
            }
        }

        Ok(stats)
    }
}

/// 处理统计
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub assigned: usize,
    pub skipped: usize,
    pub total: usize,
}

// ========== 日志辅助函数 ==========

fn init_record_file(config: &Config) -> Result<()> {
    let header = format!(
        "{}\n阅卷人分配记录 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    std::fs::write(&config.output_log_file, header)
        .with_context(|| format!("无法写入分配记录文件: {}", config.output_log_file))?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - Greenhouse 笔试阅卷人分配");
    info!("📡 浏览器调试端口: {}", config.browser_debug_port);
    info!("📋 名单文件: {}", config.roster_file);
    if let Some(seed) = config.selection_seed {
        info!("🎲 随机种子: {}", seed);
    }
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 新分配: {}/{}", stats.assigned, stats.total);
    info!("⏭️ 已配满跳过: {}", stats.skipped);
    info!("{}", "=".repeat(60));
    info!("\n分配记录已保存至: {}", config.output_log_file);
}
