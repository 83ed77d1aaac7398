//! # Assign Graders
//!
//! 一个用于 Greenhouse 笔试（Written Interview）阅卷人自动分配的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `UiSession` - 唯一的 page owner，提供导航/等待/点击/输入能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单条申请
//! - `GreenhouseListing` - 列表页提取 / 翻页能力
//! - `GraderSelection` - 随机挑选两名阅卷人的能力
//! - `GraderEditor` - 阅卷人编辑弹窗的读写能力
//! - `operator` - 识别当前操作者的能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一条申请"的完整处理流程
//! - `AssignmentCtx` - 上下文封装（申请序号 + 当前操作者）
//! - `AssignmentFlow` - 流程编排（打开弹窗 → 读取已分配 → 挑选 → 写入）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/application_source` - 分页驱动的工作项枚举器
//! - `orchestrator/app` - 应用生命周期，逐条驱动申请处理
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::connect_to_browser_and_page;
pub use config::Config;
pub use error::AppError;
pub use infrastructure::UiSession;
pub use models::{Application, Grader, Roster};
pub use orchestrator::{App, ApplicationSource};
pub use services::{GraderEditor, GraderSelection, GreenhouseListing, ListingPage};
pub use workflow::{AssignmentCtx, AssignmentFlow, ProcessResult};
