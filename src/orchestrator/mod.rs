//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整次运行的调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用生命周期
//! - 连接浏览器、构建 UiSession
//! - 加载并校验阅卷人名单
//! - 解析当前操作者
//! - 逐条驱动申请处理，输出全局统计
//!
//! ### `application_source` - 工作项枚举器
//! - 把分页的列表页摊平成一条申请序列
//! - 懒加载：消费到页尾才翻下一页
//! - 单趟：页面状态被翻页动作改写，不提供重置
//!
//! ## 层次关系
//!
//! ```text
//! app (整次运行)
//!     ↓
//! application_source (逐条产出 Application)
//!     ↓
//! workflow::AssignmentFlow (处理单条 Application)
//!     ↓
//! services (能力层：listing / selection / editor / operator)
//!     ↓
//! infrastructure (基础设施：UiSession)
//! ```

pub mod app;
pub mod application_source;

pub use app::App;
pub use application_source::ApplicationSource;
