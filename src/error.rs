use thiserror::Error;

/// 应用程序错误类型
///
/// 分为两类：
/// - 用户/配置数据错误（`NotEnoughGraders` / `Roster`）：
///   数据本身有问题，重跑不会自愈，需要用户修正输入
/// - 环境错误（`SelectorTimeout` / `OperatorNotFound`）：
///   页面上预期的元素没有出现，视为致命错误，终止整次运行
#[derive(Error, Debug)]
pub enum AppError {
    /// 职位可选阅卷人不足，无法选出两人
    #[error("职位 {job} 的可选阅卷人不足两人，无法完成分配")]
    NotEnoughGraders { job: String },

    /// 阅卷人名单数据错误
    #[error("阅卷人名单错误: {0}")]
    Roster(String),

    /// 等待页面元素超时
    #[error("等待元素 {selector} 超时（{timeout_secs} 秒）")]
    SelectorTimeout { selector: String, timeout_secs: u64 },

    /// 无法在 Greenhouse 页面中找到当前用户名
    #[error("无法在 Greenhouse 页面中找到当前用户名")]
    OperatorNotFound,
}
