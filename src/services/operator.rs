//! 当前操作者识别 - 业务能力层

use anyhow::Result;

use crate::error::AppError;
use crate::infrastructure::UiSession;

/// 从页面标记读取当前登录用户的显示名
///
/// Greenhouse 会把当前用户名写在 script[data-user-name] 上；
/// 每次运行只解析一次，之后在各条申请间传递。找不到视为致命的环境错误
pub async fn find_current_operator(session: &UiSession) -> Result<String> {
    let name: Option<String> = session
        .eval_as(r#"document.querySelector("script[data-user-name]")?.dataset?.userName ?? null"#)
        .await?;

    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(AppError::OperatorNotFound.into()),
    }
}
