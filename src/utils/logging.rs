//! 日志工具模块

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// RUST_LOG 优先；未设置时 verbose 对应 debug，否则 info
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
