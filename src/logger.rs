//! 日志初始化
//!
//! 控制台输出，级别通过 RUST_LOG 控制

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认 info 级别，可通过 RUST_LOG 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 测试用的初始化，重复调用不会 panic
pub fn try_init() {
    let _ = tracing_subscriber::fmt::try_init();
}
