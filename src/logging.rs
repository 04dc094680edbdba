// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 本 crate 的默认日志过滤器: 自身 info,依赖降噪为 warn
const DEFAULT_FILTER: &str = "warn,rake_aps=info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn,rake_aps=info）
///   例如: RUST_LOG=debug 或 RUST_LOG=rake_aps=trace
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 命令行工具输出,省去 target 前缀
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 只放开本 crate 的 debug 级别,便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("rake_aps=debug"))
        .with_test_writer()
        .try_init();
}
