use tracing_subscriber::{EnvFilter, fmt};

/// 初始化内部诊断日志
///
/// pkglog 自身的警告（写入失败等）走 tracing，输出到 stderr，
/// 不会与写到 stdout 的日志记录混在一起。
///
/// 支持通过 RUST_LOG 环境变量控制级别，默认级别: warn
///
/// 示例:
/// - RUST_LOG=pkglog=debug pkglog settings
pub fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("Diagnostics initialized");
}
