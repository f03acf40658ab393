//! Log output for the stockroom binary
//!
//! Plain fmt lines on stdout. With a log directory that already exists,
//! output goes to `stockroom.<date>` files there instead, rotated daily.

use std::path::Path;
use tracing::Level;
use tracing_appender::rolling;

const LOG_FILE_PREFIX: &str = "stockroom";

/// stdout at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// `log_level` falls back to `info` when missing or unparsable; a
/// `log_dir` that does not exist is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let max_level = log_level
        .and_then(|raw| raw.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match log_dir.map(Path::new).filter(|dir| dir.is_dir()) {
        Some(dir) => builder
            .with_ansi(false)
            .with_writer(rolling::daily(dir, LOG_FILE_PREFIX))
            .init(),
        None => builder.init(),
    }
}
