//! Logging Infrastructure
//!
//! Structured logging setup: `RUST_LOG` env-filter, console output by
//! default, daily-rolling file output when a log directory is provided.

use std::fs;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// * `level` - default level when `RUST_LOG` is unset
/// * `json_format` - JSON output for production, human-readable otherwise
/// * `log_dir` - optional directory for daily-rolling file output
///   (created if missing)
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "comanda-server");
            if json_format {
                builder.json().with_writer(file_appender).init();
            } else {
                builder.with_writer(file_appender).init();
            }
        }
        None => {
            if json_format {
                builder.json().init();
            } else {
                builder.init();
            }
        }
    }

    Ok(())
}
