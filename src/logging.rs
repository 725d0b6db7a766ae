//! File logging bootstrap. The terminal belongs to the TUI, so log records go
//! to rotated files under the configured directory and never to stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "fruit-list";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the logger. Keep the returned handle alive for the life of the
/// process; dropping it flushes and stops file output.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start version={} level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}
