//! Utilities for the CLI.

use std::path::PathBuf;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Installs the global logger for one run of the CLI.
///
/// Records up to `level` go to `./logs/{file_name}.log`, which is rotated
/// daily. Warnings and errors raised by the file appender itself are kept
/// apart in `./logs/{file_name}.err.log`.
///
/// The returned guard flushes the logger when dropped, so it must outlive
/// every command.
///
/// # Errors
///
/// - If the `./logs` directory could not be located or created.
/// - If a global logger is already installed.
pub fn configure_logger(file_name: &str, level: LevelFilter) -> Result<(LoggerGuard, PathBuf), String> {
    let logs_dir = PathBuf::from(".")
        .canonicalize()
        .map_err(|e| e.to_string())?
        .join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }

    let log_path = logs_dir.join(format!("{file_name}.log"));
    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        // Records from the `ftlog::appender` module at `Warn` or above go to
        // the appender named "appender-errors" instead of the root.
        .filter("ftlog::appender", "appender-errors", LevelFilter::Warn)
        .appender("appender-errors", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
