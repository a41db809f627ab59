//! Process-wide logging setup.
//!
//! The binary calls [`init_logger`] once at startup and [`flush_logger`] before exit.
//! Records go both to the console (coloured by level) and to a log file. The library
//! itself only uses the `log` macros.

use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Log file written in the working directory unless overridden.
pub const DEFAULT_LOG_FILE: &str = "file_organizer.log";

/// Timestamp layout used on every line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Errors that can occur while installing the logger.
#[derive(Debug)]
pub enum LoggerError {
    /// The log file could not be opened for appending.
    LogFile { path: PathBuf, source: io::Error },
    /// A global logger was already installed.
    AlreadyInitialized(log::SetLoggerError),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::LogFile { path, source } => {
                write!(f, "Cannot open log file {}: {}", path.display(), source)
            }
            LoggerError::AlreadyInitialized(e) => write!(f, "Logger already initialized: {}", e),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Maps the number of `-v` flags to a level filter.
pub fn level_for_verbosity(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Formats one log line as `<timestamp> - <LEVEL> - <message>`.
pub fn format_line(
    timestamp: &str,
    level: impl fmt::Display,
    message: impl fmt::Display,
) -> String {
    format!("{timestamp} - {level} - {message}")
}

/// Installs the global logger.
///
/// With `log_file` set, lines are appended to that file as well as printed to the
/// console. The logger can only be installed once per process.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let console = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    &Local::now().format(TIMESTAMP_FORMAT).to_string(),
                    colors.color(record.level()),
                    message
                )
            ))
        })
        .chain(io::stdout());

    let mut root = Dispatch::new().level(level).chain(console);

    if let Some(path) = log_file {
        let file = fern::log_file(path).map_err(|e| LoggerError::LogFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_logger = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}",
                    format_line(
                        &Local::now().format(TIMESTAMP_FORMAT).to_string(),
                        record.level(),
                        message
                    )
                ))
            })
            .chain(file);
        root = root.chain(file_logger);
    }

    root.apply().map_err(LoggerError::AlreadyInitialized)?;
    log::debug!("Logger initialized at level {level}");
    Ok(())
}

/// Flushes every sink of the global logger.
pub fn flush_logger() {
    log::logger().flush();
}
