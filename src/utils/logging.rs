// Logger setup for the console and an optional log file

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use crate::utils::error::{GenerationError, Result};

/// Minimum severity written by the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name. Anything unrecognised means DEBUG.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "ERROR" => Self::Error,
            "WARNING" | "WARN" => Self::Warning,
            "INFO" => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Directive understood by `EnvFilter`; tracing has no level above ERROR
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Critical | Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// `RUST_LOG` wins over the configured level
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Install a console logger on stderr.
///
/// Each line carries the timestamp, level, module, and the file and line
/// of the logging call.
pub fn init_stream(level: LogLevel) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    Registry::default()
        .with(env_filter(level))
        .with(console_layer)
        .try_init()
        .map_err(|e| GenerationError::Logging(e.to_string()))
}

/// Install a console logger plus a UTF-8 log file sink appending to `path`
pub fn init_with_file(path: &Path, level: LogLevel) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    Registry::default()
        .with(env_filter(level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| GenerationError::Logging(e.to_string()))
}

/// Install the console logger, adding the file sink when a path is given
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => init_with_file(path, level),
        None => init_stream(level),
    }
}
