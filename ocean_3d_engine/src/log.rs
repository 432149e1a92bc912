//! Internal logging system for Ocean3D Engine
//!
//! This module provides a small logging facade with:
//! - Customizable logger via Logger trait (console, browser devtools, test capture)
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs
//!
//! Timestamps come from `web_time`, which maps to `std::time` natively and to
//! `performance.now()` on wasm32.

use colored::*;
use chrono::{DateTime, Local, Utc};
use web_time::{SystemTime, UNIX_EPOCH};

/// Logger trait for custom logging implementations
///
/// Implement this trait to redirect engine logs (browser console, file, test capture...)
///
/// # Example
///
/// ```no_run
/// use ocean_3d_engine::ocean3d::log::{Logger, LogEntry};
///
/// struct SilentLogger;
///
/// impl Logger for SilentLogger {
///     fn log(&self, _entry: &LogEntry) {}
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "ocean3d::Shader", "ocean3d::webgl")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console loggers
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS.mmm` in local time
pub fn format_timestamp(timestamp: SystemTime) -> String {
    let since_epoch = timestamp.duration_since(UNIX_EPOCH).unwrap_or_default();
    let utc = DateTime::<Utc>::from_timestamp(
        since_epoch.as_secs() as i64,
        since_epoch.subsec_nanos(),
    )
    .unwrap_or_default();
    let local: DateTime<Local> = utc.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let timestamp = format_timestamp(entry.timestamp);

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_trace;
/// engine_trace!("ocean3d::Mesh", "Binding {} attributes", 2);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::ocean3d::Engine::log(
            $crate::ocean3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_debug;
/// engine_debug!("ocean3d::Shader", "Linked program with {} uniforms", 4);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::ocean3d::Engine::log(
            $crate::ocean3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_info;
/// engine_info!("ocean3d::webgl", "WebGL context created");
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::ocean3d::Engine::log(
            $crate::ocean3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_warn;
/// engine_warn!("ocean3d::webgl", "Extension {} unavailable", "OES_element_index_uint");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::ocean3d::Engine::log(
            $crate::ocean3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use ocean_3d_engine::engine_error;
/// engine_error!("ocean3d::Shader", "Failed to link: {}", "missing main");
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::ocean3d::Engine::log_detailed(
            $crate::ocean3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
