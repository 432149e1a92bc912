/// Ocean3D Engine - global services shared by every subsystem
///
/// The engine owns no GPU state: devices, shaders and meshes are created and
/// owned by the caller. What remains global is the logger, stored in a
/// thread-safe static so the `engine_*!` macros can reach it from anywhere.

use std::sync::{OnceLock, RwLock};
use web_time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Main engine facade
///
/// # Example
///
/// ```no_run
/// use ocean_3d_engine::ocean3d::{Engine, log::{Logger, LogEntry}};
///
/// struct BrowserLogger;
/// impl Logger for BrowserLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to console...
///     }
/// }
///
/// Engine::set_logger(BrowserLogger);
/// ```
pub struct Engine;

impl Engine {
    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (browser console, test capture...)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "ocean3d::Shader")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
