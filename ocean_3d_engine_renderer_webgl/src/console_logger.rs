/// ConsoleLogger - routes engine logs to the browser devtools console

use ocean_3d_engine::ocean3d::log::{LogEntry, LogSeverity, Logger};
use ocean_3d_engine::log::format_timestamp;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logger writing to `console.debug/log/warn/error` by severity
///
/// Format matches the default logger without colors:
/// `[timestamp] [SEVERITY] [source] message (file:line)`
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, entry: &LogEntry) {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            format_timestamp(entry.timestamp),
            entry.severity.label(),
            entry.source,
            entry.message
        );
        if let (Some(file), Some(number)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, number));
        }

        let line = JsValue::from_str(&line);
        match entry.severity {
            LogSeverity::Trace | LogSeverity::Debug => console::debug_1(&line),
            LogSeverity::Info => console::log_1(&line),
            LogSeverity::Warn => console::warn_1(&line),
            LogSeverity::Error => console::error_1(&line),
        }
    }
}
