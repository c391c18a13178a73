//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures
//! log entries and forwards them to the application state for display
//! in the log overlay.

use log::{Level, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

pub type LogCallback = Box<dyn Fn(String) + Send + Sync>;
type CallbackSlot = Arc<Mutex<Option<LogCallback>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    log_callback: CallbackSlot,
}

impl CustomLogger {
    pub fn new() -> Self {
        CustomLogger {
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // If lock fails, we can't set the callback, but this is
        // non-critical. The logger will still work, just won't capture
        // to state.
    }
}

impl Log for CustomLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Allow all logs
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Capture to state
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    let formatted = format_log(record);
                    cb(formatted);
                }
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_callback_receives_formatted_entries() {
        let logger = CustomLogger::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        logger.set_log_callback(Box::new(move |entry| {
            assert!(entry.contains("INFO"));
            assert!(entry.contains("hello"));
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .build(),
        );
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_logging_without_callback_is_silent() {
        let logger = CustomLogger::new();
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
    }
}
