//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size
//! circular buffer. Every accepted record is also mirrored to the browser
//! console on wasm32, or to stderr on native targets (tests, tooling).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A single captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.into(),
            capacity,
            level,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append an entry, evicting the oldest one once the buffer is full.
    pub fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    /// Snapshot of the buffer, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&self.app_name, &entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(app_name: &str, entry: &LogEntry) {
    use wasm_bindgen::JsValue;

    let line = JsValue::from_str(&format!("[{}] {}", app_name, entry));
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(app_name: &str, entry: &LogEntry) {
    eprintln!("[{}] {}", app_name, entry);
}

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Install the rolling logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger: &'static RollingLogger =
        Box::leak(Box::new(RollingLogger::new(app_name, capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Recent records of the installed logger, oldest first (empty before init)
pub fn recent_entries() -> Vec<LogEntry> {
    LOGGER.get().map(|logger| logger.entries()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_most_recent_entries() {
        let logger = RollingLogger::new("Test", 3, LevelFilter::Trace);
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new("Test", 10, LevelFilter::Warn);
        log_line(&logger, Level::Debug, "noise");
        log_line(&logger, Level::Info, "noise");
        log_line(&logger, Level::Warn, "careful");
        log_line(&logger, Level::Error, "broken");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[1].message, "broken");
        assert_eq!(entries[1].target, "test");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = RollingLogger::new("Test", 0, LevelFilter::Trace);
        log_line(&logger, Level::Error, "dropped");
        assert!(logger.is_empty());
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new("Test", 4, LevelFilter::Info);
        log_line(&logger, Level::Info, "a");
        assert_eq!(logger.len(), 1);
        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_entry_display() {
        let logger = RollingLogger::new("Test", 1, LevelFilter::Info);
        log_line(&logger, Level::Info, "hello");
        let line = logger.entries()[0].to_string();
        assert!(line.contains("INFO"));
        assert!(line.ends_with("test: hello"));
    }
}
