//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a bounded buffer shared with the application state for display in the UI.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of retained log lines.
///
pub const LOG_CAPACITY: usize = 500;

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

/// Bounded, shareable buffer of formatted log lines. Oldest lines are
/// dropped first.
///
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    /// Append a line, evicting the oldest one when full.
    ///
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return up to `count` of the newest lines, oldest first.
    ///
    pub fn recent(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs to a shared buffer
///
pub struct CustomLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl CustomLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        CustomLogger { buffer, level }
    }

    /// Install a logger writing into the buffer as the global logger.
    ///
    pub fn init(buffer: LogBuffer, level: LevelFilter) -> AppResult<()> {
        log::set_boxed_logger(Box::new(CustomLogger::new(buffer, level)))
            .map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies are noisy at debug level
        metadata.level() <= self.level
            && (metadata.target().starts_with("qingshi") || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_keeps_newest_entries() {
        let buffer = LogBuffer::new();
        for i in 0..(LOG_CAPACITY + 10) {
            buffer.push(i.to_string());
        }
        assert_eq!(buffer.len(), LOG_CAPACITY);
        let recent = buffer.recent(2);
        assert_eq!(
            recent,
            vec![
                (LOG_CAPACITY + 8).to_string(),
                (LOG_CAPACITY + 9).to_string()
            ]
        );
    }

    #[test]
    fn buffer_clones_share_entries() {
        let buffer = LogBuffer::new();
        let clone = buffer.clone();
        clone.push("hello".to_string());
        assert_eq!(buffer.recent(10), vec!["hello".to_string()]);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn logger_formats_and_filters() {
        let buffer = LogBuffer::new();
        let logger = CustomLogger::new(buffer.clone(), LevelFilter::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("loaded"))
                .level(Level::Info)
                .target("qingshi_tui::app")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too verbose"))
                .level(Level::Debug)
                .target("qingshi_tui::app")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("connection pool"))
                .level(Level::Info)
                .target("hyper::client")
                .build(),
        );
        let entries = buffer.recent(10);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("INFO loaded"));
    }
}
