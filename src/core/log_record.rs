//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static THREAD_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn resolve_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

/// Name of the calling thread, or its id when the thread is unnamed.
///
/// Resolved once per thread and cached. Records built from another
/// thread-local's destructor, after the cache itself is gone, resolve the name
/// directly.
fn current_thread_name() -> String {
    THREAD_NAME_CACHE
        .try_with(|cache| {
            cache
                .borrow_mut()
                .get_or_insert_with(resolve_thread_name)
                .clone()
        })
        .unwrap_or_else(|_| resolve_thread_name())
}

/// One captured log event.
///
/// All fields are fixed when the record is constructed; there are no setters.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    message: String,
    level: LogLevel,
    timestamp: i64,
    thread_name: String,
    logger_name: String,
}

impl LogRecord {
    /// Capture a record on the calling thread, timestamped now.
    pub fn new(level: LogLevel, message: impl Into<String>, logger_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            timestamp: Utc::now().timestamp_millis(),
            thread_name: current_thread_name(),
            logger_name: logger_name.into(),
        }
    }

    /// Build a record from explicit parts instead of the ambient clock and thread.
    pub fn from_parts(
        level: LogLevel,
        message: impl Into<String>,
        logger_name: impl Into<String>,
        timestamp_millis: i64,
        thread_name: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            timestamp: timestamp_millis,
            thread_name: thread_name.into(),
            logger_name: logger_name.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// The capture time as a UTC datetime.
    ///
    /// Timestamps outside chrono's representable range clamp to the epoch.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }
}
