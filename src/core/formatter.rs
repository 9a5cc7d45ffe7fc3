//! Single-line text formatter for log records
//!
//! Output shape: `[<date> <time>] [<LEVEL>] [<thread>] <message>`.
//! Thread name and message are inserted verbatim; nothing is escaped.

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleFormatter {
    timestamp_format: TimestampFormat,
}

impl SimpleFormatter {
    /// Formatter with the default local `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format for this formatter
    ///
    /// # Examples
    ///
    /// ```
    /// use logger_framework::{LogLevel, LogRecord, SimpleFormatter, TimestampFormat};
    ///
    /// let formatter = SimpleFormatter::new().with_timestamp_format(TimestampFormat::UtcDateTime);
    /// let record = LogRecord::from_parts(LogLevel::Info, "ready", "svc", 0, "main");
    /// assert_eq!(formatter.format(&record), "[1970-01-01 00:00:00] [INFO] [main] ready");
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp_format.format_millis(record.timestamp()),
            record.level().to_str(),
            record.thread_name(),
            record.message()
        )
    }
}
