//! Timestamp formatting utilities
//!
//! Renders a record's millisecond timestamp for text output. The default
//! rendering is a second-resolution date and time in the local timezone.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp rendering options for the formatter
///
/// # Examples
///
/// ```
/// use logger_framework::TimestampFormat;
///
/// let format = TimestampFormat::UtcDateTime;
/// assert_eq!(format.format_millis(0), "1970-01-01 00:00:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45` in the local timezone
    #[default]
    LocalDateTime,

    /// `2025-01-08 10:30:45` in UTC
    UtcDateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime pattern, rendered in the local timezone
    Custom(String),
}

const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

impl TimestampFormat {
    /// Format a UTC datetime according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::LocalDateTime => datetime
                .with_timezone(&Local)
                .format(DATE_TIME_PATTERN)
                .to_string(),
            TimestampFormat::UtcDateTime => datetime.format(DATE_TIME_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let local = datetime.with_timezone(&Local);
                let mut rendered = String::new();
                // invalid strftime patterns fall back to the default rendering
                match write!(rendered, "{}", local.format(pattern)) {
                    Ok(()) => rendered,
                    Err(_) => local.format(DATE_TIME_PATTERN).to_string(),
                }
            }
        }
    }

    /// Format a millisecond Unix timestamp according to this format
    #[must_use]
    pub fn format_millis(&self, millis: i64) -> String {
        match self {
            TimestampFormat::UnixMillis => millis.to_string(),
            _ => self.format(&DateTime::from_timestamp_millis(millis).unwrap_or_default()),
        }
    }
}
