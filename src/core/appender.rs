//! Appender trait for log output destinations

use super::{error::Result, formatter::SimpleFormatter, log_record::LogRecord};

/// A delivery target for log records.
///
/// Loggers are shared across threads once built, so appenders take `&self` and
/// synchronise any internal state themselves.
pub trait Appender: Send + Sync {
    fn append(&self, record: &LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// The formatter this appender renders lines with, if it renders any.
    fn formatter(&self) -> Option<&SimpleFormatter> {
        None
    }
}
