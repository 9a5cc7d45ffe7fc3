//! Console appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result, SimpleFormatter};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each record as one formatted line to standard output.
///
/// The line and its trailing newline go out in a single `write_all` while the
/// appender's writer lock is held, so concurrent callers interleave whole lines
/// only.
pub struct ConsoleAppender {
    formatter: SimpleFormatter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_formatter(SimpleFormatter::new())
    }

    pub fn with_formatter(formatter: SimpleFormatter) -> Self {
        Self::with_writer(formatter, io::stdout())
    }

    /// Send formatted lines to `writer` instead of standard output
    ///
    /// # Example
    ///
    /// ```
    /// use logger_framework::appenders::ConsoleAppender;
    /// use logger_framework::SimpleFormatter;
    ///
    /// let appender = ConsoleAppender::with_writer(SimpleFormatter::new(), std::io::sink());
    /// ```
    pub fn with_writer(formatter: SimpleFormatter, writer: impl Write + Send + 'static) -> Self {
        Self {
            formatter,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');

        self.writer
            .lock()
            .write_all(line.as_bytes())
            .map_err(|e| {
                LoggerError::io_operation("writing to console", "log line not written", e)
            })
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| {
                LoggerError::io_operation("flushing console", "buffered lines not written", e)
            })
    }

    fn name(&self) -> &str {
        "console"
    }

    fn formatter(&self) -> Option<&SimpleFormatter> {
        Some(&self.formatter)
    }
}
