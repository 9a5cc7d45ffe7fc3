//! Main logger implementation

use super::{
    appender::Appender, builder::LoggerBuilder, error::Result, log_level::LogLevel,
    log_record::LogRecord,
};
use std::fmt;
use std::sync::Arc;

/// A named, immutable fan-out of records to an ordered list of appenders.
///
/// Every call builds exactly one [`LogRecord`] and hands that same record to
/// each appender in list order on the calling thread.
pub struct Logger {
    name: String,
    appenders: Vec<Arc<dyn Appender>>,
}

impl Logger {
    /// Create a logger over a fixed appender list.
    ///
    /// An empty list is allowed; such a logger emits nothing.
    #[must_use]
    pub fn new(name: impl Into<String>, appenders: Vec<Arc<dyn Appender>>) -> Self {
        Self {
            name: name.into(),
            appenders,
        }
    }

    /// Create a builder for a logger named `name`
    ///
    /// # Example
    /// ```
    /// use logger_framework::Logger;
    ///
    /// let logger = Logger::builder("CustomLogger").with_console_appender().build();
    /// assert_eq!(logger.appenders().len(), 1);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn appenders(&self) -> &[Arc<dyn Appender>] {
        &self.appenders
    }

    /// Deliver one record to every appender, stopping at the first failure.
    pub fn try_log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        let record = LogRecord::new(level, message, self.name.as_str());
        for appender in &self.appenders {
            appender.append(&record)?;
        }
        Ok(())
    }

    /// Deliver one record to every appender.
    ///
    /// # Panics
    ///
    /// Panics if an appender fails, like `println!` does when stdout is gone.
    /// Use [`Logger::try_log`] to handle delivery errors instead.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if let Err(e) = self.try_log(level, message) {
            panic!("logger '{}' failed to deliver {} record: {}", self.name, level, e);
        }
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn try_trace(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Trace, message)
    }

    pub fn try_debug(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Debug, message)
    }

    pub fn try_info(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Info, message)
    }

    pub fn try_warn(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Warn, message)
    }

    pub fn try_error(&self, message: impl Into<String>) -> Result<()> {
        self.try_log(LogLevel::Error, message)
    }

    /// Flush every appender in list order.
    pub fn flush(&self) -> Result<()> {
        for appender in &self.appenders {
            appender.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field(
                "appenders",
                &self.appenders.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;

    struct RecordingAppender {
        label: &'static str,
        journal: Arc<Mutex<Vec<(&'static str, LogRecord)>>>,
    }

    impl Appender for RecordingAppender {
        fn append(&self, record: &LogRecord) -> Result<()> {
            self.journal.lock().push((self.label, record.clone()));
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&self, _record: &LogRecord) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn recording(
        label: &'static str,
        journal: &Arc<Mutex<Vec<(&'static str, LogRecord)>>>,
    ) -> Arc<dyn Appender> {
        Arc::new(RecordingAppender {
            label,
            journal: Arc::clone(journal),
        })
    }

    #[test]
    fn test_level_methods_tag_records() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("svc", vec![recording("a", &journal)]);

        logger.trace("t");
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        let levels: Vec<LogLevel> = journal.lock().iter().map(|(_, r)| r.level()).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert!(journal.lock().iter().all(|(_, r)| r.logger_name() == "svc"));
    }

    #[test]
    fn test_appenders_called_in_list_order_with_same_record() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new(
            "fanout",
            vec![recording("first", &journal), recording("second", &journal)],
        );

        logger.info("one");
        logger.warn("two");

        let journal = journal.lock();
        let labels: Vec<&str> = journal.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["first", "second", "first", "second"]);

        for pair in journal.chunks(2) {
            let (a, b) = (&pair[0].1, &pair[1].1);
            assert_eq!(a.message(), b.message());
            assert_eq!(a.timestamp(), b.timestamp());
            assert_eq!(a.thread_name(), b.thread_name());
        }
    }

    #[test]
    fn test_empty_logger_emits_nothing() {
        let logger = Logger::new("silent", Vec::new());
        logger.info("nobody hears this");
        assert!(logger.try_error("or this").is_ok());
        assert!(logger.flush().is_ok());
    }

    #[test]
    fn test_failure_aborts_remaining_appenders() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new(
            "abort",
            vec![
                recording("before", &journal),
                Arc::new(FailingAppender) as Arc<dyn Appender>,
                recording("after", &journal),
            ],
        );

        let result = logger.try_info("doomed");

        assert!(matches!(result, Err(LoggerError::Other(_))));
        let labels: Vec<&str> = journal.lock().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["before"]);
    }

    #[test]
    #[should_panic(expected = "failed to deliver INFO record")]
    fn test_failure_propagates_out_of_level_method() {
        let logger = Logger::new("abort", vec![Arc::new(FailingAppender) as Arc<dyn Appender>]);
        logger.info("doomed");
    }

    #[test]
    fn test_logging_from_thread_local_destructor() {
        struct LogOnExit(Logger);

        impl Drop for LogOnExit {
            fn drop(&mut self) {
                self.0.info("thread shutting down");
            }
        }

        thread_local! {
            static EXIT_GUARD: std::cell::RefCell<Option<LogOnExit>> =
                const { std::cell::RefCell::new(None) };
        }

        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("exit", vec![recording("rec", &journal)]);
        let guard_logger = Logger::new("exit", vec![recording("rec", &journal)]);

        let joined = std::thread::Builder::new()
            .name("tls-exit".to_string())
            .spawn(move || {
                // guard registered before the thread-name cache, so it is
                // destroyed after the cache on some platforms
                EXIT_GUARD.with(|guard| *guard.borrow_mut() = Some(LogOnExit(guard_logger)));
                logger.info("working");
            })
            .unwrap()
            .join();

        assert!(joined.is_ok());
        let journal = journal.lock();
        let messages: Vec<&str> = journal.iter().map(|(_, r)| r.message()).collect();
        assert_eq!(messages, ["working", "thread shutting down"]);
        assert!(!journal[1].1.thread_name().is_empty());
    }

    #[test]
    fn test_debug_lists_appender_names() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new("dbg", vec![recording("rec", &journal)]);
        assert_eq!(format!("{:?}", logger), r#"Logger { name: "dbg", appenders: ["rec"] }"#);
    }
}
