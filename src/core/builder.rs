//! Fluent logger configuration

use super::{appender::Appender, formatter::SimpleFormatter, logger::Logger};
use crate::appenders::{ConsoleAppender, LoggerAppender};
use std::sync::Arc;

/// Accumulates appenders for a named [`Logger`].
///
/// If no appender is added before [`LoggerBuilder::build`], the logger gets the
/// default pair: a console appender followed by a facade-delegating appender.
///
/// # Example
///
/// ```
/// use logger_framework::LoggerBuilder;
///
/// let logger = LoggerBuilder::new("Svc")
///     .with_console_appender()
///     .with_logger_appender()
///     .build();
///
/// let names: Vec<&str> = logger.appenders().iter().map(|a| a.name()).collect();
/// assert_eq!(names, ["console", "delegate"]);
/// ```
#[must_use = "a builder does nothing until build() is called"]
pub struct LoggerBuilder {
    name: String,
    appenders: Vec<Arc<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appenders: Vec::new(),
        }
    }

    /// Builder named after the fully qualified path of `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a console appender rendering with `formatter`
    #[must_use = "builder methods return a new value"]
    pub fn with_console_appender_using(mut self, formatter: SimpleFormatter) -> Self {
        self.appenders
            .push(Arc::new(ConsoleAppender::with_formatter(formatter)));
        self
    }

    /// Add a console appender with the default formatter
    #[must_use = "builder methods return a new value"]
    pub fn with_console_appender(self) -> Self {
        self.with_console_appender_using(SimpleFormatter::new())
    }

    /// Add an appender that forwards to the `log` facade
    #[must_use = "builder methods return a new value"]
    pub fn with_logger_appender(mut self) -> Self {
        self.appenders.push(Arc::new(LoggerAppender::new()));
        self
    }

    /// Add any appender
    #[must_use = "builder methods return a new value"]
    pub fn with_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Arc::new(appender));
        self
    }

    /// Add an appender instance that other loggers may also hold
    #[must_use = "builder methods return a new value"]
    pub fn with_shared_appender(mut self, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Add a default console appender, then a facade appender
    #[must_use = "builder methods return a new value"]
    pub fn with_default_appenders(self) -> Self {
        self.with_console_appender().with_logger_appender()
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let builder = if self.appenders.is_empty() {
            self.with_default_appenders()
        } else {
            self
        };

        Logger::new(builder.name, builder.appenders)
    }
}
