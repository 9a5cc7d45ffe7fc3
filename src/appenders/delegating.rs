//! Appender that forwards records to an external logging facade

use crate::core::{Appender, LogLevel, LogRecord, Result};
use std::sync::Arc;

/// Facade logger name used by [`LoggerAppender::new`].
pub const FACADE_LOGGER_NAME: &str = "logger_framework::delegate";

/// Severity-keyed view of an external logging facade.
pub trait LogFacade: Send + Sync {
    fn trace(&self, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`LogFacade`] backed by the `log` crate's global logger.
///
/// Every call is emitted with the handle's name as the `log` target. Which
/// backend receives it, and how it is rendered, is decided by whatever logger
/// the application installed with `log::set_logger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCrateFacade {
    target: &'static str,
}

impl LogCrateFacade {
    pub const fn named(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl LogFacade for LogCrateFacade {
    fn trace(&self, message: &str) {
        log::trace!(target: self.target, "{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!(target: self.target, "{}", message);
    }

    fn info(&self, message: &str) {
        log::info!(target: self.target, "{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!(target: self.target, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: self.target, "{}", message);
    }
}

/// Forwards each record's message to a facade, choosing the method by level.
///
/// Only the message crosses over; thread name, timestamp and logger name stay
/// behind.
pub struct LoggerAppender {
    facade: Arc<dyn LogFacade>,
}

impl LoggerAppender {
    /// Delegate to the `log` crate under [`FACADE_LOGGER_NAME`].
    pub fn new() -> Self {
        Self::with_facade(Arc::new(LogCrateFacade::named(FACADE_LOGGER_NAME)))
    }

    pub fn with_facade(facade: Arc<dyn LogFacade>) -> Self {
        Self { facade }
    }
}

impl Default for LoggerAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for LoggerAppender {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let message = record.message();
        match record.level() {
            LogLevel::Trace => self.facade.trace(message),
            LogLevel::Debug => self.facade.debug(message),
            LogLevel::Info => self.facade.info(message),
            LogLevel::Warn => self.facade.warn(message),
            LogLevel::Error => self.facade.error(message),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "delegate"
    }
}
