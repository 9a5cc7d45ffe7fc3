//! Named logger registry
//!
//! A [`LoggerRegistry`] hands out one shared [`Logger`] per name. The first
//! request for a name decides its configuration (the builder defaults); later
//! requests get the same instance back.

use super::{builder::LoggerBuilder, logger::Logger};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// `log` target for the registry's own diagnostics.
const REGISTRY_TARGET: &str = "logger_framework::registry";

/// Name to logger cache enforcing at most one construction per name.
///
/// Construct one at startup and pass it (or an `Arc` of it) to whatever needs
/// shared loggers.
///
/// # Example
///
/// ```
/// use logger_framework::LoggerRegistry;
/// use std::sync::Arc;
///
/// let registry = LoggerRegistry::new();
/// let first = registry.get_logger("orders");
/// let again = registry.get_logger("orders");
/// assert!(Arc::ptr_eq(&first, &again));
/// ```
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the logger registered under `name`, creating it with the default
    /// appenders on first use.
    ///
    /// Lookup and insert happen under one lock, so concurrent first requests
    /// for the same name construct a single logger.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(LoggerBuilder::new(name).with_default_appenders().build());
        loggers.insert(name.to_string(), Arc::clone(&logger));
        // the installed log backend may call back into this registry
        drop(loggers);

        log::debug!(target: REGISTRY_TARGET, "created logger '{}'", name);
        logger
    }

    /// [`LoggerRegistry::get_logger`] keyed by the fully qualified path of `T`.
    pub fn get_logger_for<T: ?Sized>(&self) -> Arc<Logger> {
        self.get_logger(std::any::type_name::<T>())
    }

    /// A fresh builder; the logger it produces is not registered.
    pub fn builder(&self, name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn builder_for<T: ?Sized>(&self) -> LoggerBuilder {
        LoggerBuilder::for_type::<T>()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }
}
