//! Appender implementations

pub mod console;
pub mod delegating;

pub use console::ConsoleAppender;
pub use delegating::{LogCrateFacade, LogFacade, LoggerAppender, FACADE_LOGGER_NAME};

pub use crate::core::Appender;
