//! # Logger Framework
//!
//! A minimal, embeddable logging framework: named loggers fan each message out,
//! synchronously and in order, to a list of appenders.
//!
//! ## Features
//!
//! - **Fluent configuration**: [`LoggerBuilder`] accumulates appenders and falls
//!   back to console + `log` facade when none are given
//! - **Shared named loggers**: [`LoggerRegistry`] builds each name once
//! - **Pluggable output**: implement [`Appender`] for custom destinations
//!
//! ```
//! use logger_framework::prelude::*;
//!
//! let registry = LoggerRegistry::new();
//! let logger = registry.builder("CustomLogger").with_console_appender().build();
//! logger.info("This is from custom logger (console only)");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, LogFacade, LoggerAppender};
    pub use crate::core::{
        Appender, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerRegistry,
        Result, SimpleFormatter, TimestampFormat,
    };
}

pub use crate::appenders::{
    ConsoleAppender, LogCrateFacade, LogFacade, LoggerAppender, FACADE_LOGGER_NAME,
};
pub use crate::core::{
    Appender, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerRegistry, Result,
    SimpleFormatter, TimestampFormat,
};
