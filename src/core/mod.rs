//! Core logger types and traits

pub mod appender;
pub mod builder;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod registry;
pub mod timestamp;

pub use appender::Appender;
pub use builder::LoggerBuilder;
pub use error::{LoggerError, Result};
pub use formatter::SimpleFormatter;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use registry::LoggerRegistry;
pub use timestamp::TimestampFormat;
