//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a [`Logger`](crate::Logger) followed by `format!`-style
//! arguments.
//!
//! # Examples
//!
//! ```
//! use logger_framework::prelude::*;
//! use logger_framework::info;
//!
//! let logger = Logger::builder("server").with_console_appender().build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logger_framework::prelude::*;
/// # let logger = Logger::new("svc", Vec::new());
/// use logger_framework::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logger_framework::prelude::*;
/// # let logger = Logger::new("svc", Vec::new());
/// use logger_framework::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Appender, LogLevel, LogRecord, Logger, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct Capture(Mutex<Vec<(LogLevel, String)>>);

    impl Appender for Capture {
        fn append(&self, record: &LogRecord) -> Result<()> {
            self.0.lock().push((record.level(), record.message().to_string()));
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn capturing_logger() -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let logger = Logger::new("macros", vec![capture.clone() as Arc<dyn Appender>]);
        (logger, capture)
    }

    #[test]
    fn test_log_macro() {
        let (logger, capture) = capturing_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Warn, "Formatted: {}", 42);

        assert_eq!(
            *capture.0.lock(),
            vec![
                (LogLevel::Info, "Test message".to_string()),
                (LogLevel::Warn, "Formatted: 42".to_string()),
            ]
        );
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = capturing_logger();
        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let captured = capture.0.lock();
        let levels: Vec<LogLevel> = captured.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert_eq!(captured[3].1, "Retry 1 of 3");
    }
}
