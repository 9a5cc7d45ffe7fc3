//! Error types for the logger framework

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors returned by appenders and propagated through [`crate::Logger::try_log`].
///
/// The built-in console appender reports [`LoggerError::IoOperation`]. The
/// remaining variants are for custom [`crate::Appender`] implementations,
/// which can use `?` on raw `io::Error`s or report their own failures.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error, converted by `?` in custom appenders
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic), for custom appenders
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error, for custom appenders
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
