//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Message template could not be rendered
    #[error("Template error in '{template}': {detail}")]
    Template { template: String, detail: String },

    /// Invalid strftime datetime format string
    #[error("Invalid datetime format string: '{format}'")]
    Timestamp { format: String },

    /// Generic error, for external sink implementations
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a template rendering error
    pub fn template(template: impl Into<String>, detail: impl Into<String>) -> Self {
        LoggerError::Template {
            template: template.into(),
            detail: detail.into(),
        }
    }

    /// Create a timestamp format error
    pub fn timestamp(format: impl Into<String>) -> Self {
        LoggerError::Timestamp {
            format: format.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
