//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink registry already holds its maximum number of sinks
    #[error("Sink registry full: capacity of {capacity} sinks reached")]
    CapacityExceeded { capacity: usize },

    /// Generic IO error, typically from a sink writing its output
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error while reading configuration
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a capacity error for a registry of the given size
    pub fn capacity_exceeded(capacity: usize) -> Self {
        LoggerError::CapacityExceeded { capacity }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::capacity_exceeded(32);
        assert!(matches!(err, LoggerError::CapacityExceeded { capacity: 32 }));

        let err = LoggerError::config("LoggerConfig", "max_sinks must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::capacity_exceeded(32);
        assert_eq!(err.to_string(), "Sink registry full: capacity of 32 sinks reached");

        let err = LoggerError::config("LoggerConfig", "location_width must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: location_width must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
