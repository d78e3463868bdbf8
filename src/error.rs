//! Error types for filedrop.

use thiserror::Error;

/// Common error type for filedrop.
#[derive(Error, Debug)]
pub enum FileDropError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage error (snapshot serialization, blob bookkeeping).
    #[error("storage error: {0}")]
    Storage(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Webhook delivery error.
    #[error("webhook error: {0}")]
    Webhook(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for filedrop operations.
pub type Result<T> = std::result::Result<T, FileDropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = FileDropError::Validation("description is required".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: description is required"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = FileDropError::NotFound("file".to_string());
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing blob");
        let err: FileDropError = io_err.into();
        assert!(matches!(err, FileDropError::Io(_)));
        assert!(err.to_string().contains("missing blob"));
    }

    #[test]
    fn test_webhook_error_display() {
        let err = FileDropError::Webhook("HTTP error: 502 Bad Gateway".to_string());
        assert_eq!(err.to_string(), "webhook error: HTTP error: 502 Bad Gateway");
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(FileDropError::Storage("disk full".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
