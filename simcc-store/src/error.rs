//! Store Error Types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Key cannot be mapped to a storage location
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// IO error
    #[error("IO error: {message}")]
    Io { message: String },

    /// A writer panicked while holding the lock
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StoreError::InvalidKey {
            key: "../x".into(),
            reason: "contains '..'".into(),
        };
        assert_eq!(err.to_string(), "Invalid key '../x': contains '..'");
        assert_eq!(StoreError::LockPoisoned.to_string(), "Lock poisoned");
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("file not found"));
    }
}
