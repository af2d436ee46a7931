//! API 错误类型
//!
//! Unified error type for repository and storage operations, plus a
//! structured report for JSON consumers. Compilation never fails with this
//! type: it always resolves to a `CompilationResult`.

use serde::Serialize;
use simcc_store::StoreError;
use thiserror::Error;

/// simcc API error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Please enter a program title")]
    MissingTitle,

    #[error("Please enter some code")]
    MissingCode,

    /// `index` is 0-based; the message shows the 1-based position
    #[error("No program #{position}; there are {len} saved programs", position = .index + 1)]
    ProgramNotFound { index: usize, len: usize },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Where the error happened: "program", "store" or "serialize"
    pub phase: &'static str,
    /// Error kind name
    pub error_kind: &'static str,
    /// Human readable message
    pub message: String,
}

impl ApiError {
    /// Get the phase name
    pub fn phase(&self) -> &'static str {
        match self {
            ApiError::MissingTitle | ApiError::MissingCode | ApiError::ProgramNotFound { .. } => {
                "program"
            }
            ApiError::Store(_) => "store",
            ApiError::Serialization(_) => "serialize",
        }
    }

    /// Convert into a structured report
    pub fn to_report(&self) -> ErrorReport {
        let error_kind = match self {
            ApiError::MissingTitle => "MissingTitle",
            ApiError::MissingCode => "MissingCode",
            ApiError::ProgramNotFound { .. } => "ProgramNotFound",
            ApiError::Store(StoreError::InvalidKey { .. }) => "InvalidKey",
            ApiError::Store(StoreError::Io { .. }) => "Io",
            ApiError::Store(StoreError::LockPoisoned) => "LockPoisoned",
            ApiError::Serialization(_) => "Serialization",
        };
        ErrorReport {
            phase: self.phase(),
            error_kind,
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApiError::ProgramNotFound { index: 3, len: 2 };
        assert_eq!(err.to_string(), "No program #4; there are 2 saved programs");
        assert_eq!(err.phase(), "program");
    }

    #[test]
    fn test_store_error_report() {
        let err: ApiError = StoreError::Io {
            message: "disk full".into(),
        }
        .into();
        let report = err.to_report();
        assert_eq!(report.phase, "store");
        assert_eq!(report.error_kind, "Io");
        assert_eq!(report.message, "Storage error: IO error: disk full");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<u8, _> = serde_json::from_str("nope");
        let err: ApiError = parse.unwrap_err().into();
        assert_eq!(err.to_report().phase, "serialize");
    }
}
