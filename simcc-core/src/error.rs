//! 错误类型 (Core 层)
//!
//! Every failure the compiler can hit. None of them escape the public
//! `compile` entry point: they are folded into an error-kind
//! [`CompilationResult`] there.

use crate::diagnostic::{render_diagnostics, Diagnostic};
use crate::result::CompilationResult;
use simcc_config::Stage;
use thiserror::Error;

/// Structural validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Code cannot be empty")]
    EmptyInput,

    #[error("Invalid code input")]
    InvalidInput,

    #[error("Code exceeds the maximum size of {limit} bytes")]
    TooLarge { limit: usize },

    #[error("No main() function found")]
    MissingEntryPoint,
}

/// A heuristic could not finish its scan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("source has {lines} lines, more than the limit of {limit}")]
    TooManyLines { lines: usize, limit: usize },

    #[error("{0}")]
    Custom(String),
}

/// Unified compiler error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Compilation Error(s):\n{}", render_diagnostics(.0))]
    Diagnostics(Vec<Diagnostic>),

    #[error("Error analyzing code: {0}")]
    InternalScan(#[from] ScanError),
}

impl CompileError {
    /// Stage that produced the error
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Validation(_) => Stage::Validator,
            CompileError::Diagnostics(_) | CompileError::InternalScan(_) => Stage::Scanner,
        }
    }

    /// Diagnostics carried by the error (empty unless the scan found problems)
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CompileError::Diagnostics(found) => found,
            _ => &[],
        }
    }

    /// Fold into the uniform result shape
    pub fn to_result(&self) -> CompilationResult {
        match self {
            CompileError::Diagnostics(_) => CompilationResult::failed(self.to_string()),
            _ => CompilationResult::failed(format!("Error: {self}")),
        }
    }
}

impl From<CompileError> for CompilationResult {
    fn from(err: CompileError) -> Self {
        err.to_result()
    }
}
