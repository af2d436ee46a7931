//! simcc API - Execution orchestration layer
//!
//! Provides the unified compile interface, including:
//! - The async compile entry point with simulated latency
//! - Configuration abstraction (RunConfig)
//! - The program repository
//! - Unified error handling (ApiError)
//!
//! For CLI convenience, this crate provides a global singleton config.
//! For library use, prefer the explicit `compile(source, &config)` API.

use std::time::Duration;
use tracing::{debug, info};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod error;
pub mod repository;
pub mod types;
pub use error::{ApiError, ErrorReport};
pub use repository::ProgramRepository;
pub use types::{now_millis, CompileRequest, ProgramDraft, ProgramRecord, DEFAULT_PROGRAM};

// Re-export config and core types
pub use simcc_config;
pub use simcc_config::{CompilerConfig, LimitConfig, Placeholders, Stage, StoreConfig};
pub use simcc_core::{
    CompilationResult, CompileError, Diagnostic, DiagnosticKind, Heuristic, HeuristicPipeline,
    ResultKind, SimulatedCompiler, ValidationError,
};
pub use simcc_store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Compile with explicit configuration
///
/// This is the recommended API for library users. Always resolves to a
/// result; every failure is folded into an error-kind `CompilationResult`.
pub async fn compile(source: &str, config: &RunConfig) -> CompilationResult {
    compile_with(&config.build_compiler(), source, config.latency()).await
}

/// Compile with a caller-built compiler (custom heuristics)
///
/// Validation failures resolve immediately. Otherwise the call suspends once
/// for `latency`, then scans and synthesizes. Dropping the future is the
/// only way to abandon a compilation.
pub async fn compile_with(
    compiler: &SimulatedCompiler,
    source: &str,
    latency: Duration,
) -> CompilationResult {
    info!(target: "simcc::compiler", bytes = source.len(), "Starting compilation");

    if let Err(err) = compiler.validate(source) {
        debug!(target: "simcc::validator", error = %err, "validation failed");
        return CompileError::from(err).into();
    }

    simulate_latency(latency).await;

    let result = match compiler.analyze(source) {
        Ok(transcript) => CompilationResult::succeeded(&transcript),
        Err(err) => err.into(),
    };

    info!(target: "simcc::compiler", kind = result.kind().as_str(), "Compilation completed");
    result
}

/// Compile a raw JSON value (defensive boundary for untyped callers)
///
/// Anything other than a JSON string resolves to "Error: Invalid code input".
pub async fn compile_value(input: &serde_json::Value, config: &RunConfig) -> CompilationResult {
    match input.as_str() {
        Some(source) => compile(source, config).await,
        None => CompileError::from(ValidationError::InvalidInput).into(),
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        debug!(target: "simcc::compiler", latency_ms = latency.as_millis() as u64, "simulating latency");
        tokio::time::sleep(latency).await;
    }
}

// ==================== Legacy API (using global config) ====================

/// Compile source code (uses global config)
///
/// # Panics
/// If global config is not initialized
pub async fn compile_global(source: &str) -> CompilationResult {
    compile(source, get_config()).await
}
