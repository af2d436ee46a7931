//! simcc - A simulated C compiler
//!
//! simcc does not translate C. It checks a snippet for an entry point, runs a
//! few line-level heuristics (missing semicolons, unbalanced braces, `printf`
//! without a format string) and, when those pass, synthesizes the console
//! output the program would plausibly print.
//!
//! # Architecture
//!
//! ```text
//! simcc-config/  - Configuration types (placeholders, limits, storage)
//! simcc-core/    - Validator, heuristic scanner, output synthesizer
//! simcc-store/   - Key/value storage (memory, files)
//! simcc-api/     - Async compile entry point, program repository
//! simcc-cli/     - `simcc` command line front end
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use simcc::{compile, RunConfig};
//!
//! # async fn demo() {
//! let result = compile("int main() { printf(\"%d\\n\"); }", &RunConfig::default()).await;
//! assert_eq!(result.output_text(), "Compilation successful!\n\nProgram Output:\n42\n");
//! # }
//! ```

// 重导出常用类型
pub use simcc_api::{
    compile, compile_global, compile_value, compile_with, init_config, is_initialized, ApiError, CompileRequest, ErrorReport, ProgramDraft, ProgramRecord,
    ProgramRepository, RunConfig, DEFAULT_PROGRAM,
};
pub use simcc_config::{CompilerConfig, LimitConfig, Placeholders, Stage, StoreConfig};
pub use simcc_core::{
    CompilationResult, CompileError, Diagnostic, DiagnosticKind, Heuristic, HeuristicPipeline,
    ResultKind, ScanContext, ScanError, SimulatedCompiler, ValidationError,
};
pub use simcc_store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Compile without the simulated latency
///
/// Convenience for callers that only want the verdict.
pub async fn compile_now(source: &str) -> CompilationResult {
    compile(source, &RunConfig::immediate()).await
}
