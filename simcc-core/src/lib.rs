//! simcc Core - Simulated C compiler (pure logic, no IO)
//!
//! Contains the structural validator, the heuristic scanner pipeline and the
//! output synthesizer. Only operates on in-memory strings, no file IO or
//! terminal output, and never sleeps: the simulated latency belongs to the
//! API layer.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//!
//! ```text
//! source ──► validator ──► scanner (heuristics) ──► synthesizer ──► CompilationResult
//!               │                 │
//!               └──── error ◄─────┘
//! ```

pub mod calls;
pub mod compiler;
pub mod diagnostic;
pub mod error;
pub mod result;
pub mod scanner;
pub mod synthesizer;
pub mod validator;

mod text;

// Re-export common types
pub use compiler::SimulatedCompiler;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{CompileError, ScanError, ValidationError};
pub use result::{CompilationResult, ResultKind};
pub use scanner::{Heuristic, HeuristicPipeline, ScanContext};

// Re-export config types from simcc-config
pub use simcc_config::{CompilerConfig, LimitConfig, Placeholders, Stage};
