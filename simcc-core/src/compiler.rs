//! The simulated compiler
//!
//! Runs the three stages in order and folds every failure into a
//! [`CompilationResult`]. The simulated latency is not applied here; the API
//! layer suspends between [`SimulatedCompiler::validate`] and
//! [`SimulatedCompiler::analyze`].

use crate::error::{CompileError, ValidationError};
use crate::result::CompilationResult;
use crate::scanner::HeuristicPipeline;
use crate::synthesizer::synthesize;
use crate::validator::validate;
use simcc_config::{CompilerConfig, LimitConfig};
use tracing::{debug, info};

#[derive(Debug)]
pub struct SimulatedCompiler {
    config: CompilerConfig,
    limits: LimitConfig,
    heuristics: HeuristicPipeline,
}

impl SimulatedCompiler {
    /// Compiler with the standard heuristics
    pub fn new(config: CompilerConfig, limits: LimitConfig) -> Self {
        Self {
            config,
            limits,
            heuristics: HeuristicPipeline::standard(),
        }
    }

    /// Replace the heuristic pipeline
    pub fn with_heuristics(mut self, heuristics: HeuristicPipeline) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    pub fn heuristics(&self) -> &HeuristicPipeline {
        &self.heuristics
    }

    /// Stage (a): structural validation
    pub fn validate(&self, source: &str) -> Result<(), ValidationError> {
        validate(source, &self.limits)
    }

    /// Stages (b) and (c) on already validated source
    ///
    /// Returns the transcript, or the diagnostics / scan failure.
    pub fn analyze(&self, source: &str) -> Result<String, CompileError> {
        let diagnostics = self.heuristics.run(source, &self.limits)?;
        if !diagnostics.is_empty() {
            debug!(target: "simcc::scanner", count = diagnostics.len(), "diagnostics found");
            return Err(CompileError::Diagnostics(diagnostics));
        }
        Ok(synthesize(source, &self.config))
    }

    /// All three stages, as a `Result`
    pub fn try_compile(&self, source: &str) -> Result<String, CompileError> {
        self.validate(source)?;
        self.analyze(source)
    }

    /// All three stages, folded into the uniform result shape
    pub fn compile(&self, source: &str) -> CompilationResult {
        let result = match self.try_compile(source) {
            Ok(transcript) => CompilationResult::succeeded(&transcript),
            Err(err) => err.into(),
        };
        info!(target: "simcc::compiler", kind = result.kind().as_str(), "compilation finished");
        result
    }
}

impl Default for SimulatedCompiler {
    fn default() -> Self {
        Self::new(CompilerConfig::default(), LimitConfig::default())
    }
}
