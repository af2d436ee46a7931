//! Heuristic error scanner
//!
//! The scanner is a pipeline of independent, named heuristics. Each one looks
//! at the raw source text and reports zero or more diagnostics; the pipeline
//! concatenates their findings in stage order. No heuristic suppresses
//! another, so one malformed line can show up under several of them.
//!
//! New heuristics plug in through [`HeuristicPipeline::with_stage`].

mod braces;
mod format_string;
mod semicolon;

pub use braces::BraceBalance;
pub use format_string::FormatString;
pub use semicolon::MissingSemicolon;

use crate::diagnostic::Diagnostic;
use crate::error::ScanError;
use simcc_config::LimitConfig;
use tracing::debug;

/// Context shared by all heuristics during one scan
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub limits: &'a LimitConfig,
}

/// A single pattern-based check over source text
pub trait Heuristic: Send + Sync {
    /// Stable name, used in logs
    fn name(&self) -> &'static str;

    /// Scan the text and report findings in source order
    fn scan(&self, source: &str, ctx: &ScanContext<'_>) -> Result<Vec<Diagnostic>, ScanError>;
}

/// Ordered list of heuristics
pub struct HeuristicPipeline {
    stages: Vec<Box<dyn Heuristic>>,
}

impl HeuristicPipeline {
    /// Pipeline with no stages
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Missing semicolons, then brace balance, then format strings
    pub fn standard() -> Self {
        Self::empty()
            .with_stage(MissingSemicolon)
            .with_stage(BraceBalance)
            .with_stage(FormatString)
    }

    /// Append a stage after the existing ones
    pub fn with_stage<H: Heuristic + 'static>(mut self, stage: H) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage and collect the findings
    pub fn run(&self, source: &str, limits: &LimitConfig) -> Result<Vec<Diagnostic>, ScanError> {
        let ctx = ScanContext { limits };
        let mut diagnostics = Vec::new();

        for stage in &self.stages {
            let found = stage.scan(source, &ctx)?;
            debug!(
                target: "simcc::scanner",
                stage = stage.name(),
                found = found.len(),
                "heuristic finished"
            );
            diagnostics.extend(found);
        }

        Ok(diagnostics)
    }
}

impl Default for HeuristicPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for HeuristicPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeuristicPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
