//! Whole-text brace balance

use super::{Heuristic, ScanContext};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ScanError;
use tracing::trace;

/// Flags the text once when `{` and `}` counts differ
///
/// Braces inside comments and literals are counted too.
pub struct BraceBalance;

impl Heuristic for BraceBalance {
    fn name(&self) -> &'static str {
        "brace-balance"
    }

    fn scan(&self, source: &str, _ctx: &ScanContext<'_>) -> Result<Vec<Diagnostic>, ScanError> {
        let open = source.matches('{').count();
        let close = source.matches('}').count();
        trace!(target: "simcc::scanner", open, close, "brace counts");

        if open == close {
            Ok(Vec::new())
        } else {
            Ok(vec![Diagnostic::whole_text(DiagnosticKind::UnmatchedBraces)])
        }
    }
}
