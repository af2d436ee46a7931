//! Output calls without a format string

use super::{Heuristic, ScanContext};
use crate::calls::output_calls;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ScanError;

/// Flags the text once if any output call has no quoted argument at all
pub struct FormatString;

impl Heuristic for FormatString {
    fn name(&self) -> &'static str {
        "format-string"
    }

    fn scan(&self, source: &str, _ctx: &ScanContext<'_>) -> Result<Vec<Diagnostic>, ScanError> {
        if output_calls(source).any(|call| !call.has_quoted_argument()) {
            Ok(vec![Diagnostic::whole_text(DiagnosticKind::MissingFormatString)])
        } else {
            Ok(Vec::new())
        }
    }
}
