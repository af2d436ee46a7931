//! Per-line terminator check
//!
//! A line is flagged when, trimmed, it is non-blank, does not start with `#`
//! and does not end with `;`, `{` or `}`. This is purely line-based: a
//! statement spread over several lines is flagged on every line but its
//! last.

use super::{Heuristic, ScanContext};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::ScanError;

pub struct MissingSemicolon;

impl Heuristic for MissingSemicolon {
    fn name(&self) -> &'static str {
        "missing-semicolon"
    }

    fn scan(&self, source: &str, ctx: &ScanContext<'_>) -> Result<Vec<Diagnostic>, ScanError> {
        let lines: Vec<&str> = source.split('\n').collect();
        if let Some(limit) = ctx.limits.max_scan_lines {
            if lines.len() > limit {
                return Err(ScanError::TooManyLines {
                    lines: lines.len(),
                    limit,
                });
            }
        }

        Ok(lines
            .iter()
            .enumerate()
            .filter(|(_, line)| needs_terminator(line.trim()))
            .map(|(index, _)| Diagnostic::at_line(index + 1, DiagnosticKind::MissingSemicolon))
            .collect())
    }
}

fn needs_terminator(trimmed: &str) -> bool {
    !trimmed.is_empty() && !trimmed.starts_with('#') && !trimmed.ends_with([';', '{', '}'])
}
