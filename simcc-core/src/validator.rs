//! Structural validation
//!
//! A program is accepted when it is non-blank, within the size limit (when
//! one is configured), and contains the entry-point pattern somewhere:
//!
//! ```text
//! main <ws>* ( <anything but ')'>* ) <ws>* {
//! ```
//!
//! The pattern is matched against raw text, so a `main() {` inside a comment
//! or string literal also counts. No balance check is made beyond that one
//! match.

use crate::error::ValidationError;
use crate::text::{skip_whitespace, word_starts};
use simcc_config::LimitConfig;
use tracing::debug;

const ENTRY_POINT: &str = "main";

/// Validate source text before any heuristic runs
pub fn validate(source: &str, limits: &LimitConfig) -> Result<(), ValidationError> {
    if source.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if let Some(limit) = limits.max_source_bytes {
        if source.len() > limit {
            return Err(ValidationError::TooLarge { limit });
        }
    }

    match find_entry_point(source) {
        Some(offset) => {
            debug!(target: "simcc::validator", offset, "entry point found");
            Ok(())
        }
        None => Err(ValidationError::MissingEntryPoint),
    }
}

/// Byte offset of the first entry-point match
pub fn find_entry_point(source: &str) -> Option<usize> {
    word_starts(source, ENTRY_POINT).find(|&start| matches_after_name(source, start + ENTRY_POINT.len()))
}

fn matches_after_name(source: &str, after_name: usize) -> bool {
    let open = skip_whitespace(source, after_name);
    if !source[open..].starts_with('(') {
        return false;
    }
    let Some(close) = source[open + 1..].find(')') else {
        return false;
    };
    let brace = skip_whitespace(source, open + 1 + close + 1);
    source[brace..].starts_with('{')
}
