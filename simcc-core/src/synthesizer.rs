//! Output synthesis
//!
//! Builds a stand-in console transcript from every output call whose first
//! argument is a string literal. Each literal is rendered on its own: the
//! escapes `\n`, `\t` and `\r` are resolved, `%d`/`%f`/`%c`/`%s` become the
//! configured placeholders, and everything else is copied as written. The
//! rendered pieces are concatenated with no separator.

use crate::calls::output_calls;
use simcc_config::{CompilerConfig, Placeholders};
use tracing::debug;

/// Synthesize the transcript for source that passed every heuristic
pub fn synthesize(source: &str, config: &CompilerConfig) -> String {
    let mut transcript = String::new();
    let mut rendered_calls = 0usize;

    for literal in output_calls(source).filter_map(|call| call.format_literal()) {
        transcript.push_str(&render_literal(literal, &config.placeholders));
        rendered_calls += 1;
    }

    debug!(target: "simcc::synthesizer", rendered_calls, "transcript built");

    if transcript.is_empty() {
        config.no_output_text.clone()
    } else {
        transcript
    }
}

/// Render the contents of one format literal
pub fn render_literal(literal: &str, placeholders: &Placeholders) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => match resolve_escape(next) {
                    Some(resolved) => out.push(resolved),
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                },
                None => out.push('\\'),
            },
            '%' => match chars.peek().and_then(|&conv| placeholders.for_conversion(conv)) {
                Some(value) => {
                    out.push_str(value);
                    chars.next();
                }
                None => out.push('%'),
            },
            _ => out.push(c),
        }
    }

    out
}

fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        _ => None,
    }
}
