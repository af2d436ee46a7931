//! Diagnostics produced by the heuristic scanner

use serde::Serialize;
use std::fmt;

/// What a heuristic found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A non-blank line that ends in neither `;`, `{` nor `}`
    MissingSemicolon,
    /// `{` and `}` counts differ across the whole text
    UnmatchedBraces,
    /// An output call without any quoted argument
    MissingFormatString,
    /// Reported by a heuristic added outside this crate
    Custom(String),
}

impl DiagnosticKind {
    pub fn message(&self) -> &str {
        match self {
            DiagnosticKind::MissingSemicolon => "Missing semicolon",
            DiagnosticKind::UnmatchedBraces => "Unmatched braces: Check your { } pairs",
            DiagnosticKind::MissingFormatString => "printf() used without format string",
            DiagnosticKind::Custom(message) => message,
        }
    }
}

/// One heuristic finding, optionally tied to a 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Finding on a specific line (1-based)
    pub fn at_line(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    /// Finding about the text as a whole
    pub fn whole_text(kind: DiagnosticKind) -> Self {
        Self { line: None, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.kind.message()),
            None => f.write_str(self.kind.message()),
        }
    }
}

/// Join diagnostics one per line, in order
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
