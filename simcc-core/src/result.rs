//! The value handed back to callers of the compiler

use serde::Serialize;

/// Outcome category; always mirrors `CompilationResult::is_success`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Success,
    Error,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Success => "success",
            ResultKind::Error => "error",
        }
    }
}

/// Immutable compilation result
///
/// Only constructible through [`CompilationResult::succeeded`] and
/// [`CompilationResult::failed`], so `success` and `kind` cannot disagree.
/// Serializes as `{"success": .., "outputText": .., "kind": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    success: bool,
    output_text: String,
    kind: ResultKind,
}

impl CompilationResult {
    /// Successful compilation wrapping the synthesized transcript
    pub fn succeeded(transcript: &str) -> Self {
        Self {
            success: true,
            output_text: format!("Compilation successful!\n\nProgram Output:\n{transcript}"),
            kind: ResultKind::Success,
        }
    }

    /// Failed compilation with the full text to display
    pub fn failed(output_text: impl Into<String>) -> Self {
        Self {
            success: false,
            output_text: output_text.into(),
            kind: ResultKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_prefix() {
        let r = CompilationResult::succeeded("hi");
        assert!(r.is_success());
        assert_eq!(r.kind(), ResultKind::Success);
        assert_eq!(r.output_text(), "Compilation successful!\n\nProgram Output:\nhi");
    }

    #[test]
    fn test_failed_kind_mirrors_success() {
        let r = CompilationResult::failed("Error: nope");
        assert!(!r.is_success());
        assert_eq!(r.kind(), ResultKind::Error);
        assert_eq!(r.kind().as_str(), "error");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(CompilationResult::failed("x")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["outputText"], "x");
        assert_eq!(json["kind"], "error");
    }
}
