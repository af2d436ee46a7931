//! API 类型定义
//!
//! Program records as persisted by the front end, and the JSON compile request.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Template offered when a new program is created
pub const DEFAULT_PROGRAM: &str = r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}"#;

/// A saved program
///
/// Serialized field names match the stored JSON list:
/// `{"title", "description", "code", "timestamp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    /// Milliseconds since the Unix epoch of the last save
    #[serde(default)]
    pub timestamp: u64,
}

/// Unsaved program, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDraft {
    pub title: String,
    pub description: String,
    pub code: String,
}

impl ProgramDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            code: code.into(),
        }
    }

    /// Draft pre-filled from an existing record (for editing)
    pub fn from_record(record: &ProgramRecord) -> Self {
        Self::new(&*record.title, &*record.description, &*record.code)
    }

    /// Validate and stamp
    ///
    /// Title and description are trimmed; code is kept verbatim.
    pub fn into_record(self, timestamp: u64) -> Result<ProgramRecord, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::MissingTitle);
        }
        if self.code.trim().is_empty() {
            return Err(ApiError::MissingCode);
        }
        Ok(ProgramRecord {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            code: self.code,
            timestamp,
        })
    }
}

/// JSON compile request: `{"code": ...}`
///
/// `code` is kept as a raw JSON value so that a missing or non-string field
/// reaches the compiler's defensive input check instead of failing here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub code: serde_json::Value,
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
