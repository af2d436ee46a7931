//! simcc Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all simcc crates.
//!
//! Every type deserializes from a partial document: missing fields fall back
//! to their defaults, so a project file only needs to name what it changes.

use serde::{Deserialize, Serialize};

/// Configuration for the simulated compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Simulated compilation latency in milliseconds (0 = resolve immediately)
    pub latency_ms: u64,
    /// Stand-in values for format specifiers
    pub placeholders: Placeholders,
    /// Transcript used when the program produces no output
    pub no_output_text: String,
}

/// Fixed stand-in values substituted for `%d`, `%f`, `%c` and `%s`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub int: String,
    pub float: String,
    pub char: String,
    pub string: String,
}

/// Configuration for scan limits
///
/// Both limits are off unless set; with the defaults every well-formed
/// program reaches the synthesizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum source size accepted by the validator
    pub max_source_bytes: Option<usize>,
    /// Maximum number of lines the line-based heuristics will walk
    pub max_scan_lines: Option<usize>,
}

/// Configuration for program persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key under which the program list is stored
    pub storage_key: String,
    /// Directory used by the on-disk store
    pub store_dir: String,
}

/// Compiler stage enum for stage-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Validator,
    Scanner,
    Synthesizer,
}

impl Stage {
    /// All stages, in pipeline order
    pub const ALL: [Stage; 3] = [Stage::Validator, Stage::Scanner, Stage::Synthesizer];

    /// Get the string name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validator => "validator",
            Stage::Scanner => "scanner",
            Stage::Synthesizer => "synthesizer",
        }
    }

    /// Get the log target name for this stage
    pub fn target(&self) -> String {
        format!("simcc::{}", self.as_str())
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            placeholders: Placeholders::default(),
            no_output_text: String::from("No output"),
        }
    }
}

impl CompilerConfig {
    /// Same configuration, without the simulated latency
    pub fn immediate() -> Self {
        Self {
            latency_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            int: String::from("42"),
            float: String::from("3.14"),
            char: String::from("X"),
            string: String::from("string"),
        }
    }
}

impl Placeholders {
    /// Look up the stand-in for a conversion character (`d`, `f`, `c`, `s`)
    pub fn for_conversion(&self, conversion: char) -> Option<&str> {
        match conversion {
            'd' => Some(&self.int),
            'f' => Some(&self.float),
            'c' => Some(&self.char),
            's' => Some(&self.string),
            _ => None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from("c-programs"),
            store_dir: String::from(".simcc"),
        }
    }
}
