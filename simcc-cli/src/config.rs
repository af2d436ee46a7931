//! CLI 配置
//!
//! The optional project file (`simcc.json`), per-stage log levels, and the
//! merge of both with command-line overrides into a `RunConfig`.

use serde::Deserialize;
use simcc_api::{LimitConfig, Placeholders, RunConfig, Stage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Default project file name, looked up in the working directory
pub const DEFAULT_PROJECT_FILE: &str = "simcc.json";

/// simcc.json 结构
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    /// Simulated latency in milliseconds
    pub latency_ms: Option<u64>,
    /// Directory of the on-disk program store
    pub store_dir: Option<String>,
    /// Key the program list is stored under
    pub storage_key: Option<String>,
    /// Stand-ins for format specifiers
    pub placeholders: Option<Placeholders>,
    /// Scan limits
    pub limits: Option<LimitConfig>,
    /// Log level: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// Per-stage log levels, keyed by stage name ("scanner", "store", ...)
    pub stage_log_levels: BTreeMap<String, String>,
}

/// Read the project file
///
/// A missing default file is not an error; a missing explicit one is.
pub fn read_project_file(explicit: Option<&Path>) -> Result<ProjectFile, String> {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_PROJECT_FILE);
            if !default.exists() {
                return Ok(ProjectFile::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
}

/// Command-line values that override the project file
#[derive(Debug, Default)]
pub struct Overrides {
    pub latency_ms: Option<u64>,
    pub store_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Build the run configuration: defaults, then project file, then flags
pub fn build_run_config(project: &ProjectFile, overrides: &Overrides) -> RunConfig {
    let mut config = RunConfig::default();

    if let Some(latency) = overrides.latency_ms.or(project.latency_ms) {
        config.compiler.latency_ms = latency;
    }
    if let Some(placeholders) = &project.placeholders {
        config.compiler.placeholders = placeholders.clone();
    }
    if let Some(limits) = &project.limits {
        config.limits = limits.clone();
    }
    if let Some(key) = &project.storage_key {
        config.store.storage_key = key.clone();
    }
    match (&overrides.store_dir, &project.store_dir) {
        (Some(dir), _) => config.store.store_dir = dir.to_string_lossy().into_owned(),
        (None, Some(dir)) => config.store.store_dir = dir.clone(),
        (None, None) => {}
    }

    config
}

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub stages: BTreeMap<String, Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            stages: BTreeMap::new(),
        }
    }
}

impl LogConfig {
    /// Merge the project file's levels with the `--log-level` flag
    pub fn from_project(project: &ProjectFile, flag: Option<&str>) -> Result<Self, String> {
        let mut config = LogConfig::default();

        if let Some(level) = flag.or(project.log_level.as_deref()) {
            config.global = parse_log_level(level).ok_or_else(|| format!("Unknown log level '{level}'"))?;
        }
        for (stage, level) in &project.stage_log_levels {
            let parsed = parse_log_level(level)
                .ok_or_else(|| format!("Unknown log level '{level}' for stage '{stage}'"))?;
            config.stages.insert(format!("simcc::{stage}"), parsed);
        }

        Ok(config)
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        self.stages.get(target).copied().unwrap_or(self.global)
    }

    /// Every target the CLI knows about
    pub fn targets() -> Vec<String> {
        let mut targets: Vec<String> = Stage::ALL.iter().map(Stage::target).collect();
        targets.extend(["simcc::compiler", "simcc::store", "simcc::cli"].map(String::from));
        targets
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
