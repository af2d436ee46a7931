//! API 层配置
//!
//! 包含运行配置 `RunConfig` 以及供 CLI 使用的全局单例。

use once_cell::sync::OnceCell;
use simcc_config::{CompilerConfig, LimitConfig, StoreConfig};
use simcc_core::SimulatedCompiler;
use std::time::Duration;

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Compiler configuration (latency, placeholders)
    pub compiler: CompilerConfig,
    /// Scan limits
    pub limits: LimitConfig,
    /// Program persistence
    pub store: StoreConfig,
}

impl RunConfig {
    /// Default configuration without the simulated latency (for tests and scripting)
    pub fn immediate() -> Self {
        Self {
            compiler: CompilerConfig::immediate(),
            ..Self::default()
        }
    }

    /// Simulated latency as a `Duration`
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.compiler.latency_ms)
    }

    /// Build a compiler with the standard heuristics
    pub fn build_compiler(&self) -> SimulatedCompiler {
        SimulatedCompiler::new(self.compiler.clone(), self.limits.clone())
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.latency(), Duration::from_millis(1000));
        assert_eq!(cfg.store.storage_key, "c-programs");
    }

    #[test]
    fn test_immediate_run_config() {
        let cfg = RunConfig::immediate();
        assert!(cfg.latency().is_zero());
        assert_eq!(cfg.compiler.placeholders, RunConfig::default().compiler.placeholders);
    }

    #[test]
    fn test_build_compiler_uses_config() {
        let mut cfg = RunConfig::immediate();
        cfg.compiler.no_output_text = String::from("(silence)");
        let result = cfg.build_compiler().compile("int main() { return 0; }");
        assert!(result.output_text().ends_with("(silence)"));
    }
}
