//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use simcc::{CompilationResult, RunConfig};
use std::path::PathBuf;

/// Compile with zero latency
pub async fn compile_now(source: &str) -> CompilationResult {
    simcc::compile(source, &RunConfig::immediate()).await
}

/// Wrap statements in a well-formed `main`
pub fn program(body: &str) -> String {
    format!("#include <stdio.h>\n\nint main() {{\n{body}\n    return 0;\n}}\n")
}

/// Program body that exercises every placeholder
pub fn sample_program() -> String {
    program(concat!(
        "    int n = 1;\n",
        "    printf(\"n=%d f=%f c=%c s=%s\\n\", n, 1.0, 'a', \"x\");\n",
        "    printf(\"done\\n\");",
    ))
}

/// Unique scratch directory under the system temp dir, removed on drop
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("simcc_it_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        Self(path)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}
