//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。
//!
//! Logs go to stderr so that stdout carries only program output and
//! `--json` results.

use crate::config::LogConfig;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// Per-target filter built from the log configuration
pub fn build_targets(log_config: &LogConfig) -> Targets {
    LogConfig::targets()
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, target| {
            let level = log_config.level_for(&target);
            targets.with_target(target, level)
        })
}

/// 使用指定格式和日志配置初始化日志系统
///
/// With a log file, records are written to both stderr and the file (appending).
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> io::Result<()> {
    let targets = build_targets(log_config);
    let console = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let file_layer = match file {
        Some(path) => {
            let handle = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            let writer = Arc::new(handle);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(move || SharedFile(Arc::clone(&writer)))
                .with_filter(targets);
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Shared handle to the log file
struct SharedFile(Arc<File>);

impl io::Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self.0, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut &*self.0)
    }
}
