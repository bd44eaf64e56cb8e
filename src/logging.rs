//! 日志初始化
//!
//! TUI 独占终端，日志写入 ~/.study-manager/logs/study.log。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::storage::{self, config::LogConfig};

/// 覆盖配置日志级别的环境变量
pub const LOG_ENV: &str = "STUDY_LOG";

const LOG_FILE: &str = "study.log";

/// 构建 filter：环境变量优先，其次配置文件，最后退回 "info"
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化全局 subscriber，返回日志文件路径
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let dir = storage::ensure_log_dir()?;
    init_at(&dir, config)
}

fn init_at(dir: &Path, config: &LogConfig) -> Result<PathBuf> {
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // 已有全局 subscriber 时保持原样
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_at(dir.path(), &LogConfig::default()).unwrap();
        assert!(path.exists());
        assert!(path.ends_with(LOG_FILE));

        // 第二次初始化不会失败
        init_at(dir.path(), &LogConfig::default()).unwrap();
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        let config = LogConfig {
            level: "study_manager=debug".to_string(),
        };
        let _filter = build_filter(&config);
    }
}
