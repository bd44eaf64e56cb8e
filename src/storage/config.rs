//! 应用配置持久化
//!
//! 只保存偏好设置，任务本身从不写盘。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{load_toml, save_toml, study_dir};
use crate::error::{Result, StudyError};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 任务操作行为
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TasksConfig {
    /// 删除前弹出确认框（默认直接删除）
    #[serde(default)]
    pub confirm_delete: bool,
    /// 空白输入时用 Toast 提示原因（默认静默忽略）
    #[serde(default)]
    pub strict_input: bool,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter 指令，如 "info" 或 "study_manager=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// 校验配置内容
    pub fn validate(&self) -> Result<()> {
        if self.log.level.trim().is_empty() {
            return Err(StudyError::config("log.level must not be empty"));
        }
        Ok(())
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    study_dir().join("config.toml")
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// 从指定路径加载配置；文件缺失、无法解析或校验失败时回退默认值
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    load_toml::<Config>(path)
        .and_then(|config| config.validate().map(|()| config))
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&config_path(), config)
}

/// 保存配置到指定路径
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    config.validate()?;
    save_toml(path, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.name, "Auto");
        assert!(!config.tasks.confirm_delete);
        assert!(!config.tasks.strict_input);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tasks]\nconfirm_delete = true\n").unwrap();

        let config = load_config_from(&path);
        assert!(config.tasks.confirm_delete);
        assert!(!config.tasks.strict_input);
        assert_eq!(config.theme.name, "Auto");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tasks\nconfirm_delete = ").unwrap();
        assert_eq!(load_config_from(&path), Config::default());

        std::fs::write(&path, "[log]\nlevel = \"\"\n").unwrap();
        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Nord".to_string();
        config.tasks.strict_input = true;
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.log.level = " ".to_string();
        assert!(matches!(
            save_config_to(&path, &config),
            Err(StudyError::Config(_))
        ));
        assert!(!path.exists());
    }
}
