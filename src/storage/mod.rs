pub mod config;
pub mod state_bundle;

use std::io;
use std::path::{Path, PathBuf};

/// 获取 ~/.study-manager/ 目录路径
pub fn study_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".study-manager")
}

/// 确保日志目录存在: ~/.study-manager/logs/
pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let path = study_dir().join("logs");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> crate::error::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件（自动创建父目录）
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> crate::error::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_toml_round_trip_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.toml");
        let data = Sample {
            name: "math".to_string(),
            count: 3,
        };

        save_toml(&path, &data).unwrap();
        let loaded: Sample = load_toml(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_toml_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        let result: crate::error::Result<Sample> = load_toml(&path);
        assert!(matches!(result, Err(crate::error::StudyError::TomlParse(_))));
    }

    #[test]
    fn test_study_dir_name() {
        assert!(study_dir().ends_with(".study-manager"));
    }
}
