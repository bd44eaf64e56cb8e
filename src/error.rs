//! Study Manager 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

use crate::model::TaskId;

/// Study Manager 错误类型
#[derive(Debug, Error)]
pub enum StudyError {
    /// I/O 错误（配置文件、日志目录等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON 编解码错误（state bundle）
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 无效数据（如损坏的快照）
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// 必填字段为空（仅 strict 模式上报）
    #[error("{0} is required")]
    BlankField(&'static str),

    /// 任务不存在（仅 strict 模式上报）
    #[error("Task #{0} not found")]
    TaskNotFound(TaskId),
}

/// Study Manager Result 类型别名
pub type Result<T> = std::result::Result<T, StudyError>;

impl StudyError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 InvalidData 错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudyError::config("bad level");
        assert_eq!(err.to_string(), "Config error: bad level");

        let err = StudyError::BlankField("Subject");
        assert_eq!(err.to_string(), "Subject is required");

        let err = StudyError::TaskNotFound(TaskId(7));
        assert_eq!(err.to_string(), "Task #7 not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: StudyError = io_err.into();
        assert!(matches!(err, StudyError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StudyError = json_err.into();
        assert!(matches!(err, StudyError::JsonParse(_)));
    }
}
