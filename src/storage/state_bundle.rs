//! 瞬态状态缓存
//!
//! 宿主在"配置变化"（终端 resize、挂起/恢复）前把 UI 状态写入 bundle，
//! 重建 UI 后再读回。内容只存在于内存，进程退出即丢失。

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// 以 key 索引、值为 JSON 文本的状态包
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateBundle {
    entries: HashMap<String, String>,
}

impl StateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一个值（覆盖同名 key）
    pub fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value)?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    /// 读取一个值；key 不存在返回 `Ok(None)`，内容损坏返回错误
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 编码后的总字节数（用于日志）
    pub fn encoded_size(&self) -> usize {
        self.entries.values().map(String::len).sum()
    }
}
