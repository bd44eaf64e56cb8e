use std::fmt;

use serde::{Deserialize, Serialize};

/// 任务 ID（由 TaskList 分配，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 任务的完成状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// ○ 未完成（新建任务的初始状态）
    Incomplete,
    /// ✓ 已完成
    Completed,
}

impl TaskStatus {
    /// 返回状态对应的图标
    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "○",
            TaskStatus::Completed => "✓",
        }
    }
}

/// 学习任务
///
/// `subject` 与 `description` 创建后不可修改，只有 `is_completed` 会被 toggle 改变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// 科目 (如 "Math")
    pub subject: String,
    /// 描述 (如 "Chapter 3")
    pub description: String,
    /// 是否已完成
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, subject: &str, description: &str) -> Self {
        Self {
            id,
            subject: subject.to_string(),
            description: description.to_string(),
            is_completed: false,
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.is_completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Incomplete
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_incomplete() {
        let task = Task::new(TaskId(3), "Math", "Chapter 3");
        assert_eq!(task.id, TaskId(3));
        assert!(!task.is_completed);
        assert!(task.is_pending());
        assert_eq!(task.status(), TaskStatus::Incomplete);
    }

    #[test]
    fn test_status_follows_completed_flag() {
        let mut task = Task::new(TaskId(0), "Math", "Chapter 3");
        assert_eq!(task.status().icon(), "○");
        task.is_completed = true;
        assert_eq!(task.status(), TaskStatus::Completed);
        assert_eq!(task.status().icon(), "✓");
    }

    #[test]
    fn test_task_id_serializes_as_integer() {
        let task = Task::new(TaskId(0), "Math", "Chapter 3");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":0,"subject":"Math","description":"Chapter 3","is_completed":false}"#
        );
    }

    #[test]
    fn test_missing_completed_flag_defaults_to_false() {
        let task: Task =
            serde_json::from_str(r#"{"id":4,"subject":"Art","description":"Sketch"}"#).unwrap();
        assert_eq!(task.id, TaskId(4));
        assert!(!task.is_completed);
    }
}
