//! 任务列表：唯一的任务状态持有者
//!
//! 所有变更只经过 `add` / `toggle` / `delete` 三个入口。默认入口对无效输入
//! （空白字段、未知 ID）静默忽略；`try_*` 系列在 strict 模式下报告原因。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskId};
use crate::error::{Result, StudyError};

/// 任务列表快照（用于 save/restore）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// 下一个待分配的 ID
    #[serde(default)]
    pub next_id: u64,
}

/// 有序任务列表 + ID 计数器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加新任务；任一字段为空白时不创建、不消耗 ID
    pub fn add(&mut self, subject: &str, description: &str) -> Option<&Task> {
        if is_blank(subject) || is_blank(description) {
            return None;
        }
        let id = TaskId(self.next_id);
        self.tasks.push(Task::new(id, subject, description));
        self.next_id += 1;
        self.tasks.last()
    }

    /// 翻转指定任务的完成状态；ID 不存在时列表不变
    pub fn toggle(&mut self, id: TaskId) -> &[Task] {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_completed = !task.is_completed;
        }
        &self.tasks
    }

    /// 删除指定任务，其余任务保持原有顺序；ID 不存在时列表不变
    pub fn delete(&mut self, id: TaskId) -> &[Task] {
        if let Some(index) = self.position(id) {
            self.tasks.remove(index);
        }
        &self.tasks
    }

    /// 未完成任务数（每次调用重新计算）
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.pending_count()
    }

    /// strict 版本的 add：空白字段返回 `BlankField`
    pub fn try_add(&mut self, subject: &str, description: &str) -> Result<TaskId> {
        if is_blank(subject) {
            return Err(StudyError::BlankField("Subject"));
        }
        if is_blank(description) {
            return Err(StudyError::BlankField("Description"));
        }
        self.add(subject, description)
            .map(|t| t.id)
            .ok_or_else(|| StudyError::invalid_data("task was not created"))
    }

    /// strict 版本的 toggle：返回切换后的完成状态
    pub fn try_toggle(&mut self, id: TaskId) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StudyError::TaskNotFound(id))?;
        task.is_completed = !task.is_completed;
        Ok(task.is_completed)
    }

    /// strict 版本的 delete：返回被删除的任务
    pub fn try_delete(&mut self, id: TaskId) -> Result<Task> {
        let index = self.position(id).ok_or(StudyError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// 按插入顺序排列的当前任务
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 下一次 add 将分配的 ID
    pub fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    /// 导出快照
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
        }
    }

    /// 从快照恢复，校验 ID 唯一、计数器领先、字段非空
    pub fn restore(snapshot: TaskListSnapshot) -> Result<Self> {
        if snapshot.next_id == u64::MAX {
            return Err(StudyError::invalid_data("id counter exhausted"));
        }
        let mut seen = HashSet::with_capacity(snapshot.tasks.len());
        for task in &snapshot.tasks {
            if !seen.insert(task.id) {
                return Err(StudyError::invalid_data(format!(
                    "duplicate task id {} in snapshot",
                    task.id
                )));
            }
            if task.id.0 >= snapshot.next_id {
                return Err(StudyError::invalid_data(format!(
                    "task id {} is not below the id counter {}",
                    task.id, snapshot.next_id
                )));
            }
            if is_blank(&task.subject) || is_blank(&task.description) {
                return Err(StudyError::invalid_data(format!(
                    "task {} has a blank subject or description",
                    task.id
                )));
            }
        }

        Ok(Self {
            tasks: snapshot.tasks,
            next_id: snapshot.next_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("Math", "Chapter 3");
        list.add("Physics", "Lab report");
        list.add("History", "Essay draft");
        list
    }

    #[test]
    fn test_add_appends_and_advances_counter() {
        let mut list = TaskList::new();
        let task = list.add("Math", "Chapter 3").cloned().unwrap();
        assert_eq!(task.id, TaskId(0));
        assert!(!task.is_completed);
        assert_eq!(list.len(), 1);
        assert_eq!(list.next_id(), TaskId(1));

        let task = list.add("Physics", "Lab report").cloned().unwrap();
        assert_eq!(task.id, TaskId(1));
        assert_eq!(list.tasks().last().unwrap().subject, "Physics");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = sample();
        let before = list.clone();

        assert!(list.add("", "x").is_none());
        assert!(list.add("x", "").is_none());
        assert!(list.add("   ", "x").is_none());
        assert!(list.add("x", "\t\n").is_none());

        assert_eq!(list, before);
        assert_eq!(list.next_id(), TaskId(3));
    }

    #[test]
    fn test_add_keeps_text_as_entered() {
        let mut list = TaskList::new();
        let task = list.add("  Math ", "Chapter 3 ").cloned().unwrap();
        assert_eq!(task.subject, "  Math ");
        assert_eq!(task.description, "Chapter 3 ");
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut list = sample();
        list.toggle(TaskId(1));
        assert!(list.get(TaskId(1)).unwrap().is_completed);
        list.toggle(TaskId(1));
        assert!(!list.get(TaskId(1)).unwrap().is_completed);
    }

    #[test]
    fn test_toggle_keeps_position() {
        let mut list = sample();
        let ids: Vec<_> = list.toggle(TaskId(2)).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(0), TaskId(1), TaskId(2)]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = sample();
        let before = list.clone();
        list.toggle(TaskId(99));
        list.toggle(TaskId(99));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = sample();
        let remaining: Vec<_> = list.delete(TaskId(1)).iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![TaskId(0), TaskId(2)]);
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let mut list = sample();
        list.delete(TaskId(0));
        let after_first = list.clone();
        list.delete(TaskId(0));
        assert_eq!(list, after_first);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut list = TaskList::new();
        let first = list.add("Math", "Chapter 3").unwrap().id;
        list.delete(first);
        let second = list.add("Math", "Chapter 3").unwrap().id;
        assert_ne!(first, second);
        assert_eq!(second, TaskId(1));
    }

    #[test]
    fn test_pending_count() {
        let mut list = TaskList::new();
        assert_eq!(list.pending_count(), 0);

        list.add("Math", "Chapter 3");
        list.add("Physics", "Lab report");
        assert_eq!(list.pending_count(), 2);

        list.toggle(TaskId(0));
        assert_eq!(list.pending_count(), 1);
        assert_eq!(list.completed_count(), 1);

        list.toggle(TaskId(1));
        assert_eq!(list.pending_count(), 0);
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut list = TaskList::new();

        list.add("Math", "Chapter 3");
        assert_eq!(
            list.tasks(),
            &[Task {
                id: TaskId(0),
                subject: "Math".to_string(),
                description: "Chapter 3".to_string(),
                is_completed: false,
            }]
        );
        assert_eq!(list.pending_count(), 1);

        list.add("", "x");
        assert_eq!(list.len(), 1);
        assert_eq!(list.next_id(), TaskId(1));

        list.add("Physics", "Lab report");
        let ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(0), TaskId(1)]);
        assert_eq!(list.pending_count(), 2);

        list.toggle(TaskId(0));
        assert!(list.get(TaskId(0)).unwrap().is_completed);
        assert_eq!(list.pending_count(), 1);

        list.delete(TaskId(0));
        assert_eq!(
            list.tasks(),
            &[Task {
                id: TaskId(1),
                subject: "Physics".to_string(),
                description: "Lab report".to_string(),
                is_completed: false,
            }]
        );
        assert_eq!(list.pending_count(), 1);

        let before = list.clone();
        list.toggle(TaskId(99));
        assert_eq!(list, before);
    }

    #[test]
    fn test_try_add_reports_blank_field() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.try_add(" ", "Chapter 3"),
            Err(StudyError::BlankField("Subject"))
        ));
        assert!(matches!(
            list.try_add("Math", ""),
            Err(StudyError::BlankField("Description"))
        ));
        assert_eq!(list.next_id(), TaskId(0));

        assert_eq!(list.try_add("Math", "Chapter 3").unwrap(), TaskId(0));
    }

    #[test]
    fn test_try_toggle_and_delete_report_unknown_id() {
        let mut list = sample();
        assert!(list.try_toggle(TaskId(2)).unwrap());
        assert!(!list.try_toggle(TaskId(2)).unwrap());
        assert!(matches!(
            list.try_toggle(TaskId(42)),
            Err(StudyError::TaskNotFound(TaskId(42)))
        ));

        let removed = list.try_delete(TaskId(0)).unwrap();
        assert_eq!(removed.subject, "Math");
        assert!(matches!(
            list.try_delete(TaskId(0)),
            Err(StudyError::TaskNotFound(TaskId(0)))
        ));
    }

    #[test]
    fn test_snapshot_restore_keeps_counter() {
        let mut list = sample();
        list.toggle(TaskId(1));
        list.delete(TaskId(2));

        let snapshot = list.snapshot();
        assert_eq!(snapshot.next_id, 3);

        let mut restored = TaskList::restore(snapshot).unwrap();
        assert_eq!(restored, list);
        assert_eq!(restored.add("Art", "Sketch").unwrap().id, TaskId(3));
    }

    #[test]
    fn test_restore_empty_snapshot() {
        let list = TaskList::restore(TaskListSnapshot::default()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.next_id(), TaskId(0));
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let mut snapshot = sample().snapshot();
        snapshot.tasks[1].id = TaskId(0);
        assert!(matches!(
            TaskList::restore(snapshot),
            Err(StudyError::InvalidData(_))
        ));
    }

    #[test]
    fn test_restore_rejects_stale_counter() {
        let mut snapshot = sample().snapshot();
        snapshot.next_id = 2;
        assert!(matches!(
            TaskList::restore(snapshot),
            Err(StudyError::InvalidData(_))
        ));
    }

    #[test]
    fn test_restore_rejects_exhausted_counter() {
        let snapshot = TaskListSnapshot {
            tasks: Vec::new(),
            next_id: u64::MAX,
        };
        assert!(matches!(
            TaskList::restore(snapshot),
            Err(StudyError::InvalidData(_))
        ));
    }

    #[test]
    fn test_restore_rejects_blank_fields() {
        let mut snapshot = sample().snapshot();
        snapshot.tasks[0].description = "  ".to_string();
        assert!(TaskList::restore(snapshot).is_err());
    }
}
