use ratatui::layout::Rect;

use crate::form_state::FormField;
use crate::model::TaskId;

/// 弹窗按钮动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 输入框 (区域, 字段)
    pub form_fields: Vec<(Rect, FormField)>,
    /// "Add Task" 按钮
    pub add_button: Option<Rect>,
    /// 任务行 (区域, 任务 ID)
    pub task_rows: Vec<(Rect, TaskId)>,
    /// 完成按钮 (区域, 任务 ID)
    pub toggle_buttons: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, 任务 ID)
    pub delete_buttons: Vec<(Rect, TaskId)>,
    /// 任务列表区域（滚轮检测）
    pub task_list_area: Option<Rect>,
    /// 弹窗按钮
    pub dialog_buttons: Vec<(Rect, DialogAction)>,
    /// 弹窗列表项 (区域, 索引)
    pub dialog_items: Vec<(Rect, usize)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.form_fields.clear();
        self.add_button = None;
        self.task_rows.clear();
        self.toggle_buttons.clear();
        self.delete_buttons.clear();
        self.task_list_area = None;
        self.dialog_buttons.clear();
        self.dialog_items.clear();
    }

    /// 命中的输入框
    pub fn field_at(&self, col: u16, row: u16) -> Option<FormField> {
        hit(&self.form_fields, col, row)
    }

    pub fn toggle_at(&self, col: u16, row: u16) -> Option<TaskId> {
        hit(&self.toggle_buttons, col, row)
    }

    pub fn delete_at(&self, col: u16, row: u16) -> Option<TaskId> {
        hit(&self.delete_buttons, col, row)
    }

    pub fn row_at(&self, col: u16, row: u16) -> Option<TaskId> {
        hit(&self.task_rows, col, row)
    }

    pub fn dialog_action_at(&self, col: u16, row: u16) -> Option<DialogAction> {
        hit(&self.dialog_buttons, col, row)
    }

    pub fn dialog_item_at(&self, col: u16, row: u16) -> Option<usize> {
        hit(&self.dialog_items, col, row)
    }

    /// 坐标是否落在任务列表内
    pub fn in_task_list(&self, col: u16, row: u16) -> bool {
        self.task_list_area
            .is_some_and(|rect| contains(&rect, col, row))
    }

    pub fn is_add_button(&self, col: u16, row: u16) -> bool {
        self.add_button
            .map(|rect| contains(&rect, col, row))
            .unwrap_or(false)
    }
}

fn hit<T: Copy>(areas: &[(Rect, T)], col: u16, row: u16) -> Option<T> {
    areas
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|(_, value)| *value)
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(contains(&rect, 2, 3));
        assert!(contains(&rect, 5, 4));
        assert!(!contains(&rect, 6, 3));
        assert!(!contains(&rect, 2, 5));
    }

    #[test]
    fn test_hit_lookup_and_reset() {
        let mut areas = ClickAreas::default();
        areas.toggle_buttons.push((Rect::new(10, 5, 3, 1), TaskId(4)));
        areas.delete_buttons.push((Rect::new(14, 5, 3, 1), TaskId(4)));
        areas.add_button = Some(Rect::new(0, 0, 20, 1));

        assert_eq!(areas.toggle_at(11, 5), Some(TaskId(4)));
        assert_eq!(areas.delete_at(11, 5), None);
        assert_eq!(areas.delete_at(16, 5), Some(TaskId(4)));
        assert!(areas.is_add_button(19, 0));

        areas.task_list_area = Some(Rect::new(0, 10, 40, 5));
        assert!(areas.in_task_list(3, 12));
        assert!(!areas.in_task_list(3, 9));

        areas.reset();
        assert!(!areas.in_task_list(3, 12));
        assert_eq!(areas.toggle_at(11, 5), None);
        assert!(!areas.is_add_button(19, 0));
    }
}
