//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

pub use crate::ui::components::confirm_dialog::ConfirmType;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 确认弹窗
    pub confirm_dialog: Option<ConfirmType>,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_help || self.confirm_dialog.is_some() || self.show_theme_selector
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(!state.show_help);
        assert!(state.confirm_dialog.is_none());
        assert!(!state.has_active_dialog());
    }

    #[test]
    fn test_each_dialog_counts_as_active() {
        let mut state = DialogState::new();
        state.show_help = true;
        assert!(state.has_active_dialog());

        let mut state = DialogState::new();
        state.show_theme_selector = true;
        assert!(state.has_active_dialog());

        let mut state = DialogState::new();
        state.confirm_dialog = Some(ConfirmType::DeleteTask {
            id: TaskId(1),
            subject: "Math".to_string(),
        });
        assert!(state.has_active_dialog());
    }
}
