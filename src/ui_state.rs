//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast、点击区域等。

use std::time::{Duration, Instant};

use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, colors: ThemeColors, last_system_dark: bool) -> Self {
        Self {
            toast: None,
            theme,
            colors,
            last_system_dark,
            click_areas: ClickAreas::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 当前可见的 Toast 文本
    pub fn visible_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| !t.is_expired())
            .map(|t| t.message.as_str())
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme, colors: ThemeColors) {
        self.theme = theme;
        self.colors = colors;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_theme_colors;

    fn state() -> UiState {
        let theme = Theme::Nord;
        UiState::new(theme, get_theme_colors(theme), false)
    }

    #[test]
    fn test_new_creates_default_state() {
        let state = state();
        assert!(state.toast.is_none());
        assert_eq!(state.theme, Theme::Nord);
        assert!(!state.last_system_dark);
    }

    #[test]
    fn test_show_toast() {
        let mut state = state();
        state.show_toast("Task added");
        assert_eq!(state.visible_toast(), Some("Task added"));
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Test", Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = state();
        state.toast = Some(Toast::new("Test", Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(state.visible_toast(), None);

        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_set_theme() {
        let mut state = state();
        state.set_theme(Theme::Gruvbox, get_theme_colors(Theme::Gruvbox));
        assert_eq!(state.theme, Theme::Gruvbox);
        assert_eq!(state.colors, get_theme_colors(Theme::Gruvbox));
    }
}
