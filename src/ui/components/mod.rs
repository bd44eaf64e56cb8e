/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

/// 保留字符串末尾，用于输入框内容超出宽度时跟随光标
pub fn tail_fit(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        s.chars().skip(count - max_len).collect()
    }
}

pub mod confirm_dialog;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod task_form;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
