//! 输入表单状态
//!
//! Subject / Description 两个输入框的内容与焦点。未提交的输入属于瞬态状态，
//! 会随任务列表一起 save/restore。

use serde::{Deserialize, Serialize};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Subject,
    Description,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Subject => "Subject",
            FormField::Description => "Description",
        }
    }
}

/// 表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub subject: String,
    pub description: String,
    /// 当前编辑的字段；None 表示焦点在任务列表
    pub focus: Option<FormField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否处于输入状态
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Subject => &self.subject,
            FormField::Description => &self.description,
        }
    }

    fn active_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            FormField::Subject => Some(&mut self.subject),
            FormField::Description => Some(&mut self.description),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.active_mut() {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.active_mut() {
            value.pop();
        }
    }

    /// 清空当前字段（Ctrl+U）
    pub fn clear_active(&mut self) {
        if let Some(value) = self.active_mut() {
            value.clear();
        }
    }

    /// 清空两个输入框（添加成功后）
    pub fn clear(&mut self) {
        self.subject.clear();
        self.description.clear();
    }

    pub fn focus(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Subject → Description → 列表 → Subject
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Some(FormField::Subject) => Some(FormField::Description),
            Some(FormField::Description) => None,
            None => Some(FormField::Subject),
        };
    }

    /// 反向循环
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Some(FormField::Subject) => None,
            Some(FormField::Description) => Some(FormField::Subject),
            None => Some(FormField::Description),
        };
    }
}
