use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use tracing::{debug, info, warn};

use crate::dialogs::{ConfirmType, DialogState};
use crate::error::Result;
use crate::form_state::{FormField, FormState};
use crate::model::{Task, TaskId, TaskList, TaskListSnapshot};
use crate::operations::tasks::{self, ActionOutcome, TaskAction};
use crate::storage::config::{self, Config};
use crate::storage::state_bundle::StateBundle;
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Auto 主题下系统主题的检测间隔
const SYSTEM_THEME_CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// state bundle 中的 key
const KEY_TASKS: &str = "tasks";
const KEY_SUBJECT: &str = "subject";
const KEY_DESCRIPTION: &str = "description";
const KEY_FOCUS: &str = "focus";
const KEY_SELECTED: &str = "selected";

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表（唯一数据源）
    pub tasks: TaskList,
    /// 输入表单
    pub form: FormState,
    /// 任务列表选择状态
    pub list_state: ListState,
    /// UI 状态（主题、Toast、点击区域）
    pub ui: UiState,
    /// 对话框状态
    pub dialogs: DialogState,
    /// 当前配置
    pub config: Config,
    /// 待执行的挂起（Ctrl+Z，由主循环处理）
    pub pending_suspend: bool,
    /// 上次检测系统主题的时间
    last_theme_check: Instant,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let mut form = FormState::new();
        form.focus(FormField::Subject);

        Self {
            should_quit: false,
            tasks: TaskList::new(),
            form,
            list_state: ListState::default(),
            ui: UiState::new(theme, colors, last_system_dark),
            dialogs: DialogState::new(),
            config,
            pending_suspend: false,
            last_theme_check: Instant::now(),
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn strict(&self) -> bool {
        self.config.tasks.strict_input
    }

    /// 执行任务操作并处理反馈
    fn dispatch(&mut self, action: TaskAction) -> ActionOutcome {
        let strict = self.strict();
        let outcome = tasks::apply(&mut self.tasks, action, strict);
        if let ActionOutcome::Rejected(ref err) = outcome {
            self.ui.show_toast(err.to_string());
        }
        outcome
    }

    // ========== Task 操作 ==========

    /// 提交表单；成功后清空两个输入框
    pub fn submit_form(&mut self) {
        let action = TaskAction::add(self.form.subject.clone(), self.form.description.clone());
        if let ActionOutcome::Added(id) = self.dispatch(action) {
            self.form.clear();
            self.form.focus(FormField::Subject);
            self.select_task(id);
        }
    }

    /// 切换任务完成状态
    pub fn toggle_task(&mut self, id: TaskId) {
        self.dispatch(TaskAction::Toggle(id));
    }

    /// 删除任务并修正选中项
    pub fn delete_task(&mut self, id: TaskId) {
        if self.dispatch(TaskAction::Delete(id)).is_mutation() {
            self.clamp_selection();
        }
    }

    /// 请求删除：按配置决定是否先弹确认框
    pub fn request_delete(&mut self, id: TaskId) {
        if !self.config.tasks.confirm_delete {
            self.delete_task(id);
            return;
        }
        if let Some(task) = self.tasks.get(id) {
            self.dialogs.confirm_dialog = Some(ConfirmType::DeleteTask {
                id,
                subject: task.subject.clone(),
            });
        }
    }

    /// 确认弹窗 - 确认
    pub fn confirm_dialog_accept(&mut self) {
        if let Some(ConfirmType::DeleteTask { id, .. }) = self.dialogs.confirm_dialog.take() {
            self.delete_task(id);
        }
    }

    /// 确认弹窗 - 取消
    pub fn confirm_dialog_cancel(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.request_delete(id);
        }
    }

    // ========== 列表选择 ==========

    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.tasks.tasks().get(i))
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// 选中指定任务
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.tasks.position(id) {
            self.list_state.select(Some(index));
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.tasks.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.tasks.is_empty() {
            self.list_state.select(Some(self.tasks.len() - 1));
        }
    }

    /// 确保选中项在范围内
    pub fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// 焦点移到任务列表
    pub fn focus_list(&mut self) {
        self.form.blur();
        self.clamp_selection();
    }

    // ========== 主题 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.dialogs.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.ui.theme)
            .unwrap_or(0);
        self.dialogs.show_theme_selector = true;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.dialogs.theme_selector_index = if self.dialogs.theme_selector_index == 0 {
            len - 1
        } else {
            self.dialogs.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.dialogs.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.dialogs.theme_selector_index = (self.dialogs.theme_selector_index + 1) % len;
        self.apply_theme_at_index(self.dialogs.theme_selector_index);
    }

    /// 主题选择器 - 确认并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.dialogs.theme_selector_index);
        self.dialogs.show_theme_selector = false;

        self.config.theme.name = self.ui.theme.label().to_string();
        if let Err(e) = config::save_config(&self.config) {
            warn!(error = %e, "failed to save theme");
            self.ui.show_toast("Failed to save theme");
        }
    }

    /// 主题选择器 - 取消并恢复配置中的主题
    pub fn theme_selector_cancel(&mut self) {
        self.dialogs.show_theme_selector = false;
        let theme = Theme::from_name(&self.config.theme.name);
        self.ui.set_theme(theme, get_theme_colors(theme));
    }

    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index).copied() {
            self.ui.set_theme(theme, get_theme_colors(theme));
        }
    }

    /// Auto 模式下跟随系统主题变化
    pub fn check_system_theme(&mut self) {
        if self.ui.theme != Theme::Auto
            || self.last_theme_check.elapsed() < SYSTEM_THEME_CHECK_INTERVAL
        {
            return;
        }
        self.last_theme_check = Instant::now();

        let dark = detect_system_theme();
        if dark != self.ui.last_system_dark {
            self.ui.last_system_dark = dark;
            self.ui.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 更新 Toast 状态
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    // ========== 瞬态状态保存/恢复 ==========

    /// 将任务列表、ID 计数器和未提交的输入写入 bundle
    pub fn save_instance_state(&self) -> Result<StateBundle> {
        let mut bundle = StateBundle::new();
        bundle.put(KEY_TASKS, &self.tasks.snapshot())?;
        bundle.put(KEY_SUBJECT, self.form.subject.as_str())?;
        bundle.put(KEY_DESCRIPTION, self.form.description.as_str())?;
        bundle.put(KEY_FOCUS, &self.form.focus)?;
        bundle.put(KEY_SELECTED, &self.list_state.selected())?;
        Ok(bundle)
    }

    /// 从 bundle 重建应用状态
    pub fn restore_instance_state(config: Config, bundle: &StateBundle) -> Result<Self> {
        let mut app = Self::new(config);
        if bundle.is_empty() {
            return Ok(app);
        }

        if let Some(snapshot) = bundle.get::<TaskListSnapshot>(KEY_TASKS)? {
            app.tasks = TaskList::restore(snapshot)?;
        }
        app.form.subject = bundle.get(KEY_SUBJECT)?.unwrap_or_default();
        app.form.description = bundle.get(KEY_DESCRIPTION)?.unwrap_or_default();
        if let Some(focus) = bundle.get::<Option<FormField>>(KEY_FOCUS)? {
            app.form.focus = focus;
        }
        app.list_state
            .select(bundle.get::<Option<usize>>(KEY_SELECTED)?.flatten());
        if app.list_state.selected().is_some() {
            app.clamp_selection();
        }

        Ok(app)
    }

    /// 配置变化（终端尺寸改变）：保存状态、丢弃 UI、按 bundle 重建
    pub fn on_configuration_change(&mut self) {
        let rebuilt = self
            .save_instance_state()
            .and_then(|bundle| {
                debug!(keys = bundle.len(), bytes = bundle.encoded_size(), "instance state saved");
                Self::restore_instance_state(self.config.clone(), &bundle)
            });

        match rebuilt {
            Ok(mut app) => {
                app.ui.toast = self.ui.toast.take();
                *self = app;
                info!(
                    tasks = self.tasks.len(),
                    next_id = %self.tasks.next_id(),
                    "ui rebuilt after configuration change"
                );
            }
            Err(e) => warn!(error = %e, "state restore failed, keeping current state"),
        }
    }
}
