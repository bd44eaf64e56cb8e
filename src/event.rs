use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;
use crate::form_state::FormField;
use crate::theme::Theme;
use crate::ui::click_areas::DialogAction;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    if event::poll(POLL_TIMEOUT)? {
        handle_event(app, event::read()?);
    }

    Ok(!app.should_quit)
}

/// 分发单个终端事件
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        // 只处理按下事件
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        // 终端尺寸变化视为配置变化
        Event::Resize(_, _) => app.on_configuration_change(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 全局快捷键
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return;
            }
            KeyCode::Char('z') => {
                app.pending_suspend = true;
                return;
            }
            _ => {}
        }
    }

    // 优先处理弹窗事件

    // 帮助面板
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    // 确认弹窗
    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.dialogs.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    if app.form.is_editing() {
        handle_form_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

/// 处理输入表单的键盘事件
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus_list(),
        KeyCode::Tab => {
            app.form.focus_next();
            if !app.form.is_editing() {
                app.focus_list();
            }
        }
        KeyCode::BackTab => {
            app.form.focus_prev();
            if !app.form.is_editing() {
                app.focus_list();
            }
        }
        KeyCode::Enter => match app.form.focus {
            // Subject 中回车跳到 Description
            Some(FormField::Subject) => app.form.focus_next(),
            _ => app.submit_form(),
        },
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.clear_active()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.insert_char(c)
        }
        _ => {}
    }
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // 完成 / 取消完成
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('c') => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        // 回到输入表单
        KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            app.form.focus(FormField::Subject)
        }
        KeyCode::BackTab => app.form.focus(FormField::Description),

        // 功能按键
        KeyCode::Char('t') | KeyCode::Char('T') => app.open_theme_selector(),
        KeyCode::Char('?') => app.dialogs.show_help = true,

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
        app.dialogs.show_help = false;
    }
}

fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_accept(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_dialog_cancel(),
        _ => {}
    }
}

fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.theme_selector_cancel(),
        _ => {}
    }
}

/// 处理鼠标事件（点击区域由上一帧渲染填充）
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        // 滚轮只在任务列表上移动选中项
        MouseEventKind::ScrollDown => {
            if !app.dialogs.has_active_dialog() && app.ui.click_areas.in_task_list(col, row) {
                app.select_next();
            }
            return;
        }
        MouseEventKind::ScrollUp => {
            if !app.dialogs.has_active_dialog() && app.ui.click_areas.in_task_list(col, row) {
                app.select_previous();
            }
            return;
        }
        _ => return,
    }

    if app.dialogs.show_help {
        app.dialogs.show_help = false;
        return;
    }

    if app.dialogs.confirm_dialog.is_some() {
        match app.ui.click_areas.dialog_action_at(col, row) {
            Some(DialogAction::Confirm) => app.confirm_dialog_accept(),
            Some(DialogAction::Cancel) => app.confirm_dialog_cancel(),
            None => {}
        }
        return;
    }

    if app.dialogs.show_theme_selector {
        if let Some(index) = app.ui.click_areas.dialog_item_at(col, row) {
            app.dialogs.theme_selector_index = index.min(Theme::all().len() - 1);
            app.theme_selector_confirm();
        } else {
            match app.ui.click_areas.dialog_action_at(col, row) {
                Some(DialogAction::Confirm) => app.theme_selector_confirm(),
                Some(DialogAction::Cancel) => app.theme_selector_cancel(),
                None => {}
            }
        }
        return;
    }

    let areas = &app.ui.click_areas;
    if let Some(field) = areas.field_at(col, row) {
        app.form.focus(field);
    } else if areas.is_add_button(col, row) {
        app.submit_form();
    } else if let Some(id) = areas.toggle_at(col, row) {
        app.select_task(id);
        app.toggle_task(id);
    } else if let Some(id) = areas.delete_at(col, row) {
        app.request_delete(id);
    } else if let Some(id) = areas.row_at(col, row) {
        app.focus_list();
        app.select_task(id);
    }
}
