//! 主界面渲染
//!
//! 每轮事件循环都从 `App` 的最新状态完整重绘一次。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::model::TaskList;
use crate::theme::ThemeColors;

use super::components::{
    confirm_dialog, empty_state, footer, header, help_panel, task_form, task_list, theme_selector,
    toast,
};

/// 内容区最大宽度（宽终端下居中）
const MAX_CONTENT_WIDTH: u16 = 72;

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let content = centered_column(area, MAX_CONTENT_WIDTH);

    let [header_area, form_area, count_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),                      // 标题
        Constraint::Length(task_form::FORM_HEIGHT), // 输入表单
        Constraint::Length(1),                      // 未完成计数
        Constraint::Fill(1),                        // 任务列表
        Constraint::Length(3),                      // Footer
    ])
    .areas(content);

    header::render(frame, header_area, &colors);
    task_form::render(frame, form_area, &app.form, &colors, &mut app.ui.click_areas);
    render_counter(frame, count_area, &app.tasks, &colors);

    if app.tasks.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.tasks.tasks(),
            app.list_state.selected(),
            !app.form.is_editing(),
            &colors,
            &mut app.ui.click_areas,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.form.is_editing(),
        !app.tasks.is_empty(),
        &colors,
    );

    // 渲染 Toast
    if let Some(message) = app.ui.visible_toast() {
        toast::render(frame, message, &colors);
    }

    // 弹窗按层级渲染，后渲染的在上层
    if let Some(ref confirm) = app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm, &colors, &mut app.ui.click_areas);
    }

    if app.dialogs.show_theme_selector {
        theme_selector::render(
            frame,
            app.dialogs.theme_selector_index,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    if app.dialogs.show_help {
        help_panel::render(frame, &colors);
    }
}

/// "Pending Tasks: N" 计数行
fn render_counter(frame: &mut Frame, area: Rect, tasks: &TaskList, colors: &ThemeColors) {
    let left = vec![
        Span::styled(" Pending Tasks: ", Style::default().fg(colors.text)),
        Span::styled(
            tasks.pending_count().to_string(),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let right = Span::styled(
        format!("{}/{} done ", tasks.completed_count(), tasks.len()),
        Style::default().fg(colors.info),
    );

    // 计算中间填充空格
    let used: usize = left.iter().map(Span::width).sum::<usize>() + right.width();
    let padding = " ".repeat((area.width as usize).saturating_sub(used));

    let mut spans = left;
    spans.push(Span::raw(padding));
    spans.push(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 水平居中的内容列
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
