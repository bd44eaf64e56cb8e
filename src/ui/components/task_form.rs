//! 输入表单组件：Subject / Description 输入框 + Add Task 按钮

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::tail_fit;
use crate::form_state::{FormField, FormState};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 表单总高度：两个输入框 (3+3) + 间隔 + 按钮 + 间隔
pub const FORM_HEIGHT: u16 = 9;

const BUTTON_LABEL: &str = "Add Task";

/// 渲染输入表单
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let [subject_area, description_area, _, button_area, _] = Layout::vertical([
        Constraint::Length(3), // Subject
        Constraint::Length(3), // Description
        Constraint::Length(1),
        Constraint::Length(1), // 按钮
        Constraint::Length(1),
    ])
    .areas(area);

    for (field, field_area) in [
        (FormField::Subject, subject_area),
        (FormField::Description, description_area),
    ] {
        render_input(frame, field_area, form, field, colors);
        click_areas.form_fields.push((field_area, field));
    }

    render_button(frame, button_area, colors);
    click_areas.add_button = Some(button_area);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FormField,
    colors: &ThemeColors,
) {
    let focused = form.focus == Some(field);
    let value = form.value(field);

    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(Style::default().fg(if focused { colors.highlight } else { colors.muted }))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.input_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 预留光标位置
    let visible_width = (inner.width as usize).saturating_sub(2);
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(tail_fit(value, visible_width), Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_button(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let button = Paragraph::new(Line::from(Span::styled(
        BUTTON_LABEL,
        Style::default()
            .fg(colors.bg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(colors.highlight));

    frame.render_widget(button, area);
}
