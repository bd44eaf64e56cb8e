//! 快捷键帮助面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 40;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let lines = build_help_lines(colors);
    let panel_height = lines.len() as u16 + 2;

    // 居中计算
    let x = area.width.saturating_sub(PANEL_WIDTH) / 2;
    let y = area.height.saturating_sub(panel_height) / 2;
    let panel_area = Rect::new(
        x,
        y,
        PANEL_WIDTH.min(area.width),
        panel_height.min(area.height),
    );

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    frame.render_widget(Paragraph::new(lines).block(block), panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        // Form 分组
        section_header("New Task", colors),
        key_line("Tab", "Next field", colors),
        key_line("Shift+Tab", "Previous field", colors),
        key_line("Enter", "Next field / Add task", colors),
        key_line("Ctrl+U", "Clear field", colors),
        key_line("Esc", "Back to list", colors),
        Line::from(""),
        // List 分组
        section_header("Tasks", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("g / G", "First / last", colors),
        key_line("Space", "Toggle done", colors),
        key_line("d / x", "Delete", colors),
        key_line("n", "New task", colors),
        Line::from(""),
        // Other 分组
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("Ctrl+Z", "Suspend", colors),
        key_line("q", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            format!("  study v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.muted),
        )),
        Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 分组标题
fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 快捷键行
fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:11}", key),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
