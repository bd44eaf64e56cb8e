use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 页面标题
pub const TITLE: &str = "Study Task Manager";

/// 渲染标题栏
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let title = Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(vec![Line::from(""), title]).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
