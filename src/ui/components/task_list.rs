//! 任务列表组件
//!
//! 每个任务占两行（科目 + 描述），任务之间空一行。右侧是完成按钮和删除按钮，
//! 点击区域在渲染时写入 `ClickAreas`。

use std::ops::Range;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate;
use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 单个任务占用的行数（含间隔）
const ROW_STRIDE: u16 = 3;
/// 任务内容行数
const ROW_HEIGHT: u16 = 2;

const DELETE_LABEL: &str = "[✗]";

/// 计算可见任务范围，保证选中项在窗口内
pub fn visible_window(len: usize, selected: Option<usize>, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if len <= capacity {
        return 0..len;
    }
    let selected = selected.unwrap_or(0).min(len - 1);
    let start = (selected + 1).saturating_sub(capacity);
    start..start + capacity
}

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(if focused { colors.highlight } else { colors.border }));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    click_areas.task_list_area = Some(inner);

    // 放不下全部任务时留出最后一行给滚动提示
    let full = ((inner.height + 1) / ROW_STRIDE) as usize;
    let capacity = if tasks.len() > full {
        (inner.height / ROW_STRIDE) as usize
    } else {
        full
    };
    let window = visible_window(tasks.len(), selected, capacity);

    for (slot, index) in window.clone().enumerate() {
        let y = inner.y + slot as u16 * ROW_STRIDE;
        if y + ROW_HEIGHT > inner.y + inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, ROW_HEIGHT);
        let is_selected = focused && selected == Some(index);
        render_row(frame, row_area, &tasks[index], is_selected, colors, click_areas);
    }

    // 滚动提示
    if window.end < tasks.len() {
        let more = Paragraph::new(Line::from(Span::styled(
            format!("  ↓ {} more", tasks.len() - window.end),
            Style::default().fg(colors.muted),
        )));
        let y = inner.y + inner.height.saturating_sub(1);
        frame.render_widget(more, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    is_selected: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let bg = if task.is_completed {
        colors.completed_bg
    } else if is_selected {
        colors.bg_secondary
    } else {
        colors.bg
    };
    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let [selector_area, text_area, toggle_area, _, delete_area, _] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    // 选择指示器
    let selector = if is_selected { "❯" } else { " " };
    frame.render_widget(
        Paragraph::new(Span::styled(selector, Style::default().fg(colors.highlight))),
        selector_area,
    );

    // 科目 + 描述
    let width = text_area.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate(&task.subject, width),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&task.description, width),
            Style::default().fg(colors.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    // 完成按钮：已完成 [✓] 绿色，未完成 [○] 灰色
    let toggle_color = if task.is_completed {
        colors.completed
    } else {
        colors.pending
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[{}]", task.status().icon()),
            Style::default().fg(toggle_color).add_modifier(Modifier::BOLD),
        )),
        toggle_area,
    );

    // 删除按钮
    frame.render_widget(
        Paragraph::new(Span::styled(DELETE_LABEL, Style::default().fg(colors.danger))),
        delete_area,
    );

    click_areas.task_rows.push((area, task.id));
    click_areas
        .toggle_buttons
        .push((Rect::new(toggle_area.x, toggle_area.y, toggle_area.width, 1), task.id));
    click_areas
        .delete_buttons
        .push((Rect::new(delete_area.x, delete_area.y, delete_area.width, 1), task.id));
}
