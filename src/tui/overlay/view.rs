//! Calendar overlay: one month as a Monday-first grid, with mood indicators
//! on recorded days.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::calendar::{build_month_grid, CalendarCell, Day, WEEKDAY_HEADER};

use super::super::state::AppState;
use super::super::widgets::centered_rect;

/// Rendered width of one grid cell.
const CELL_WIDTH: usize = 4;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.system.config.theme;
    let grid = build_month_grid(state.overlay.displayed);
    let today = Day::today();

    // Grid rows plus the weekday header, bordered.
    let width = (7 * CELL_WIDTH) as u16 + 4;
    let height = grid.weeks().len() as u16 + 3;
    let popup = centered_rect(width, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border()))
        .title(format!(" {} ", state.overlay.displayed))
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);

    f.render_widget(Clear, popup);
    f.render_widget(block, popup);

    let mut lines = Vec::with_capacity(grid.weeks().len() + 1);

    let header_spans: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|d| Span::styled(pad_cell(d), Style::default().fg(theme.muted)))
        .collect();
    lines.push(Line::from(header_spans));

    for week in grid.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| render_cell(cell, state, today))
            .collect();
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// One day cell. Precedence mirrors the original renderer: the grid cursor
/// always shows, today beats the mood indicator, adjacent-month cells are
/// dimmed and inert.
fn render_cell<'a>(cell: &CalendarCell, state: &AppState, today: Day) -> Span<'a> {
    let theme = &state.system.config.theme;
    let record = cell.in_month.then(|| state.records.get(cell.date)).flatten();

    let is_cursor = cell.in_month && cell.date == state.overlay.cursor;
    let is_today = cell.date == today;
    let is_selected = cell.date == state.picker.selected_day;

    let text = match record {
        Some(mood) if !is_today => pad_cell(mood.glyph()),
        _ => pad_cell(&format!("{:2}", cell.date.day())),
    };

    let mut style = if !cell.in_month {
        Style::default().fg(theme.muted)
    } else if is_today {
        Style::default().fg(Color::White).bg(theme.today)
    } else if let Some(mood) = record {
        Style::default().fg(mood.accent())
    } else {
        Style::default()
    };

    if is_selected && cell.in_month {
        style = style.add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(text, style)
}

/// Pad `content` to the fixed cell width, accounting for wide glyphs.
fn pad_cell(content: &str) -> String {
    let used = content.width();
    let total = CELL_WIDTH.saturating_sub(used);
    let left = total / 2;
    let right = total - left;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}
