use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::SystemState;

/// Bottom status line: key hints, or the latest status/error message.
pub fn render_status_bar(f: &mut Frame, area: Rect, system: &SystemState) {
    let message = system.status_message.as_deref().unwrap_or("");
    let style = if system.status_is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![Span::styled(format!(" {message}"), style)]);
    let widget = Paragraph::new(line).block(Block::default().borders(Borders::NONE));
    f.render_widget(widget, area);
}

/// A rect of at most (width, height) centered inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_centers_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 20, area);
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 10);
        let rect = centered_rect(100, 100, area);
        assert_eq!(rect, Rect::new(5, 5, 20, 10));
    }

    #[test]
    fn test_centered_rect_respects_area_origin() {
        let area = Rect::new(10, 4, 30, 12);
        let rect = centered_rect(10, 6, area);
        assert_eq!(rect, Rect::new(20, 7, 10, 6));
    }
}
