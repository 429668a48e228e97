//! Picker screen: playback surface above, mood strip below.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::moods::Mood;

use super::super::state::AppState;

/// Height of the mood strip (glyph row + label row + key row).
const STRIP_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks =
        Layout::vertical([Constraint::Min(5), Constraint::Length(STRIP_HEIGHT)]).split(area);
    render_surface(f, chunks[0], state);
    render_strip(f, chunks[1], state);
}

/// The animation surface. Shows the playing frame for the selected mood, its
/// still when there is nothing to play, or an invitation when no mood has
/// been picked yet.
fn render_surface(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = state.system.config.theme.clone();

    let (title, border_color, art) = match state.picker.selected_mood {
        Some(mood) => {
            let title = format!(" {} {} · {} ", mood.glyph(), mood.label(), state.picker.selected_day);
            let playing_frame = state
                .media
                .player(mood)
                .map(|player| player.current_frame().to_string());
            // Silent fallback: the still, or nothing but the label.
            let art = playing_frame
                .or_else(|| state.media.still(mood).map(str::to_string))
                .unwrap_or_else(|| format!("{}\n{}", mood.glyph(), mood.label()));
            (title, mood.accent(), art)
        }
        None => (
            format!(" {} ", state.picker.selected_day),
            theme.border(),
            "选择一个心情，记录今天".to_string(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Center the art vertically; Paragraph handles the horizontal axis.
    let art_height = art.lines().count() as u16;
    let top_pad = inner.height.saturating_sub(art_height) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.extend(art.lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

/// The horizontal mood strip. The recorded (selected) mood is highlighted in
/// its accent color; the keyboard cursor is underlined.
fn render_strip(f: &mut Frame, area: Rect, state: &AppState) {
    let moods = Mood::all();
    let constraints = vec![Constraint::Ratio(1, moods.len() as u32); moods.len()];
    let cells = Layout::horizontal(constraints).split(area);

    for (i, mood) in moods.iter().enumerate() {
        let selected = state.picker.selected_mood == Some(*mood);
        let at_cursor = state.picker.strip_cursor == i;

        let mut style = Style::default();
        if selected {
            style = style.fg(mood.accent()).add_modifier(Modifier::REVERSED);
        } else if at_cursor {
            style = style.fg(mood.accent());
        }
        let label_style = if at_cursor {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };

        let lines = vec![
            Line::from(Span::styled(mood.glyph(), style)),
            Line::from(Span::styled(mood.label(), label_style)),
            Line::from(Span::styled(
                format!("{}", i + 1),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let cell = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(cell, cells[i]);
    }
}
