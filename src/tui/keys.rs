//! Keyboard and mouse event to action mapping.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::moods::Mood;

use super::action::{Action, GridMove};
use super::state::AppState;

/// Convert a key event into an action, given the current state.
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Global keys work regardless of focus.
    if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
        return Some(Action::Quit);
    }

    if state.overlay.open {
        overlay_keys(key.code, state)
    } else {
        picker_keys(key.code, state)
    }
}

fn picker_keys(code: KeyCode, state: &AppState) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::StripLeft),
        KeyCode::Right => Some(Action::StripRight),
        KeyCode::Enter | KeyCode::Char(' ') => {
            Some(Action::SelectMood(state.picker.cursor_mood()))
        }
        KeyCode::Char('h') => Some(Action::OpenCalendar),
        // Direct selection, one digit per mood in strip order.
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Mood::from_index(index).map(Action::SelectMood)
        }
        _ => None,
    }
}

fn overlay_keys(code: KeyCode, state: &AppState) -> Option<Action> {
    match code {
        KeyCode::Esc | KeyCode::Char('c') => Some(Action::CloseCalendar),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::NavigateMonthBackward),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::NavigateMonthForward),
        KeyCode::Left => Some(Action::GridMove(GridMove::Left)),
        KeyCode::Right => Some(Action::GridMove(GridMove::Right)),
        KeyCode::Up => Some(Action::GridMove(GridMove::Up)),
        KeyCode::Down => Some(Action::GridMove(GridMove::Down)),
        KeyCode::Enter => Some(Action::SelectDay(state.overlay.cursor)),
        _ => None,
    }
}

/// Tracks an in-flight vertical drag over the overlay, the pointer rendition
/// of the original's swipe gesture. Only the end of the drag produces an
/// action; the reducer applies the distance threshold.
#[derive(Debug, Default)]
pub struct DragTracker {
    origin_row: Option<u16>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: MouseEvent, state: &AppState) -> Option<Action> {
        if !state.overlay.open {
            self.origin_row = None;
            return None;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin_row = Some(event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let origin = self.origin_row.take()?;
                // Upward travel is positive, matching the swipe direction.
                let dy = origin as i32 - event.row as i32;
                trace!(dy, "drag ended");
                Some(Action::DragEnded { dy })
            }
            // Scroll wheels page months directly.
            MouseEventKind::ScrollUp => Some(Action::NavigateMonthBackward),
            MouseEventKind::ScrollDown => Some(Action::NavigateMonthForward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Day;
    use crate::config::Config;
    use crate::records::MoodRecordStore;
    use crossterm::event::{KeyModifiers, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn picker_state() -> AppState {
        AppState::new(Config::default(), MoodRecordStore::new())
    }

    fn overlay_state() -> AppState {
        let mut state = picker_state();
        state.overlay.open = true;
        state.overlay.focus(Day::new(2025, 6, 10).unwrap());
        state
    }

    #[test]
    fn test_q_quits_everywhere() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('q')), &picker_state()),
            Some(Action::Quit)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('Q')), &overlay_state()),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_picker_arrows_move_the_strip() {
        let state = picker_state();
        assert_eq!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::StripLeft)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Right), &state),
            Some(Action::StripRight)
        );
    }

    #[test]
    fn test_picker_enter_selects_the_cursor_mood() {
        let mut state = picker_state();
        state.picker.strip_cursor = 2;
        assert_eq!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::SelectMood(Mood::Angry))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char(' ')), &state),
            Some(Action::SelectMood(Mood::Angry))
        );
    }

    #[test]
    fn test_picker_digits_select_directly() {
        let state = picker_state();
        assert_eq!(
            key_to_action(key(KeyCode::Char('1')), &state),
            Some(Action::SelectMood(Mood::Happy))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('6')), &state),
            Some(Action::SelectMood(Mood::Embarrassed))
        );
        assert_eq!(key_to_action(key(KeyCode::Char('7')), &state), None);
    }

    #[test]
    fn test_h_opens_history_only_from_picker() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('h')), &picker_state()),
            Some(Action::OpenCalendar)
        );
        assert_eq!(key_to_action(key(KeyCode::Char('h')), &overlay_state()), None);
    }

    #[test]
    fn test_overlay_arrows_move_the_grid_cursor() {
        let state = overlay_state();
        assert_eq!(
            key_to_action(key(KeyCode::Up), &state),
            Some(Action::GridMove(GridMove::Up))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::GridMove(GridMove::Down))
        );
    }

    #[test]
    fn test_overlay_brackets_page_months() {
        let state = overlay_state();
        assert_eq!(
            key_to_action(key(KeyCode::Char('[')), &state),
            Some(Action::NavigateMonthBackward)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char(']')), &state),
            Some(Action::NavigateMonthForward)
        );
    }

    #[test]
    fn test_overlay_enter_selects_the_cursor_day() {
        let state = overlay_state();
        assert_eq!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::SelectDay(Day::new(2025, 6, 10).unwrap()))
        );
    }

    #[test]
    fn test_overlay_esc_closes() {
        let state = overlay_state();
        assert_eq!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::CloseCalendar)
        );
    }

    #[test]
    fn test_drag_produces_signed_travel_on_release() {
        let state = overlay_state();
        let mut tracker = DragTracker::new();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 12);
        assert_eq!(tracker.handle(down, &state), None);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 8);
        assert_eq!(tracker.handle(up, &state), Some(Action::DragEnded { dy: 4 }));
    }

    #[test]
    fn test_drag_downward_travel_is_negative() {
        let state = overlay_state();
        let mut tracker = DragTracker::new();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 5), &state);
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 11), &state),
            Some(Action::DragEnded { dy: -6 })
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let state = overlay_state();
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 3), &state),
            None
        );
    }

    #[test]
    fn test_drags_are_ignored_while_overlay_is_closed() {
        let state = picker_state();
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 5), &state),
            None
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 1), &state),
            None
        );
    }

    #[test]
    fn test_scroll_wheel_pages_months() {
        let state = overlay_state();
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::ScrollDown, 5), &state),
            Some(Action::NavigateMonthForward)
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::ScrollUp, 5), &state),
            Some(Action::NavigateMonthBackward)
        );
    }
}
