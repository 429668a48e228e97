use tracing::debug;

use crate::media::PlaybackEvent;
use crate::moods::Mood;

use super::action::{Action, GridMove};
use super::state::AppState;

/// Vertical drag travel, in rows, that counts as a month swipe.
pub const DRAG_THRESHOLD_ROWS: i32 = 3;

/// Pure state reducer.
///
/// Takes current state and an action, returns new state. All mutation in the
/// application funnels through here, on the main event context — playback
/// commands included, so no locking is needed anywhere.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// each sub-reducer returns Ok(state) if it handled the action, or
/// Err(state) to pass ownership back for the next reducer to try.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let state = match reduce_picker(state, &action) {
        Ok(handled) => return handled,
        Err(state) => state,
    };

    let state = match reduce_overlay(state, &action) {
        Ok(handled) => return handled,
        Err(state) => state,
    };

    match action {
        Action::Tick(now) => reduce_tick(state, now),
        // Quit is observed by the run loop before dispatch.
        Action::Quit => state,
        _ => state,
    }
}

fn reduce_picker(mut state: AppState, action: &Action) -> Result<AppState, AppState> {
    match action {
        Action::StripLeft => {
            state.picker.strip_cursor = state.picker.strip_cursor.saturating_sub(1);
            Ok(state)
        }
        Action::StripRight => {
            let last = Mood::all().len() - 1;
            state.picker.strip_cursor = (state.picker.strip_cursor + 1).min(last);
            Ok(state)
        }
        Action::SelectMood(mood) => Ok(select_mood(state, *mood)),
        Action::OpenCalendar => {
            debug!(day = %state.picker.selected_day, "opening calendar overlay");
            state.overlay.focus(state.picker.selected_day);
            state.overlay.open = true;
            // The playback surface is covered; nothing keeps playing behind
            // the overlay.
            state.media.pause_all();
            state.system.reset_status_message(true);
            Ok(state)
        }
        _ => Err(state),
    }
}

/// Record `mood` for the selected day and start (or resume) its player.
/// A mood whose assets are missing stays selectable, just silent.
fn select_mood(mut state: AppState, mood: Mood) -> AppState {
    if let Some(previous) = state.picker.selected_mood {
        // Only one player is ever playing at a time.
        if previous != mood {
            if let Some(player) = state.media.player_mut(previous) {
                player.pause();
            }
        }
    }

    state.picker.selected_mood = Some(mood);
    state.picker.strip_cursor = mood.index();
    state.records.set(state.picker.selected_day, mood);
    debug!(mood = mood.name(), day = %state.picker.selected_day, "mood recorded");

    match state.media.resolve_player(mood) {
        Ok(player) => {
            player.play();
            state.system.reset_status_message(state.overlay.open);
        }
        Err(e) => {
            state.system.set_status_error_message(e.to_string());
        }
    }
    state
}

fn reduce_overlay(mut state: AppState, action: &Action) -> Result<AppState, AppState> {
    let overlay_action = matches!(
        action,
        Action::CloseCalendar
            | Action::NavigateMonthForward
            | Action::NavigateMonthBackward
            | Action::GridMove(_)
            | Action::SelectDay(_)
            | Action::DragEnded { .. }
    );
    if !overlay_action {
        return Err(state);
    }
    if !state.overlay.open {
        // Stale intent after the overlay closed; nothing to do.
        return Ok(state);
    }

    match action {
        Action::CloseCalendar => Ok(close_overlay(state)),
        Action::NavigateMonthForward => {
            state.overlay.displayed = state.overlay.displayed.next();
            state.overlay.cursor = state
                .overlay
                .displayed
                .day_clamped(state.overlay.cursor.day());
            Ok(state)
        }
        Action::NavigateMonthBackward => {
            state.overlay.displayed = state.overlay.displayed.prev();
            state.overlay.cursor = state
                .overlay
                .displayed
                .day_clamped(state.overlay.cursor.day());
            Ok(state)
        }
        Action::GridMove(mv) => {
            let month = state.overlay.displayed;
            let day = state.overlay.cursor.day();
            let count = month.day_count();
            // The cursor never leaves the displayed month: adjacent-month
            // cells are layout padding, not selectable days.
            let target = match mv {
                GridMove::Left if day > 1 => day - 1,
                GridMove::Right if day < count => day + 1,
                GridMove::Up if day > 7 => day - 7,
                GridMove::Down if day + 7 <= count => day + 7,
                _ => day,
            };
            state.overlay.cursor = month.day_clamped(target);
            Ok(state)
        }
        Action::SelectDay(day) => {
            if !state.overlay.displayed.contains(*day) {
                return Ok(state);
            }
            debug!(day = %day, "day selected from overlay");
            state.picker.selected_day = *day;
            // Selection flows back to the picker: show whatever was
            // recorded for that day (possibly nothing).
            if let Some(previous) = state.picker.selected_mood {
                if let Some(player) = state.media.player_mut(previous) {
                    player.pause();
                }
            }
            state.picker.selected_mood = state.records.get(*day);
            if let Some(mood) = state.picker.selected_mood {
                state.picker.strip_cursor = mood.index();
            }
            Ok(close_overlay(state))
        }
        Action::DragEnded { dy } => {
            if dy.abs() < DRAG_THRESHOLD_ROWS {
                return Ok(state);
            }
            let action = if *dy > 0 {
                // Upward swipe reveals the next month.
                Action::NavigateMonthForward
            } else {
                Action::NavigateMonthBackward
            };
            Ok(reduce(state, action))
        }
        _ => unreachable!("overlay_action matched above"),
    }
}

/// Close the overlay and resume the selected mood's player, if it has one.
fn close_overlay(mut state: AppState) -> AppState {
    state.overlay.open = false;
    if let Some(mood) = state.picker.selected_mood {
        match state.media.resolve_player(mood) {
            Ok(player) => player.play(),
            Err(e) => state.system.set_status_error_message(e.to_string()),
        }
    }
    state.system.reset_status_message(false);
    state
}

/// Advance the selected mood's player. A played-to-end report is serviced
/// right here on the main context: seek back to the start and resume — the
/// manual loop.
fn reduce_tick(mut state: AppState, now: std::time::Instant) -> AppState {
    if let Some(mood) = state.picker.selected_mood {
        if let Some(player) = state.media.player_mut(mood) {
            if let Some(PlaybackEvent::ReachedEnd) = player.advance(now) {
                player.seek_to_start();
                player.play();
            }
        }
    }
    state
}
