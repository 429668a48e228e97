use std::time::Instant;

use crate::calendar::Day;
use crate::moods::Mood;

/// User intents and system events.
///
/// Every state change flows through one of these — dispatched from key and
/// mouse events or from the animation tick, reduced on the single main
/// context. Views never mutate state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Picker intents
    StripLeft,
    StripRight,
    SelectMood(Mood),
    OpenCalendar,

    // Overlay intents
    CloseCalendar,
    NavigateMonthForward,
    NavigateMonthBackward,
    GridMove(GridMove),
    SelectDay(Day),
    /// End of a vertical drag over the grid; positive `dy` is an upward
    /// drag. The reducer applies the swipe threshold.
    DragEnded { dy: i32 },

    // Playback / system
    Tick(Instant),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}
