use std::time::Duration;

use crate::calendar::{Day, Month};
use crate::config::Config;
use crate::media::{AssetBundle, MediaCache};
use crate::moods::Mood;
use crate::records::MoodRecordStore;

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ pick mood | Enter select | h history | q quit";

/// Help message while the calendar overlay is open
pub const OVERLAY_STATUS_MESSAGE: &str =
    "Keys: ←→↑↓ move | Enter select day | [ ] month | drag swipe | ESC close";

/// Root application state - single source of truth
///
/// All state changes happen through the reducer; views only read.
#[derive(Debug)]
pub struct AppState {
    /// Picker screen state (mood strip, playback surface)
    pub picker: PickerUiState,

    /// Calendar overlay state
    pub overlay: OverlayUiState,

    /// Mood-per-day records, owned here for the process lifetime
    pub records: MoodRecordStore,

    /// Per-mood player cache
    pub media: MediaCache,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, records: MoodRecordStore) -> Self {
        let bundle = AssetBundle::new(config.assets_dir.clone());
        let media = MediaCache::new(bundle, Duration::from_millis(config.frame_interval_ms));
        Self::with_media(config, records, media)
    }

    /// Seam for tests and the demo command to inject a prepared cache.
    pub fn with_media(config: Config, records: MoodRecordStore, media: MediaCache) -> Self {
        let selected_day = Day::today();
        let picker = PickerUiState {
            // Re-opening on a day that already has a record shows that mood.
            selected_mood: records.get(selected_day),
            selected_day,
            strip_cursor: 0,
        };
        AppState {
            picker,
            overlay: OverlayUiState::default(),
            records,
            media,
            system: SystemState::new(config),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PickerUiState {
    /// Mood shown on the playback surface, if any has been chosen.
    pub selected_mood: Option<Mood>,
    /// The day a mood selection records onto. Changed from the overlay.
    pub selected_day: Day,
    /// Keyboard position within the mood strip.
    pub strip_cursor: usize,
}

impl Default for PickerUiState {
    fn default() -> Self {
        PickerUiState {
            selected_mood: None,
            selected_day: Day::today(),
            strip_cursor: 0,
        }
    }
}

impl PickerUiState {
    pub fn cursor_mood(&self) -> Mood {
        Mood::from_index(self.strip_cursor).unwrap_or(Mood::Happy)
    }
}

#[derive(Debug, Clone)]
pub struct OverlayUiState {
    pub open: bool,
    /// The single currently displayed month.
    pub displayed: Month,
    /// Grid cursor; always a day of `displayed` (adjacent-month cells are
    /// not selectable).
    pub cursor: Day,
}

impl Default for OverlayUiState {
    fn default() -> Self {
        let today = Day::today();
        OverlayUiState {
            open: false,
            displayed: today.month_of(),
            cursor: today,
        }
    }
}

impl OverlayUiState {
    /// Point the overlay at `day`'s month with the cursor on `day`.
    pub fn focus(&mut self, day: Day) {
        self.displayed = day.month_of();
        self.cursor = day;
    }
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn new(config: Config) -> Self {
        SystemState {
            config,
            status_message: Some(DEFAULT_STATUS_MESSAGE.to_string()),
            status_is_error: false,
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self, overlay_open: bool) {
        let default = if overlay_open {
            OVERLAY_STATUS_MESSAGE
        } else {
            DEFAULT_STATUS_MESSAGE
        };
        self.status_message = Some(default.to_string());
        self.status_is_error = false;
    }
}
