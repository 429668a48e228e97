//! Demo mode: the TUI pre-seeded with a spread of records around today, so
//! the calendar has something to show on a fresh run.

use anyhow::Result;

use crate::calendar::Day;
use crate::config::Config;
use crate::moods::Mood;
use crate::records::MoodRecordStore;

/// Seed a record every couple of days over the two weeks before `today`,
/// cycling through the mood set, plus one for today itself.
pub fn seed_records(today: Day) -> MoodRecordStore {
    let mut store = MoodRecordStore::new();
    let moods = Mood::all();

    let mut day = today;
    for (i, mood) in moods.iter().cycle().take(7).enumerate() {
        store.set(day, *mood);
        // Leave a one-day gap between records so the grid shows both kinds
        // of cells.
        let back = if i % 3 == 0 { 2 } else { 3 };
        for _ in 0..back {
            day = day.pred();
        }
    }
    store
}

pub fn run(config: Config) -> Result<()> {
    let records = seed_records(Day::today());
    crate::tui::run(config, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records_includes_today() {
        let today = Day::new(2025, 6, 15).unwrap();
        let store = seed_records(today);
        assert_eq!(store.get(today), Some(Mood::Happy));
    }

    #[test]
    fn test_seed_records_spread_has_gaps_and_stays_in_the_past() {
        let today = Day::new(2025, 6, 15).unwrap();
        let store = seed_records(today);

        assert_eq!(store.len(), 7);
        for (day, _) in store.iter() {
            assert!(day <= today);
        }
        // The day right before a seeded record is a gap.
        assert_eq!(store.get(Day::new(2025, 6, 14).unwrap()), None);
    }

    #[test]
    fn test_seed_records_is_deterministic() {
        let today = Day::new(2025, 6, 15).unwrap();
        assert_eq!(seed_records(today), seed_records(today));
    }
}
