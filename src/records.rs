//! The day-keyed mood record store.

use std::collections::HashMap;

use crate::calendar::Day;
use crate::moods::Mood;

/// One mood per calendar day, in memory only — records live for the process
/// lifetime and are discarded with their owner.
///
/// Keys are `Day` values, which compare by (year, month, day) components, so
/// two lookups for the same date always hit the same entry no matter what
/// instant each `Day` was derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodRecordStore {
    records: HashMap<Day, Mood>,
}

impl MoodRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mood` for `day`, replacing any previous record for that day.
    /// Returns the replaced mood, if any.
    pub fn set(&mut self, day: Day, mood: Mood) -> Option<Mood> {
        self.records.insert(day, mood)
    }

    pub fn get(&self, day: Day) -> Option<Mood> {
        self.records.get(&day).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, Mood)> + '_ {
        self.records.iter().map(|(d, m)| (*d, *m))
    }
}
