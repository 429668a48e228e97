//! Calendar dates and the month-grid layout.
//!
//! `Day` is a date normalized to (year, month, day) — identity never depends
//! on time-of-day or the instant it was constructed, so it is safe as a map
//! key. `build_month_grid` lays a month out as Monday-first weeks, borrowing
//! leading/trailing days from the adjacent months.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};
use thiserror::Error;

/// Weekday header labels, Monday first.
pub const WEEKDAY_HEADER: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date components: {year:04}-{month:02}-{day:02}")]
    InvalidComponents { year: i32, month: u32, day: u32 },
    #[error("invalid month: {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// A calendar date. Equality and hashing are by (year, month, day) only.
///
/// Fields are private so every `Day` in the program went through a validated
/// constructor; an out-of-range date can never reach the grid builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day {
    year: i32,
    month: u32,
    day: u32,
}

impl Day {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| Day { year, month, day })
            .ok_or(DateError::InvalidComponents { year, month, day })
    }

    /// Today in local time, time-of-day discarded.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_of(&self) -> Month {
        Month {
            year: self.year,
            month: self.month,
        }
    }

    pub fn succ(&self) -> Day {
        self.to_naive()
            .checked_add_days(Days::new(1))
            .expect("date overflow")
            .into()
    }

    pub fn pred(&self) -> Day {
        self.to_naive()
            .checked_sub_days(Days::new(1))
            .expect("date underflow")
            .into()
    }

    fn to_naive(self) -> NaiveDate {
        // Constructor-validated, so the components are always in range.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .expect("Day holds validated components")
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Day {
    fn from(instant: DateTime<Tz>) -> Self {
        instant.date_naive().into()
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A (year, month) pair with exact rollover arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        // Also rejects years outside chrono's representable range.
        if NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            Ok(Month { year, month })
        } else {
            Err(DateError::InvalidMonth { year, month })
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Month {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Month {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(self) -> Day {
        Day {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    pub fn last_day(self) -> Day {
        Day {
            year: self.year,
            month: self.month,
            day: self.day_count(),
        }
    }

    /// Number of days in this month, Gregorian rules.
    pub fn day_count(self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("Month holds a validated month number");
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("first of following month is always valid");
        next.signed_duration_since(first).num_days() as u32
    }

    pub fn contains(self, day: Day) -> bool {
        day.year == self.year && day.month == self.month
    }

    /// Clamp a day-of-month into this month's range.
    pub fn day_clamped(self, day_of_month: u32) -> Day {
        Day {
            year: self.year,
            month: self.month,
            day: day_of_month.clamp(1, self.day_count()),
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}月", self.year, self.month)
    }
}

/// One cell of the month grid. Generated, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: Day,
    /// False for the leading/trailing cells borrowed from adjacent months.
    pub in_month: bool,
}

/// A month laid out as full weeks of 7 cells, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: Month,
    weeks: Vec<[CalendarCell; 7]>,
}

impl MonthGrid {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn weeks(&self) -> &[[CalendarCell; 7]] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    /// (week row, weekday column) of a date, if it appears in the grid.
    pub fn position_of(&self, day: Day) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| cell.date == day)
                .map(|col| (row, col))
        })
    }
}

/// Lay out `month` as Monday-first weeks.
///
/// Leading cells come from the tail of the previous month, trailing cells
/// from the head of the next month, both flagged `in_month = false`. Padding
/// only completes the final partial week — a month whose last day falls on a
/// Sunday gets no trailing cells, and no all-padding row is ever emitted.
///
/// Output depends only on `month`; "today" is a caller-side concern.
pub fn build_month_grid(month: Month) -> MonthGrid {
    let first = month.first_day();
    let day_count = month.day_count();
    // Native weekday numbering is remapped so Monday is column 0.
    let leading = first.to_naive().weekday().num_days_from_monday() as usize;

    let mut cells = Vec::with_capacity(42);

    let mut lead = first;
    let mut borrowed = Vec::with_capacity(leading);
    for _ in 0..leading {
        lead = lead.pred();
        borrowed.push(CalendarCell {
            date: lead,
            in_month: false,
        });
    }
    borrowed.reverse();
    cells.extend(borrowed);

    let mut current = first;
    for _ in 0..day_count {
        cells.push(CalendarCell {
            date: current,
            in_month: true,
        });
        current = current.succ();
    }

    while cells.len() % 7 != 0 {
        cells.push(CalendarCell {
            date: current,
            in_month: false,
        });
        current = current.succ();
    }

    let weeks = cells
        .chunks_exact(7)
        .map(|chunk| {
            <[CalendarCell; 7]>::try_from(chunk).expect("chunks_exact yields 7-cell chunks")
        })
        .collect();

    MonthGrid { month, weeks }
}
