pub mod calendar;
pub mod demo;
pub mod moods;

use anyhow::{Context, Result};

use crate::calendar::Month;

/// Parse an optional YYYY-MM month string, defaulting to the current month.
pub fn parse_month(month: Option<String>) -> Result<Month> {
    match month {
        Some(text) => {
            let (year, month) = text
                .split_once('-')
                .with_context(|| format!("Invalid month '{}'. Use YYYY-MM", text))?;
            let year: i32 = year
                .parse()
                .with_context(|| format!("Invalid year in '{}'", text))?;
            let month: u32 = month
                .parse()
                .with_context(|| format!("Invalid month number in '{}'", text))?;
            Month::new(year, month).with_context(|| format!("Month out of range in '{}'", text))
        }
        None => Ok(crate::calendar::Day::today().month_of()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_accepts_yyyy_mm() {
        let month = parse_month(Some("2025-06".to_string())).unwrap();
        assert_eq!(month, Month::new(2025, 6).unwrap());
        let month = parse_month(Some("2026-1".to_string())).unwrap();
        assert_eq!(month, Month::new(2026, 1).unwrap());
    }

    #[test]
    fn test_parse_month_defaults_to_current_month() {
        let month = parse_month(None).unwrap();
        assert_eq!(month, crate::calendar::Day::today().month_of());
    }

    #[test]
    fn test_parse_month_rejects_garbage() {
        assert!(parse_month(Some("junk".to_string())).is_err());
        assert!(parse_month(Some("2025-13".to_string())).is_err());
        assert!(parse_month(Some("2025-00".to_string())).is_err());
        assert!(parse_month(Some("20a5-06".to_string())).is_err());
    }
}
