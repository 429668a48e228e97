//! Print a month grid to stdout.

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::calendar::{build_month_grid, Day, MonthGrid, WEEKDAY_HEADER};
use crate::records::MoodRecordStore;

/// Rendered width of one day column.
const COLUMN_WIDTH: usize = 4;

pub fn format_month(grid: &MonthGrid, today: Day, records: &MoodRecordStore) -> String {
    let mut output = String::new();
    let total_width = 7 * COLUMN_WIDTH;

    output.push_str(&format!("\n{:^width$}\n", grid.month().to_string(), width = total_width));
    output.push_str(&format!("{}\n", "═".repeat(total_width)));

    for label in WEEKDAY_HEADER {
        output.push_str(&pad(label));
    }
    output.push('\n');
    output.push_str(&format!("{}\n", "─".repeat(total_width)));

    for week in grid.weeks() {
        for cell in week {
            let content = if !cell.in_month {
                // Adjacent-month cells are shown as gaps, not numbers.
                "·".to_string()
            } else if let Some(mood) = records.get(cell.date) {
                mood.glyph().to_string()
            } else if cell.date == today {
                format!("[{}]", cell.date.day())
            } else {
                format!("{:2}", cell.date.day())
            };
            output.push_str(&pad(&content));
        }
        output.push('\n');
    }
    output
}

/// Center `content` within a fixed-width column, wide glyphs accounted for.
fn pad(content: &str) -> String {
    let used = content.width();
    let total = COLUMN_WIDTH.saturating_sub(used);
    let left = total / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        content,
        " ".repeat(total - left)
    )
}

pub fn run(month: Option<String>) -> Result<()> {
    let month = super::parse_month(month)?;
    let grid = build_month_grid(month);
    // The CLI has no records to show: the store is in-memory per process.
    print!("{}", format_month(&grid, Day::today(), &MoodRecordStore::new()));
    Ok(())
}
