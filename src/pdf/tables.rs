//! Row/cell recovery from extracted page text.
//!
//! The official program PDFs lay their organizer tables out as plain text
//! once extracted, with cells separated by tab characters or runs of spaces.
//! Splitting lines on those separators recovers the rows well enough for the
//! recognizers, which only care about the first three cells of each row.

use once_cell::sync::Lazy;
use regex::Regex;

static CELL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t| {2,}").expect("cell separator pattern"));

/// Splits page text into cell rows. Blank lines are dropped; cells keep
/// their trimmed text. Consecutive tabs yield empty cells, so a row can
/// have a blank category while still carrying a learning goal.
pub fn rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            CELL_SEPARATOR
                .split(line.trim_end())
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}
