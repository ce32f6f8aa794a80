//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDate;

/// Parse the index carried by a callback token such as `quiz_answer_2`.
///
/// Returns `None` when the token does not start with `prefix` or the
/// remainder is not a plain decimal integer.
pub fn parse_callback_index(data: &str, prefix: &str) -> Option<usize> {
    let rest = data.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse::<usize>().ok()
}

/// Build a callback token for an indexed choice
pub fn callback_token(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

/// Sum of the decimal digits of a date written as `YYYY-MM-DD`
pub fn date_digit_sum(date: NaiveDate) -> u32 {
    date.format("%Y-%m-%d")
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
