//! Date string formatting.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};

pub const DEFAULT_PAD_WIDTH: usize = 2;

/// Left-pad the natural string form of `value` with zeros to at least
/// `size` characters. Never truncates; a leading minus sign stays in front.
///
/// `zero_pad(5, 2) == "05"`, `zero_pad(3.14, 5) == "03.14"`,
/// `zero_pad(1111, 2) == "1111"`.
pub fn zero_pad(value: impl Display, size: usize) -> String {
    let natural = value.to_string();
    let len = natural.chars().count();
    if len >= size {
        return natural;
    }

    let zeros = "0".repeat(size - len);
    match natural.strip_prefix('-') {
        Some(digits) => format!("-{zeros}{digits}"),
        None => format!("{zeros}{natural}"),
    }
}

/// `YYYY-MM-DD`, optionally with the day-of-month replaced by `day`.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    format!(
        "{}-{}-{}",
        date.year(),
        zero_pad(date.month(), DEFAULT_PAD_WIDTH),
        zero_pad(day.unwrap_or(date.day()), DEFAULT_PAD_WIDTH)
    )
}
