//! Week and month grid arithmetic.
//!
//! Weeks start on Sunday everywhere: week views, month rows and week
//! labels all share `WEEK_START`. Dates built from a (year, month, day)
//! triple carry overflow into the next unit instead of failing, so day 31
//! of February is the 3rd of March (2nd in leap years) and month 13 is
//! January of the following year.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::event::Event;

pub const WEEK_START: Weekday = Weekday::Sun;

const DAYS_PER_WEEK: usize = 7;

/// Build a date from out-of-range components by carrying overflow, the way
/// a calendar rolls day 0 back into the previous month.
pub fn normalize_date(year: i32, month: i32, day: i32) -> NaiveDate {
    let month0 = month - 1;
    let year = year.saturating_add(month0.div_euclid(12));
    let month = month0.rem_euclid(12) as u32 + 1;

    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return if year > 0 { NaiveDate::MAX } else { NaiveDate::MIN };
    };

    let offset = i64::from(day) - 1;
    let shifted = if offset >= 0 {
        first.checked_add_days(Days::new(offset as u64))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    shifted.unwrap_or(if offset >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Read a `YYYY-M-D` calendar date, rolling days 1-31 over into the next
/// month when the month is shorter. Months outside 1-12, day 0 and days past
/// 31 are rejected.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: i32 = parts.next()?.parse().ok()?;
    let day: i32 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(normalize_date(year, month, day))
}

/// Number of days in the 1-indexed `month`, resolving out-of-range months
/// through overflow: `days_in_month(2025, 13) == days_in_month(2026, 1)`.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    normalize_date(year, month.saturating_add(1), 0).day()
}

/// First day of the week containing `date`. At the ends of chrono's date
/// range the week is shifted to stay inside it.
fn week_start(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().days_since(WEEK_START)));
    let start = date.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
    let last_full_week = NaiveDate::MAX
        .checked_sub_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .unwrap_or(NaiveDate::MAX);

    start.min(last_full_week)
}

/// The seven dates, Sunday through Saturday, of the week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let first = week_start(date);
    std::array::from_fn(|i| {
        first
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// One row of a month grid. `None` marks a cell outside the month.
pub type WeekRow = [Option<u32>; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// Zero-based index of the row holding `day`, if the month has it.
    pub fn row_of(&self, day: u32) -> Option<usize> {
        self.weeks
            .iter()
            .position(|row| row.iter().any(|cell| *cell == Some(day)))
    }

    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| *cell)
    }
}

/// Lay out the month containing `date` as Sunday-first week rows.
pub fn month_grid(date: NaiveDate) -> MonthGrid {
    let year = date.year();
    let month = date.month();
    let lead = date
        .with_day(1)
        .map_or(0, |first| first.weekday().num_days_from_sunday() as usize);
    let total = days_in_month(year, month as i32);

    let mut cells: Vec<Option<u32>> = vec![None; lead];
    cells.extend((1..=total).map(Some));
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(None);
    }

    let weeks = cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut row: WeekRow = [None; DAYS_PER_WEEK];
            row.copy_from_slice(chunk);
            row
        })
        .collect();

    MonthGrid { year, month, weeks }
}

/// Week-of-month position, displayed as `2025년 10월 3주`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOfMonth {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl fmt::Display for WeekOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}년 {}월 {}주", self.year, self.month, self.week)
    }
}

/// Which week of which month `date` falls in.
///
/// A week row belongs to the month holding its Thursday, and rows are
/// counted from the one holding that month's first Thursday. A row that
/// straddles a month boundary is therefore named after the month owning most
/// of its days: the row of 2024-12-31 is week 1 of January 2025.
pub fn week_of_month(date: NaiveDate) -> WeekOfMonth {
    let thursday = week_dates(date)[4];
    let first = normalize_date(thursday.year(), thursday.month() as i32, 1);
    let to_thursday = Weekday::Thu.days_since(first.weekday());
    let first_thursday = first
        .checked_add_days(Days::new(u64::from(to_thursday)))
        .unwrap_or(first);

    let week = ((thursday - first_thursday).num_days().div_euclid(7) + 1).max(1);

    WeekOfMonth {
        year: thursday.year(),
        month: thursday.month(),
        week: week as u32,
    }
}

pub fn month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Inclusive at both ends. An inverted range contains nothing.
pub fn in_range<T: PartialOrd>(value: &T, start: &T, end: &T) -> bool {
    start <= end && start <= value && value <= end
}

/// Events whose date falls on day-of-month `day`, in any month or year.
pub fn events_on_day(events: &[Event], day: u32) -> Vec<&Event> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| parse_calendar_date(&event.date).is_some_and(|d| d.day() == day))
        .collect()
}
