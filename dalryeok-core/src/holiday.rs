//! Public holidays shown on the month grid.

use chrono::{Datelike, NaiveDate};

const HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2025, 1, 1, "신정"),
    (2025, 1, 29, "설날"),
    (2025, 1, 30, "설날"),
    (2025, 1, 31, "설날"),
    (2025, 3, 1, "삼일절"),
    (2025, 5, 5, "어린이날"),
    (2025, 6, 6, "현충일"),
    (2025, 8, 15, "광복절"),
    (2025, 10, 5, "추석"),
    (2025, 10, 6, "추석"),
    (2025, 10, 7, "추석"),
    (2025, 10, 3, "개천절"),
    (2025, 10, 9, "한글날"),
    (2025, 12, 25, "크리스마스"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

fn all() -> impl Iterator<Item = Holiday> {
    HOLIDAYS.iter().filter_map(|&(y, m, d, name)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday { date, name })
    })
}

/// Holidays in the month of `date`, in date order.
pub fn holidays_in_month(date: NaiveDate) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = all()
        .filter(|h| h.date.year() == date.year() && h.date.month() == date.month())
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

pub fn holiday_on(date: NaiveDate) -> Option<&'static str> {
    all().find(|h| h.date == date).map(|h| h.name)
}
