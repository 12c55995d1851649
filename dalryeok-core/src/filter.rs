//! The list/grid query: text search combined with a week or month window.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::grid::{in_range, normalize_date, parse_calendar_date, week_dates};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    #[default]
    Month,
}

impl ViewMode {
    /// First and last day (inclusive) of the window around `reference`.
    pub fn bounds(self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            ViewMode::Week => {
                let week = week_dates(reference);
                (week[0], week[6])
            }
            ViewMode::Month => {
                let (year, month) = (reference.year(), reference.month() as i32);
                (normalize_date(year, month, 1), normalize_date(year, month + 1, 0))
            }
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(format!("Unknown view '{other}'. Expected 'week' or 'month'")),
        }
    }
}

/// Case-insensitive substring match on title, description or location.
/// An empty term matches everything.
pub fn matches_term(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Whether the event's date falls in the `mode` window around `reference`.
/// Events with unreadable dates are never in view.
pub fn in_view(event: &Event, reference: NaiveDate, mode: ViewMode) -> bool {
    let (start, end) = mode.bounds(reference);
    parse_calendar_date(&event.date).is_some_and(|date| in_range(&date, &start, &end))
}

/// Events matching `term` that fall in the `mode` window around
/// `reference`, in input order.
pub fn filter_events<'a>(
    events: &'a [Event],
    term: &str,
    reference: NaiveDate,
    mode: ViewMode,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| matches_term(event, term) && in_view(event, reference, mode))
        .collect()
}
