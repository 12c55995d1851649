//! Wall-clock instants built from an event's date and time strings.
//!
//! There is no timezone anywhere in here: `2025-10-03` + `09:00` is nine
//! o'clock on whatever clock the user reads. Anything that cannot be
//! resolved becomes `Instant::Invalid`, and every ordering question asked
//! of an invalid instant answers `false`.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SHAPE: &str = "dddd-dd-dd";
const TIME_FORMATS: [(&str, &str); 2] = [("%H:%M", "dd:dd"), ("%H:%M:%S", "dd:dd:dd")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instant {
    At(NaiveDateTime),
    Invalid,
}

impl Instant {
    pub fn is_valid(&self) -> bool {
        matches!(self, Instant::At(_))
    }

    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Instant::At(dt) => Some(*dt),
            Instant::Invalid => None,
        }
    }

    /// Shift back by `minutes`. Stays invalid if it was, or if the result
    /// leaves the representable range.
    pub fn minus_minutes(self, minutes: i64) -> Instant {
        let Instant::At(dt) = self else {
            return Instant::Invalid;
        };

        Duration::try_minutes(minutes)
            .and_then(|d| dt.checked_sub_signed(d))
            .map_or(Instant::Invalid, Instant::At)
    }

    /// Strictly earlier. False if either side is invalid.
    pub fn is_before(&self, other: &Instant) -> bool {
        matches!((self, other), (Instant::At(a), Instant::At(b)) if a < b)
    }

    /// At or later. False if either side is invalid.
    pub fn is_at_or_after(&self, other: &Instant) -> bool {
        matches!((self, other), (Instant::At(a), Instant::At(b)) if a >= b)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::At(dt)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::At(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Instant::Invalid => write!(f, "Invalid Date"),
        }
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time.
///
/// Never fails: impossible months or days, hours past 23, minutes past 59,
/// empty strings and any other shape all yield `Instant::Invalid`.
pub fn parse_instant(date: &str, time: &str) -> Instant {
    match (parse_date(date), parse_time(time)) {
        (Some(date), Some(time)) => Instant::At(date.and_time(time)),
        _ => Instant::Invalid,
    }
}

/// Byte-for-byte match against `shape`, where `d` stands for an ASCII digit
/// and every other byte must appear literally.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(b, expected)| match expected {
            b'd' => b.is_ascii_digit(),
            _ => b == expected,
        })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_shape(s, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let (format, _) = TIME_FORMATS.iter().find(|(_, shape)| has_shape(s, shape))?;
    let time = NaiveTime::parse_from_str(s, format).ok()?;

    // chrono keeps a leap second as nanoseconds past one billion
    (time.nanosecond() < 1_000_000_000).then_some(time)
}
