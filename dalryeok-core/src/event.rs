//! Calendar event records.
//!
//! Events arrive from whatever stores them, already shaped like the JSON the
//! storage layer speaks (`startTime`, `notificationTime`, ...). Dates and
//! times stay as the wall-clock strings the user typed; parsing happens at
//! query time so a malformed record degrades to an invalid instant instead
//! of being rejected on load.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::overlap::{DateRange, event_range};

/// A calendar event as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock start, `HH:MM`
    pub start_time: String,
    /// Wall-clock end, `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    /// Minutes before the start at which the reminder fires
    pub notification_time: i64,
    #[serde(default)]
    pub repeat: Repeat,
}

impl Event {
    pub fn range(&self) -> DateRange {
        event_range(self)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}-{})",
            self.title, self.date, self.start_time, self.end_time
        )
    }
}

/// Repeat settings. Carried through storage round-trips; nothing in this
/// crate expands them into occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// An event as submitted from an edit form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub notification_time: i64,
    #[serde(default)]
    pub repeat: Repeat,
}

impl EventForm {
    /// Turn the form into a new event with a freshly minted id.
    pub fn into_event(self) -> Event {
        self.with_id(uuid::Uuid::new_v4().to_string())
    }

    /// Turn the form into an update of the event with the given id.
    pub fn with_id(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            location: self.location,
            category: self.category,
            notification_time: self.notification_time,
            repeat: self.repeat,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventList {
    Wrapped { events: Vec<Event> },
    Bare(Vec<Event>),
}

/// Parse an event list as served by the storage API: either
/// `{"events": [...]}` or a bare array.
pub fn parse_event_list(json: &str) -> CalendarResult<Vec<Event>> {
    let list: EventList =
        serde_json::from_str(json).map_err(|e| CalendarError::Serialization(e.to_string()))?;

    Ok(match list {
        EventList::Wrapped { events } => events,
        EventList::Bare(events) => events,
    })
}
