//! Core types and queries for the dalryeok calendar.
//!
//! This crate holds everything a calendar frontend needs besides storage and
//! rendering:
//! - `grid` and `format` for week/month grids, labels and date strings
//! - `overlap` for time-range conflicts between events
//! - `filter` for the combined search + week/month view query
//! - `notify` for the polling reminder scheduler
//!
//! Event lists are owned by whoever persists them; this crate only reads them.

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod format;
pub mod grid;
pub mod holiday;
pub mod instant;
pub mod notify;
pub mod overlap;

pub use error::{CalendarError, CalendarResult};
pub use event::{Event, EventForm, Repeat, RepeatType};
pub use filter::{ViewMode, filter_events};
pub use instant::{Instant, parse_instant};
pub use overlap::{DateRange, event_range, find_overlaps, overlaps};
