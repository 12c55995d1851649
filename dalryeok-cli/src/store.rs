//! Reading the event list the storage layer maintains.

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use dalryeok_core::Event;
use dalryeok_core::event::parse_event_list;

pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        anyhow::bail!(
            "No events file at {}.\n\n\
            Point dalryeok at one with:\n  \
            dalryeok --events path/to/events.json <command>\n\n\
            or set events_file in the config file.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    let events = parse_event_list(&content)
        .with_context(|| format!("Could not parse events in {}", path.display()))?;

    tracing::debug!(count = events.len(), path = %path.display(), "Loaded events");
    Ok(events)
}

pub fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).ok().and_then(|m| m.modified().ok())
}
