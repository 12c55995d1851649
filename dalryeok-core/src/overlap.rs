//! Time-range conflicts between events.
//!
//! Ranges are half-open: an event ending at 12:00 and another starting at
//! 12:00 do not conflict. A range with an invalid endpoint, or one whose end
//! is not after its start, is empty and overlaps nothing.

use crate::event::Event;
use crate::instant::{Instant, parse_instant};

/// Start and end instants of one event. Each endpoint is resolved on its
/// own, so a bad end time leaves a valid start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        !self.start.is_before(&self.end)
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start.is_before(&other.end)
            && other.start.is_before(&self.end)
    }
}

pub fn event_range(event: &Event) -> DateRange {
    DateRange {
        start: parse_instant(&event.date, &event.start_time),
        end: parse_instant(&event.date, &event.end_time),
    }
}

pub fn overlaps(a: &Event, b: &Event) -> bool {
    event_range(a).overlaps(&event_range(b))
}

/// Events in `existing` whose time range overlaps `candidate`'s, in their
/// original order. An entry with the candidate's own id is never reported,
/// so an edit does not conflict with the version it replaces.
pub fn find_overlaps<'a>(candidate: &Event, existing: &'a [Event]) -> Vec<&'a Event> {
    let range = event_range(candidate);

    existing
        .iter()
        .filter(|other| other.id != candidate.id)
        .filter(|other| range.overlaps(&event_range(other)))
        .collect()
}

/// Outcome of checking an event before it is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveCheck<'a> {
    Clear,
    /// Saving would double-book these events; ask before persisting.
    Conflicts(Vec<&'a Event>),
}

impl SaveCheck<'_> {
    pub fn is_clear(&self) -> bool {
        matches!(self, SaveCheck::Clear)
    }
}

pub fn check_save<'a>(candidate: &Event, existing: &'a [Event]) -> SaveCheck<'a> {
    let conflicts = find_overlaps(candidate, existing);
    if conflicts.is_empty() {
        SaveCheck::Clear
    } else {
        tracing::debug!(
            id = %candidate.id,
            conflicts = conflicts.len(),
            "Event overlaps existing events"
        );
        SaveCheck::Conflicts(conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Repeat;

    fn event(id: &str, date: &str, start: &str, end: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "팀 회의".to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: "주간 팀 미팅".to_string(),
            location: "회의실 A".to_string(),
            category: "업무".to_string(),
            notification_time: 1,
            repeat: Repeat::default(),
        }
    }

    #[test]
    fn test_event_range() {
        let range = event_range(&event("01", "2025-10-01", "10:00", "11:00"));

        assert_eq!(range.start.to_string(), "2025-10-01T10:00:00");
        assert_eq!(range.end.to_string(), "2025-10-01T11:00:00");
    }

    #[test]
    fn test_event_range_invalid_date() {
        let range = event_range(&event("01", "2025-13-01", "10:00", "11:00"));

        assert_eq!(range.start, Instant::Invalid);
        assert_eq!(range.end, Instant::Invalid);
    }

    #[test]
    fn test_event_range_invalid_end_only() {
        let range = event_range(&event("01", "2025-10-01", "10:00", "25:00"));

        assert!(range.start.is_valid());
        assert_eq!(range.end, Instant::Invalid);
    }

    #[test]
    fn test_contained_range_overlaps() {
        let inner = event("01", "2025-10-01", "10:00", "11:00");
        let outer = event("02", "2025-10-01", "09:00", "12:00");

        assert!(overlaps(&inner, &outer));
        assert!(overlaps(&outer, &inner));
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        let morning = event("02", "2025-10-01", "09:00", "12:00");
        let afternoon = event("03", "2025-10-01", "12:00", "14:00");

        assert!(!overlaps(&morning, &afternoon));
        assert!(!overlaps(&afternoon, &morning));
    }

    #[test]
    fn test_different_days_do_not_overlap() {
        let a = event("01", "2025-10-01", "09:00", "12:00");
        let b = event("02", "2025-10-02", "09:00", "12:00");

        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_invalid_or_inverted_ranges_never_overlap() {
        let valid = event("01", "2025-10-01", "08:00", "18:00");
        let broken_end = event("02", "2025-10-01", "10:00", "25:00");
        let inverted = event("03", "2025-10-01", "12:00", "10:00");
        let zero_length = event("04", "2025-10-01", "10:00", "10:00");

        for other in [&broken_end, &inverted, &zero_length] {
            assert!(!overlaps(&valid, other), "{other}");
            assert!(!overlaps(other, &valid), "{other}");
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let times = ["08:00", "09:00", "09:30", "10:00", "12:00", "99:99"];
        let mut events = Vec::new();
        for (i, start) in times.iter().enumerate() {
            for end in &times {
                events.push(event(&i.to_string(), "2025-10-01", start, end));
            }
        }

        for a in &events {
            for b in &events {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_find_overlaps() {
        let existing = vec![event("01", "2025-10-01", "10:00", "11:00")];
        let candidate = event("02", "2025-10-01", "09:00", "12:00");

        let found = find_overlaps(&candidate, &existing);
        assert_eq!(found, vec![&existing[0]]);
    }

    #[test]
    fn test_find_overlaps_none() {
        let existing = vec![event("01", "2025-10-01", "10:00", "11:00")];
        let candidate = event("02", "2025-10-02", "09:00", "12:00");

        assert!(find_overlaps(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_find_overlaps_skips_own_id_and_keeps_order() {
        let existing = vec![
            event("03", "2025-10-01", "11:30", "13:00"),
            event("01", "2025-10-01", "10:00", "11:00"),
            event("02", "2025-10-01", "09:00", "12:00"),
            event("04", "2025-10-01", "07:00", "09:00"),
            event("05", "2025-10-01", "09:15", "09:45"),
        ];
        let candidate = event("02", "2025-10-01", "09:00", "12:00");

        let ids: Vec<_> = find_overlaps(&candidate, &existing)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["03", "01", "05"]);
    }

    #[test]
    fn test_check_save() {
        let existing = vec![event("01", "2025-10-01", "10:00", "11:00")];

        let clash = event("02", "2025-10-01", "10:30", "11:30");
        assert_eq!(
            check_save(&clash, &existing),
            SaveCheck::Conflicts(vec![&existing[0]])
        );

        let moved_self = event("01", "2025-10-01", "10:30", "11:30");
        assert!(check_save(&moved_self, &existing).is_clear());
    }
}
