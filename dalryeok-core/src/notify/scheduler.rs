use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use super::clock::Clock;
use crate::event::Event;
use crate::instant::Instant;
use crate::overlap::event_range;

/// A reminder currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub event: Event,
    pub message: String,
}

impl Notification {
    pub fn for_event(event: &Event) -> Self {
        Notification {
            event: event.clone(),
            message: notification_message(event),
        }
    }
}

pub fn notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}

/// Start of the event minus its reminder lead time.
pub fn notification_threshold(event: &Event) -> Instant {
    event_range(event)
        .start
        .minus_minutes(event.notification_time)
}

/// Whether `now` has reached the event's reminder threshold. Events whose
/// start cannot be resolved are never due.
pub fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    Instant::At(now).is_at_or_after(&notification_threshold(event))
}

/// Events due at `now` that have not fired yet, in input order.
pub fn due_events<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    notified: &HashSet<String>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| !notified.contains(&event.id) && is_due(event, now))
        .collect()
}

/// Per-instance reminder state. Each event id fires at most once for the
/// lifetime of the scheduler; dismissing a notification does not re-arm it.
pub struct NotificationScheduler<C> {
    clock: C,
    notified: HashSet<String>,
    active: Vec<Notification>,
}

impl<C: Clock> NotificationScheduler<C> {
    pub fn new(clock: C) -> Self {
        NotificationScheduler {
            clock,
            notified: HashSet::new(),
            active: Vec::new(),
        }
    }

    /// One polling pass: fire every unfired event whose threshold has been
    /// reached. Returns the notifications added by this pass.
    pub fn recompute(&mut self, events: &[Event]) -> Vec<Notification> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        for event in events {
            if self.notified.contains(&event.id) {
                continue;
            }
            if !event_range(event).start.is_valid() {
                debug!(id = %event.id, "Skipping event with unreadable start");
                continue;
            }
            if !is_due(event, now) {
                continue;
            }

            self.notified.insert(event.id.clone());
            let notification = Notification::for_event(event);
            info!(id = %event.id, %now, "{}", notification.message);
            self.active.push(notification.clone());
            fired.push(notification);
        }

        debug!(%now, fired = fired.len(), active = self.active.len(), "Recompute pass");
        fired
    }

    /// Remove the notification at `index` from the active list. Out-of-range
    /// indices are ignored.
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        if index >= self.active.len() {
            return None;
        }

        let removed = self.active.remove(index);
        info!(id = %removed.event.id, "Dismissed notification");
        Some(removed)
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn notified(&self) -> &HashSet<String> {
        &self.notified
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.notified.contains(id)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
