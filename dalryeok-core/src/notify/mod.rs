//! Reminder scheduling.
//!
//! `NotificationScheduler` is the synchronous state machine: each
//! `recompute` pass reads the clock once and fires every unfired event whose
//! reminder threshold has passed. `SchedulerTask` drives one scheduler on a
//! tokio interval and is the only place its state is touched while running.

mod clock;
mod scheduler;
mod task;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{
    Notification, NotificationScheduler, due_events, is_due, notification_message,
    notification_threshold,
};
pub use task::{DEFAULT_POLL_INTERVAL, SchedulerHandle, SchedulerTask};
