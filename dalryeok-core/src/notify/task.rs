use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::clock::Clock;
use super::scheduler::{Notification, NotificationScheduler};
use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

enum Command {
    Dismiss(usize),
    ReplaceEvents(Vec<Event>),
    Notified(oneshot::Sender<HashSet<String>>),
}

/// Owns a scheduler and its event list while running on a tokio task.
///
/// Every mutation, whether a polling tick or a request from the handle, runs
/// on this one task, so recompute passes never interleave.
pub struct SchedulerTask<C> {
    scheduler: NotificationScheduler<C>,
    events: Vec<Event>,
    poll_interval: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    active: watch::Sender<Vec<Notification>>,
    fired: mpsc::UnboundedSender<Notification>,
}

impl<C: Clock + 'static> SchedulerTask<C> {
    /// Start polling. The first pass runs immediately, then once per
    /// `poll_interval`. The returned receiver yields each notification once,
    /// as it fires.
    pub fn spawn(
        scheduler: NotificationScheduler<C>,
        events: Vec<Event>,
        poll_interval: Duration,
    ) -> (SchedulerHandle, mpsc::UnboundedReceiver<Notification>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (active_tx, active_rx) = watch::channel(scheduler.active().to_vec());
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();

        let task = SchedulerTask {
            scheduler,
            events,
            poll_interval,
            commands: command_rx,
            active: active_tx,
            fired: fired_tx,
        };
        let join = tokio::spawn(task.run());

        let handle = SchedulerHandle {
            commands: command_tx,
            active: active_rx,
            join,
        };
        (handle, fired_rx)
    }

    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick(),
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
            }
        }

        debug!("Notification scheduler stopped");
    }

    fn tick(&mut self) {
        let fired = self.scheduler.recompute(&self.events);
        if fired.is_empty() {
            return;
        }

        self.publish();
        for notification in fired {
            // Nobody listening is fine; the active list still has it.
            let _ = self.fired.send(notification);
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Dismiss(index) => {
                if self.scheduler.dismiss(index).is_some() {
                    self.publish();
                }
            }
            Command::ReplaceEvents(events) => {
                debug!(count = events.len(), "Replacing scheduled events");
                self.events = events;
            }
            Command::Notified(reply) => {
                let _ = reply.send(self.scheduler.notified().clone());
            }
        }
    }

    fn publish(&self) {
        self.active.send_replace(self.scheduler.active().to_vec());
    }
}

/// Caller-side access to a running scheduler. Dropping the handle, or
/// calling `shutdown`, stops the polling task and releases its state.
pub struct SchedulerHandle {
    commands: mpsc::UnboundedSender<Command>,
    active: watch::Receiver<Vec<Notification>>,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Notifications currently shown, as of the last published change.
    pub fn active(&self) -> Vec<Notification> {
        self.active.borrow().clone()
    }

    /// Watch the active list; the receiver wakes on every fire or dismiss.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.active.clone()
    }

    pub fn dismiss(&self, index: usize) -> CalendarResult<()> {
        self.send(Command::Dismiss(index))
    }

    /// Swap in a fresh event list, e.g. after the store reloads. Ids that
    /// already fired stay fired.
    pub fn replace_events(&self, events: Vec<Event>) -> CalendarResult<()> {
        self.send(Command::ReplaceEvents(events))
    }

    /// Ids that have fired so far. Resolves after every command sent before
    /// it has been handled.
    pub async fn notified(&self) -> CalendarResult<HashSet<String>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Notified(reply_tx))?;
        reply_rx.await.map_err(|_| CalendarError::SchedulerStopped)
    }

    pub async fn shutdown(self) {
        let SchedulerHandle { commands, join, .. } = self;
        drop(commands);
        let _ = join.await;
    }

    fn send(&self, command: Command) -> CalendarResult<()> {
        self.commands
            .send(command)
            .map_err(|_| CalendarError::SchedulerStopped)
    }
}
