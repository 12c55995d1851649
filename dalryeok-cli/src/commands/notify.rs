use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use dalryeok_core::notify::{NotificationScheduler, SchedulerTask, SystemClock};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::store;

/// How often the events file is checked for changes.
const RELOAD_INTERVAL: Duration = Duration::from_secs(30);

pub async fn run(events_path: PathBuf, poll_interval: Duration) -> Result<()> {
    let events = store::load_events(&events_path)?;
    let mut last_modified = store::modified_at(&events_path);

    println!(
        "Watching {} events in {} {}",
        events.len(),
        events_path.display(),
        "(Ctrl-C to stop)".dimmed()
    );

    let scheduler = NotificationScheduler::new(SystemClock);
    let (handle, mut fired) = SchedulerTask::spawn(scheduler, events, poll_interval);

    let mut reload = tokio::time::interval(RELOAD_INTERVAL);
    reload.tick().await;

    loop {
        tokio::select! {
            Some(notification) = fired.recv() => {
                println!("{}", notification.render());
            }
            _ = reload.tick() => {
                let modified = store::modified_at(&events_path);
                if modified == last_modified {
                    continue;
                }
                last_modified = modified;

                match store::load_events(&events_path) {
                    Ok(events) => handle.replace_events(events)?,
                    Err(e) => tracing::warn!("Keeping previous events: {e:#}"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.shutdown().await;
    Ok(())
}
