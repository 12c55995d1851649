use anyhow::Result;
use chrono::NaiveDate;
use dalryeok_core::{Event, ViewMode, filter_events};
use owo_colors::OwoColorize;

use super::month::sorted;
use crate::render::Render;

pub fn run(events: &[Event], term: &str, reference: NaiveDate, view: ViewMode) -> Result<()> {
    let found = sorted(filter_events(events, term, reference, view));

    if found.is_empty() {
        println!("{}", "검색 결과가 없습니다.".dimmed());
        return Ok(());
    }

    for event in found {
        println!("{} {}", event.date.bold(), event.render());
        if !event.description.is_empty() {
            println!("    {}", event.description.dimmed());
        }
        if event.notification_time > 0 {
            println!("    {}", format!("알림: {}분 전", event.notification_time).dimmed());
        }
    }

    Ok(())
}
