use std::collections::HashSet;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use dalryeok_core::grid::{month_grid, parse_calendar_date};
use dalryeok_core::holiday::holidays_in_month;
use dalryeok_core::{Event, ViewMode, filter_events};
use owo_colors::OwoColorize;

use crate::render::{Render, day_heading, render_month};

pub fn run(events: &[Event], reference: NaiveDate) -> Result<()> {
    let grid = month_grid(reference);

    let marked = marked_days(events, reference);

    for line in render_month(&grid, &marked) {
        println!("{}", line);
    }

    let holidays = holidays_in_month(reference);
    if !holidays.is_empty() {
        println!();
        for holiday in &holidays {
            println!("  {} {}", holiday.date.format("%m-%d").dimmed(), holiday.name.red());
        }
    }

    let in_month = filter_events(events, "", reference, ViewMode::Month);
    if in_month.is_empty() {
        return Ok(());
    }

    println!();
    let mut current: Option<&str> = None;
    for event in sorted(in_month) {
        if current != Some(event.date.as_str()) {
            if let Some(date) = parse_calendar_date(&event.date) {
                println!("{}", day_heading(date).bold());
            }
            current = Some(event.date.as_str());
        }
        println!("  {}", event.render());
    }

    Ok(())
}

/// Days of `reference`'s month that have at least one event.
pub fn marked_days(events: &[Event], reference: NaiveDate) -> HashSet<u32> {
    events
        .iter()
        .filter_map(|e| parse_calendar_date(&e.date))
        .filter(|d| d.year() == reference.year() && d.month() == reference.month())
        .map(|d| d.day())
        .collect()
}

/// Events by date then start time, keeping input order for ties.
pub fn sorted(mut events: Vec<&Event>) -> Vec<&Event> {
    events.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));
    events
}
