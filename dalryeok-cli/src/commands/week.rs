use anyhow::Result;
use chrono::NaiveDate;
use dalryeok_core::grid::{parse_calendar_date, week_dates, week_of_month};
use dalryeok_core::{Event, ViewMode, filter_events};
use owo_colors::OwoColorize;

use super::month::sorted;
use crate::render::{Render, day_heading};

pub fn run(events: &[Event], reference: NaiveDate) -> Result<()> {
    println!("{}", week_of_month(reference).to_string().bold());

    let in_week = sorted(filter_events(events, "", reference, ViewMode::Week));

    for day in week_dates(reference) {
        let heading = day_heading(day);
        if day == reference {
            println!("{}", heading.bold().underline());
        } else {
            println!("{}", heading.bold());
        }

        let on_day: Vec<&&Event> = in_week
            .iter()
            .filter(|e| parse_calendar_date(&e.date) == Some(day))
            .collect();

        if on_day.is_empty() {
            println!("  {}", "-".dimmed());
        }
        for event in on_day {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
