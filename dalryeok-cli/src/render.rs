//! Colored terminal rendering for dalryeok types.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use dalryeok_core::Event;
use dalryeok_core::grid::{MonthGrid, month_label};
use dalryeok_core::holiday::holiday_on;
use dalryeok_core::notify::Notification;
use owo_colors::OwoColorize;

const WEEKDAY_HEADER: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start_time, self.end_time);
        let mut line = format!("{} {}", time.dimmed(), self.title);
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        if !self.category.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.category).cyan()));
        }
        line
    }
}

impl Render for Notification {
    fn render(&self) -> String {
        format!("🔔 {}", self.message.yellow().bold())
    }
}

/// The month as a Sunday-first table. Days with events are bold and
/// underlined; Sundays and holidays are red.
pub fn render_month(grid: &MonthGrid, marked: &HashSet<u32>) -> Vec<String> {
    let mut lines = Vec::new();
    let title = month_label_of(grid);
    lines.push(format!("{}", title.bold()));

    let header: Vec<String> = WEEKDAY_HEADER
        .iter()
        // Hangul is double width, so three columns line up with the day cells
        .map(|name| format!("{:>3}", name))
        .collect();
    lines.push(header.join("").dimmed().to_string());

    for week in &grid.weeks {
        let mut row = String::new();
        for (column, cell) in week.iter().enumerate() {
            let Some(day) = cell else {
                row.push_str("    ");
                continue;
            };
            let text = format!("{:>4}", day);
            let is_holiday = NaiveDate::from_ymd_opt(grid.year, grid.month, *day)
                .and_then(holiday_on)
                .is_some();

            let styled = match (marked.contains(day), is_holiday || column == 0) {
                (true, true) => text.red().bold().underline().to_string(),
                (true, false) => text.bold().underline().to_string(),
                (false, true) => text.red().to_string(),
                (false, false) => text,
            };
            row.push_str(&styled);
        }
        lines.push(row);
    }

    lines
}

fn month_label_of(grid: &MonthGrid) -> String {
    NaiveDate::from_ymd_opt(grid.year, grid.month, 1)
        .map(month_label)
        .unwrap_or_else(|| format!("{}년 {}월", grid.year, grid.month))
}

/// Date heading used in list output, e.g. "10-15 (수)".
pub fn day_heading(date: NaiveDate) -> String {
    let weekday = WEEKDAY_HEADER[date.weekday().num_days_from_sunday() as usize];
    let mut heading = format!("{} ({})", date.format("%m-%d"), weekday);
    if let Some(name) = holiday_on(date) {
        heading.push_str(&format!(" {}", name.red()));
    }
    heading
}
