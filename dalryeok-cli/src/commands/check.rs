use anyhow::Result;
use dalryeok_core::overlap::{SaveCheck, check_save};
use dalryeok_core::{Event, EventForm, Repeat};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    events: &[Event],
    date: String,
    start_time: String,
    end_time: String,
    id: Option<String>,
) -> Result<()> {
    let candidate = candidate(date, start_time, end_time, id);

    if candidate.range().is_empty() {
        println!(
            "{}",
            "시작과 종료 시간이 올바른 범위가 아니어서 겹치는 일정을 확인할 수 없습니다.".yellow()
        );
        return Ok(());
    }

    match check_save(&candidate, events) {
        SaveCheck::Clear => println!("{}", "겹치는 일정이 없습니다.".green()),
        SaveCheck::Conflicts(conflicts) => {
            println!("{}", "일정 겹침 경고".red().bold());
            println!("다음 일정과 겹칩니다:");
            for event in conflicts {
                println!("  {} {}", event.date, event.render());
            }
        }
    }

    Ok(())
}

/// The event being checked. Without `id` it is a new event and gets a
/// fresh one, so it never shares an id with anything stored.
fn candidate(date: String, start_time: String, end_time: String, id: Option<String>) -> Event {
    let form = EventForm {
        title: String::new(),
        date,
        start_time,
        end_time,
        description: String::new(),
        location: String::new(),
        category: String::new(),
        notification_time: 0,
        repeat: Repeat::default(),
    };

    match id {
        Some(id) => form.with_id(id),
        None => form.into_event(),
    }
}
