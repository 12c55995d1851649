use chrono::{Duration, NaiveDate, NaiveDateTime};
use dalryeok_core::event::{EventForm, parse_event_list};
use dalryeok_core::format::format_date;
use dalryeok_core::grid::{events_on_day, month_grid, week_dates, week_of_month};
use dalryeok_core::holiday::holiday_on;
use dalryeok_core::notify::{ManualClock, NotificationScheduler};
use dalryeok_core::overlap::{SaveCheck, check_save};
use dalryeok_core::{Event, Repeat, ViewMode, filter_events};

const STORE: &str = r#"{
  "events": [
    {
      "id": "1",
      "title": "기존 회의",
      "date": "2025-10-15",
      "startTime": "09:00",
      "endTime": "10:00",
      "description": "기존 팀 미팅",
      "location": "회의실 B",
      "category": "업무",
      "repeat": { "type": "none", "interval": 0 },
      "notificationTime": 10
    },
    {
      "id": "2",
      "title": "점심 약속",
      "date": "2025-10-16",
      "startTime": "12:00",
      "endTime": "13:00",
      "description": "동료와 점심",
      "location": "회사 근처 식당",
      "category": "개인",
      "repeat": { "type": "weekly", "interval": 1, "endDate": "2025-12-31" },
      "notificationTime": 1
    },
    {
      "id": "3",
      "title": "체육대회",
      "date": "2025-10-02",
      "startTime": "09:00",
      "endTime": "18:00",
      "description": "체육대회",
      "location": "인천",
      "category": "업무",
      "repeat": { "type": "none", "interval": 0 },
      "notificationTime": 60
    }
  ]
}"#;

fn store() -> Vec<Event> {
    parse_event_list(STORE).expect("fixture should parse")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn form(date: &str, start: &str, end: &str) -> EventForm {
    EventForm {
        title: "새 회의".to_string(),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        description: "새로운 팀 미팅".to_string(),
        location: "회의실 A".to_string(),
        category: "업무".to_string(),
        notification_time: 10,
        repeat: Repeat::default(),
    }
}

#[test]
fn test_search_then_clear_restores_view() {
    let events = store();
    let reference = date(2025, 10, 1);

    let all = filter_events(&events, "", reference, ViewMode::Month);
    assert_eq!(all.len(), 3);

    let searched = filter_events(&events, "회의", reference, ViewMode::Month);
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].title, "기존 회의");

    assert!(filter_events(&events, "없는 일정", reference, ViewMode::Month).is_empty());
    assert_eq!(filter_events(&events, "", reference, ViewMode::Month), all);
}

#[test]
fn test_week_view_of_middle_of_month() {
    let events = store();

    let week = filter_events(&events, "", date(2025, 10, 15), ViewMode::Week);
    let ids: Vec<_> = week.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    assert!(filter_events(&events, "", date(2025, 11, 20), ViewMode::Week).is_empty());
}

#[test]
fn test_new_event_conflict_warning() {
    let events = store();

    let clashing = form("2025-10-15", "09:30", "10:30").into_event();
    match check_save(&clashing, &events) {
        SaveCheck::Conflicts(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].id, "1");
        }
        SaveCheck::Clear => panic!("Expected a conflict"),
    }

    let after = form("2025-10-15", "10:00", "11:00").into_event();
    assert!(check_save(&after, &events).is_clear());
}

#[test]
fn test_editing_into_conflict_warns() {
    let events = store();

    let moved = form("2025-10-16", "11:30", "12:30").with_id("1");
    let SaveCheck::Conflicts(conflicts) = check_save(&moved, &events) else {
        panic!("Expected a conflict");
    };
    assert_eq!(conflicts[0].title, "점심 약속");

    let unchanged = events[0].clone();
    assert!(check_save(&unchanged, &events).is_clear());
}

#[test]
fn test_month_grid_cells_format_to_event_dates() {
    let events = store();
    let reference = date(2025, 10, 1);
    let grid = month_grid(reference);

    let mut marked = Vec::new();
    for day in grid.days() {
        let key = format_date(reference, Some(day));
        if events.iter().any(|e| e.date == key) {
            marked.push(day);
        }
    }
    assert_eq!(marked, vec![2, 15, 16]);
    assert_eq!(events_on_day(&events, 16)[0].id, "2");
}

#[test]
fn test_week_label_and_dates_agree() {
    let reference = date(2025, 10, 15);
    let week = week_dates(reference);

    assert_eq!(week_of_month(reference).to_string(), "2025년 10월 3주");
    for day in week {
        assert_eq!(week_of_month(day), week_of_month(reference));
    }
}

#[test]
fn test_new_year_holiday() {
    assert_eq!(holiday_on(date(2025, 1, 1)), Some("신정"));
}

#[test]
fn test_reminder_flow() {
    let events = store();
    let clock = ManualClock::new(at(2025, 10, 15, 8, 0));
    let mut scheduler = NotificationScheduler::new(clock.clone());

    // 체육대회 on 10-02 is already past its threshold
    let fired = scheduler.recompute(&events);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].event.id, "3");

    clock.set(at(2025, 10, 15, 8, 50));
    let fired = scheduler.recompute(&events);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].message, "10분 후 기존 회의 일정이 시작됩니다.");

    scheduler.dismiss(0);
    scheduler.dismiss(0);
    assert!(scheduler.active().is_empty());

    clock.set(at(2025, 10, 16, 11, 59));
    let fired = scheduler.recompute(&events);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].event.id, "2");
    assert_eq!(scheduler.notified().len(), 3);

    clock.advance(Duration::hours(1));
    assert!(scheduler.recompute(&events).is_empty());
}
