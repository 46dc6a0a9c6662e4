#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use handoff_miner::{Event, EventLog};

pub fn t(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
}

pub fn ev(case: &str, seq: i64, secs: i64, activity: &str, resource: &str, amount: f64) -> Event {
    Event::new(case, seq, t(secs), "loan", activity, resource, amount)
}

/// `(activity, resource)` steps one minute apart
pub fn case_of(case: &str, first_seq: i64, steps: &[(&str, &str)]) -> Vec<Event> {
    steps
        .iter()
        .enumerate()
        .map(|(i, (a, r))| {
            let i = i as i64;
            ev(case, first_seq + i, 60 * i, a, r, 100.0)
        })
        .collect()
}

/// c1 has 4 events, c2 has 3, c3 has 2.
pub fn sample_log() -> EventLog {
    EventLog::new(vec![
        ev("c1", 1, 0, "A", "r1", 100.0),
        ev("c3", 2, 10, "A", "r2", 500.0),
        ev("c3", 3, 20, "B", "r2", 500.0),
        ev("c2", 4, 30, "A", "r1", 20.0),
        ev("c1", 5, 60, "A", "r1", 100.0),
        ev("c2", 6, 90, "B", "r2", 80.0),
        ev("c1", 7, 120, "B", "r2", 300.0),
        ev("c2", 8, 150, "B", "r2", 80.0),
        ev("c1", 9, 180, "C", "r3", 10.0),
    ])
}
