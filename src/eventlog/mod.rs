//! Event log types: events, cases, and the case-length filter.

mod filter;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use filter::filter_event_log;

/// One row of the source log. Never mutated after it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub case_id: String,
    /// Source row id; total tiebreak when timestamps collide
    pub sequence_id: i64,
    pub ts: DateTime<Utc>,
    pub app_type: String,
    pub activity: String,
    pub resource: String,
    pub amount: f64,
}

impl Event {
    pub fn new(
        case_id: impl Into<String>,
        sequence_id: i64,
        ts: DateTime<Utc>,
        app_type: impl Into<String>,
        activity: impl Into<String>,
        resource: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            sequence_id,
            ts,
            app_type: app_type.into(),
            activity: activity.into(),
            resource: resource.into(),
            amount,
        }
    }

    /// Sort key used everywhere an order over events is needed
    pub fn order_key(&self) -> (DateTime<Utc>, i64) {
        (self.ts, self.sequence_id)
    }
}

/// Events sharing a case id, ordered by timestamp (sequence id breaks ties).
#[derive(Debug, Clone, PartialEq)]
pub struct Case<'a> {
    pub case_id: &'a str,
    pub events: Vec<&'a Event>,
}

impl Case<'_> {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// An ordered collection of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Group events into cases, ordered by case id; events inside a case are
    /// sorted by `(ts, sequence_id)`.
    pub fn cases(&self) -> Vec<Case<'_>> {
        let mut by_case: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
        for e in &self.events {
            by_case.entry(e.case_id.as_str()).or_default().push(e);
        }
        by_case
            .into_iter()
            .map(|(case_id, mut events)| {
                events.sort_by_key(|e| e.order_key());
                Case { case_id, events }
            })
            .collect()
    }
}

impl From<Vec<Event>> for EventLog {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
