//! Case-length filter: keep the first `z` events of every case with at least `z` events.

use super::{Event, EventLog};
use crate::error::{MinerError, Result};
use tracing::debug;

/// Truncate every case to its first `z` events and drop shorter cases.
///
/// The result is re-sorted globally by timestamp (sequence id breaks ties).
/// Fails with [`MinerError::InsufficientData`] when no case qualifies.
pub fn filter_event_log(log: &EventLog, z: usize) -> Result<EventLog> {
    if z == 0 {
        return Err(MinerError::InvalidParameter(
            "case length must be positive".into(),
        ));
    }

    let cases = log.cases();
    let total_cases = cases.len();
    let mut kept: Vec<Event> = Vec::new();
    let mut dropped = 0usize;
    for case in cases {
        if case.len() >= z {
            kept.extend(case.events[..z].iter().map(|e| (*e).clone()));
        } else {
            dropped += 1;
        }
    }

    if kept.is_empty() {
        return Err(MinerError::InsufficientData { min_events: z });
    }

    kept.sort_by_key(|e| e.order_key());
    debug!(
        z,
        total_cases,
        dropped_cases = dropped,
        events = kept.len(),
        "filtered event log"
    );
    Ok(EventLog::new(kept))
}
