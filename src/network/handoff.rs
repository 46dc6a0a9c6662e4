//! Per-case handoff detection over activity/resource runs.

use crate::eventlog::{Case, Event};

/// Candidate handoff from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandoffEdge {
    pub source: String,
    pub target: String,
}

impl HandoffEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Current run of same-activity events.
///
/// The opening run counts its first event, so a case `A@r1, A@r1, B@r2`
/// emits two copies of `r1 -> r2`. Runs started after a change begin at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState<'a> {
    pub activity: &'a str,
    pub resource: &'a str,
    pub run_length: usize,
}

impl<'a> RunState<'a> {
    fn start(event: &'a Event) -> Self {
        Self {
            activity: &event.activity,
            resource: &event.resource,
            run_length: 0,
        }
    }

    /// Advance over one event, pushing any handoffs it closes into `out`.
    fn step(self, event: &'a Event, out: &mut Vec<HandoffEdge>) -> Self {
        if self.activity == event.activity {
            return Self {
                run_length: self.run_length + 1,
                ..self
            };
        }
        if self.resource != event.resource {
            let edge = HandoffEdge::new(self.resource, event.resource.as_str());
            out.extend(std::iter::repeat(edge).take(self.run_length));
        }
        Self::start(event)
    }
}

/// Emit candidate handoff edges for one case.
///
/// Multiplicity equals the length of the run being closed, and a change of
/// activity by the same resource resets the run without emitting.
pub fn detect_edges(case: &Case<'_>) -> Vec<HandoffEdge> {
    let mut out = Vec::new();
    let Some(&first) = case.events.first() else {
        return out;
    };
    case.events
        .iter()
        .copied()
        .fold(RunState::start(first), |state, event| state.step(event, &mut out));
    out
}
