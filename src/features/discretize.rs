//! Per-activity discretization of time gaps and request amounts.

use crate::config::DiscretizationConfig;
use crate::error::{MinerError, Result};
use crate::eventlog::{Event, EventLog};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Time-gap level relative to the activity mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapLevel {
    Short,
    Medium,
    Long,
}

impl GapLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            GapLevel::Short => "SHORT",
            GapLevel::Medium => "MEDIUM",
            GapLevel::Long => "LONG",
        }
    }
}

/// Amount level relative to the activity mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountLevel {
    Small,
    Medium,
    Large,
}

impl AmountLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AmountLevel::Small => "SMALL",
            AmountLevel::Medium => "MEDIUM",
            AmountLevel::Large => "LARGE",
        }
    }
}

/// Event with gap and amount replaced by categorical levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizedEvent {
    pub case_id: String,
    pub sequence_id: i64,
    pub app_type: String,
    pub activity: String,
    pub resource: String,
    pub amount: AmountLevel,
    pub gap: GapLevel,
}

/// Means of one activity group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityStats {
    pub mean_gap_secs: f64,
    pub mean_amount: f64,
}

impl ActivityStats {
    /// Mean over `gaps` and `amounts`; both slices describe the same events.
    pub fn from_group(activity: &str, gaps: &[f64], amounts: &[f64]) -> Result<Self> {
        if gaps.is_empty() || amounts.is_empty() {
            return Err(MinerError::EmptyGroup {
                activity: activity.to_string(),
            });
        }
        Ok(Self {
            mean_gap_secs: mean(gaps),
            mean_amount: mean(amounts),
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Turns raw events into [`DiscretizedEvent`]s using per-activity means.
#[derive(Debug, Clone, Default)]
pub struct FeatureDiscretizer {
    config: DiscretizationConfig,
}

impl FeatureDiscretizer {
    pub fn new(config: DiscretizationConfig) -> Self {
        Self { config }
    }

    pub fn gap_level(&self, gap_secs: f64, mean: f64) -> GapLevel {
        if gap_secs < self.config.gap_short_ratio * mean {
            GapLevel::Short
        } else if gap_secs < self.config.gap_medium_ratio * mean {
            GapLevel::Medium
        } else {
            GapLevel::Long
        }
    }

    pub fn amount_level(&self, amount: f64, mean: f64) -> AmountLevel {
        if amount < self.config.amount_small_ratio * mean {
            AmountLevel::Small
        } else if amount < self.config.amount_medium_ratio * mean {
            AmountLevel::Medium
        } else {
            AmountLevel::Large
        }
    }

    /// Discretize every event of `log`. Output keeps the input event order.
    pub fn discretize(&self, log: &EventLog) -> Result<Vec<DiscretizedEvent>> {
        let events = log.events();

        // activity -> indices into `events`
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, e) in events.iter().enumerate() {
            groups.entry(e.activity.as_str()).or_default().push(i);
        }

        let mut levels: Vec<Option<(GapLevel, AmountLevel)>> = vec![None; events.len()];
        for (activity, mut members) in groups {
            members.sort_by_key(|&i| events[i].order_key());
            let gaps = gaps_within_cases(events, &members);
            let amounts: Vec<f64> = members.iter().map(|&i| events[i].amount).collect();
            let stats = ActivityStats::from_group(activity, &gaps, &amounts)?;
            debug!(
                activity,
                events = members.len(),
                mean_gap_secs = stats.mean_gap_secs,
                mean_amount = stats.mean_amount,
                "activity statistics"
            );
            for (k, &i) in members.iter().enumerate() {
                levels[i] = Some((
                    self.gap_level(gaps[k], stats.mean_gap_secs),
                    self.amount_level(amounts[k], stats.mean_amount),
                ));
            }
        }

        events
            .iter()
            .zip(levels)
            .map(|(e, lv)| {
                let (gap, amount) = lv.ok_or_else(|| MinerError::EmptyGroup {
                    activity: e.activity.clone(),
                })?;
                Ok(DiscretizedEvent {
                    case_id: e.case_id.clone(),
                    sequence_id: e.sequence_id,
                    app_type: e.app_type.clone(),
                    activity: e.activity.clone(),
                    resource: e.resource.clone(),
                    amount,
                    gap,
                })
            })
            .collect()
    }
}

/// Seconds since the previous member event of the same case; 0 for the first.
#[allow(clippy::cast_precision_loss)]
fn gaps_within_cases(events: &[Event], members: &[usize]) -> Vec<f64> {
    let mut last_seen: HashMap<&str, &Event> = HashMap::new();
    members
        .iter()
        .map(|&i| {
            let e = &events[i];
            last_seen
                .insert(e.case_id.as_str(), e)
                .map_or(0.0, |prev| (e.ts - prev.ts).num_milliseconds() as f64 / 1000.0)
        })
        .collect()
}
