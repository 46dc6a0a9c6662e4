//! One-hot encoding and long-to-wide reshape of discretized cases.

use super::{Attribute, ColumnKey, DiscretizedEvent, FeatureTable};
use crate::error::{MinerError, Result};
use ndarray::Array2;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Builds the wide per-case feature table for cases of exactly `case_length` events.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    case_length: usize,
}

impl FeatureEncoder {
    pub fn new(case_length: usize) -> Self {
        Self { case_length }
    }

    /// Encode `events` (grouped by case, in event order) into a [`FeatureTable`].
    ///
    /// Value domains are collected over the whole input, so every row has the
    /// same columns and unobserved combinations are 0.
    pub fn encode(&self, events: &[DiscretizedEvent]) -> Result<FeatureTable> {
        let z = self.case_length;
        if z == 0 {
            return Err(MinerError::InvalidParameter(
                "case length must be positive".into(),
            ));
        }

        let mut domains: BTreeMap<Attribute, BTreeSet<&str>> = BTreeMap::new();
        for e in events {
            for attr in Attribute::ALL {
                domains.entry(attr).or_default().insert(attr.value_of(e));
            }
        }

        // Base (position 0) layout: attributes in declaration order, values sorted.
        let base: Vec<(Attribute, &str)> = domains
            .iter()
            .flat_map(|(&attr, values)| values.iter().map(move |&v| (attr, v)))
            .collect();
        let width = base.len();

        let mut columns = Vec::with_capacity(width * z);
        for position in 1..=z {
            for &(attribute, value) in &base {
                columns.push(ColumnKey::new(attribute, value, position));
            }
        }
        let column_index: HashMap<ColumnKey, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i))
            .collect();

        let mut by_case: BTreeMap<&str, Vec<&DiscretizedEvent>> = BTreeMap::new();
        for e in events {
            by_case.entry(e.case_id.as_str()).or_default().push(e);
        }

        let mut values = Array2::<u8>::zeros((by_case.len(), columns.len()));
        let mut case_ids = Vec::with_capacity(by_case.len());
        for (row, (case_id, case_events)) in by_case.into_iter().enumerate() {
            if case_events.len() != z {
                return Err(MinerError::InvalidParameter(format!(
                    "case '{case_id}' has {} events, expected {z}",
                    case_events.len()
                )));
            }
            for (p, e) in case_events.iter().enumerate() {
                for attr in Attribute::ALL {
                    let key = ColumnKey::new(attr, attr.value_of(e), p + 1);
                    let col = column_index[&key];
                    values[[row, col]] = 1;
                }
            }
            case_ids.push(case_id.to_string());
        }

        debug!(
            cases = case_ids.len(),
            columns = columns.len(),
            "encoded feature table"
        );
        Ok(FeatureTable::new(case_ids, columns, column_index, values))
    }
}
