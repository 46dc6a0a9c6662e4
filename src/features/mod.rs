//! Case feature table: discretization, one-hot encoding, positional reshape and lookup.

mod discretize;
mod encode;
mod item;

pub use discretize::{ActivityStats, AmountLevel, DiscretizedEvent, FeatureDiscretizer, GapLevel};
pub use encode::FeatureEncoder;
pub use item::lookup;

use crate::error::MinerError;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Categorical attribute one-hot encoded per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "apptype")]
    ApplicationType,
    #[serde(rename = "activity")]
    Activity,
    #[serde(rename = "resource")]
    Resource,
    #[serde(rename = "reqamount")]
    Amount,
    #[serde(rename = "ts")]
    Gap,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::ApplicationType,
        Attribute::Activity,
        Attribute::Resource,
        Attribute::Amount,
        Attribute::Gap,
    ];

    /// Column prefix
    pub fn name(self) -> &'static str {
        match self {
            Attribute::ApplicationType => "apptype",
            Attribute::Activity => "activity",
            Attribute::Resource => "resource",
            Attribute::Amount => "reqamount",
            Attribute::Gap => "ts",
        }
    }

    pub fn value_of(self, event: &DiscretizedEvent) -> &str {
        match self {
            Attribute::ApplicationType => &event.app_type,
            Attribute::Activity => &event.activity,
            Attribute::Resource => &event.resource,
            Attribute::Amount => event.amount.as_str(),
            Attribute::Gap => event.gap.as_str(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = MinerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| MinerError::InvalidParameter(format!("unknown attribute '{s}'")))
    }
}

/// Typed column address: attribute, value, 1-based event position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnKey {
    pub attribute: Attribute,
    pub value: String,
    pub position: usize,
}

impl ColumnKey {
    pub fn new(attribute: Attribute, value: impl Into<String>, position: usize) -> Self {
        Self {
            attribute,
            value: value.into(),
            position,
        }
    }

    /// `{attribute}_{value}` for the first event, `{attribute}_{value}_{position}` after.
    pub fn column_name(&self) -> String {
        if self.position <= 1 {
            format!("{}_{}", self.attribute, self.value)
        } else {
            format!("{}_{}_{}", self.attribute, self.value, self.position)
        }
    }
}

/// One row per case; every row has the same one-hot columns.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    case_ids: Vec<String>,
    columns: Vec<ColumnKey>,
    column_index: HashMap<ColumnKey, usize>,
    row_index: HashMap<String, usize>,
    values: Array2<u8>,
}

impl FeatureTable {
    fn new(
        case_ids: Vec<String>,
        columns: Vec<ColumnKey>,
        column_index: HashMap<ColumnKey, usize>,
        values: Array2<u8>,
    ) -> Self {
        let row_index = case_ids
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self {
            case_ids,
            columns,
            column_index,
            row_index,
            values,
        }
    }

    pub fn case_ids(&self) -> &[String] {
        &self.case_ids
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(ColumnKey::column_name).collect()
    }

    pub fn column(&self, key: &ColumnKey) -> Option<usize> {
        self.column_index.get(key).copied()
    }

    pub fn row_of(&self, case_id: &str) -> Option<usize> {
        self.row_index.get(case_id).copied()
    }

    pub fn row(&self, case_id: &str) -> Option<ArrayView1<'_, u8>> {
        self.row_of(case_id).map(|r| self.values.row(r))
    }

    pub fn values(&self) -> &Array2<u8> {
        &self.values
    }

    pub fn num_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_columns(&self) -> usize {
        self.values.ncols()
    }
}
