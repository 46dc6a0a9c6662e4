//! Single-cell lookup in the encoded feature table.

use super::{Attribute, ColumnKey, FeatureTable};
use crate::error::{MinerError, Result};

/// Indicator value of `{attr_name}_{attr_value}` at the 1-based event `position` for `case_id`.
pub fn lookup(
    table: &FeatureTable,
    case_id: &str,
    attr_name: &str,
    attr_value: &str,
    position: usize,
) -> Result<u8> {
    let unknown = || MinerError::UnknownAttribute {
        attribute: attr_name.to_string(),
        value: attr_value.to_string(),
        position,
    };
    let attribute: Attribute = attr_name.parse().map_err(|_| unknown())?;
    let col = table
        .column(&ColumnKey::new(attribute, attr_value, position))
        .ok_or_else(unknown)?;
    let row = table
        .row_of(case_id)
        .ok_or_else(|| MinerError::CaseNotFound(case_id.to_string()))?;
    Ok(table.values()[[row, col]])
}
