//! Error types shared by every pipeline stage.

use thiserror::Error;

/// Crate result type.
pub type Result<T> = std::result::Result<T, MinerError>;

/// Pipeline errors. Every variant is terminal for the operation that raised it.
#[derive(Debug, Error)]
pub enum MinerError {
    /// No case reached the minimum length.
    #[error("no case has at least {min_events} events")]
    InsufficientData {
        /// Requested case length (z).
        min_events: usize,
    },

    /// An activity group had no events, so its mean is undefined.
    #[error("activity group '{activity}' is empty")]
    EmptyGroup {
        /// Activity name.
        activity: String,
    },

    /// Lookup key never produced by the encoder.
    #[error("unknown feature column {attribute}_{value}_{position}")]
    UnknownAttribute {
        attribute: String,
        value: String,
        position: usize,
    },

    /// Lookup case id not present in the feature table.
    #[error("case '{0}' not found in feature table")]
    CaseNotFound(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
