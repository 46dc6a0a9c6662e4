//! Miner configuration, loaded from JSON with defaults for every section.

use crate::network::PairScan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Where the event log is read from
    pub source: SourceConfig,
    /// Case length and handoff threshold
    pub pipeline: PipelineConfig,
    /// Bucket ratios relative to per-activity means
    pub discretization: DiscretizationConfig,
    /// Output artifacts
    pub output: OutputConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub db_path: PathBuf,
    pub table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Events kept per case (z); shorter cases are dropped
    pub case_length: usize,
    /// Minimum global handoff count for an edge (x)
    pub handoff_threshold: u32,
    pub pair_scan: PairScan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscretizationConfig {
    pub gap_short_ratio: f64,
    pub gap_medium_ratio: f64,
    pub amount_small_ratio: f64,
    pub amount_medium_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("eventlog.db"),
            table: "loans".to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            case_length: 13,
            handoff_threshold: 3,
            pair_scan: PairScan::AllOrdered,
        }
    }
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        Self {
            gap_short_ratio: 0.4,
            gap_medium_ratio: 0.65,
            amount_small_ratio: 0.4,
            amount_medium_ratio: 1.2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl MinerConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<MinerConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
