//! Handoff miner — resource social network and case feature table from a process event log.
//!
//! Modular structure:
//! - [`eventlog`] — Event and case types, case-length filter
//! - [`network`] — Handoff detection, thresholded social graph, reachability diagnostic
//! - [`features`] — Discretization, one-hot/positional encoding, item lookup
//! - [`pipeline`] — Runs both branches over one filtered log
//! - [`storage`] — SQLite event-log source
//! - [`output`] — Graph and feature table writers
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod eventlog;
pub mod network;
pub mod features;
pub mod pipeline;
pub mod storage;
pub mod output;
pub mod logging;

pub use config::MinerConfig;
pub use error::{MinerError, Result};
pub use eventlog::{filter_event_log, Event, EventLog};
pub use network::{detect_edges, unreachable_pairs, PairScan, SocialGraph, SocialNetworkBuilder};
pub use features::{lookup, FeatureDiscretizer, FeatureEncoder, FeatureTable};
pub use pipeline::{Pipeline, PipelineOutput, RunSummary};
pub use storage::EventStore;
pub use logging::StructuredLogger;
