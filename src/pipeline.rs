//! Pipeline: filter once, then run the network and feature branches on the shared filtered log.

use crate::config::{DiscretizationConfig, PipelineConfig};
use crate::error::Result;
use crate::eventlog::{filter_event_log, EventLog};
use crate::features::{FeatureDiscretizer, FeatureEncoder, FeatureTable};
use crate::network::{unreachable_pairs, SocialGraph, SocialNetworkBuilder};
use serde::Serialize;
use tracing::info;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub filtered: EventLog,
    pub graph: SocialGraph,
    pub unreachable: Vec<(String, String)>,
    pub features: FeatureTable,
}

impl PipelineOutput {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            events: self.filtered.len(),
            cases: self.features.num_rows(),
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            unreachable_pairs: self.unreachable.len(),
            feature_columns: self.features.num_columns(),
        }
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub events: usize,
    pub cases: usize,
    pub nodes: usize,
    pub edges: usize,
    pub unreachable_pairs: usize,
    pub feature_columns: usize,
}

pub struct Pipeline {
    config: PipelineConfig,
    discretizer: FeatureDiscretizer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, discretization: DiscretizationConfig) -> Self {
        Self {
            config,
            discretizer: FeatureDiscretizer::new(discretization),
        }
    }

    /// Filtered log only.
    pub fn filter(&self, log: &EventLog) -> Result<EventLog> {
        filter_event_log(log, self.config.case_length)
    }

    /// Handoff graph of the filtered log.
    pub fn social_network(&self, filtered: &EventLog) -> SocialGraph {
        SocialNetworkBuilder::new(self.config.handoff_threshold).build_from_log(filtered)
    }

    /// Feature table of the filtered log.
    pub fn feature_table(&self, filtered: &EventLog) -> Result<FeatureTable> {
        let discretized = self.discretizer.discretize(filtered)?;
        FeatureEncoder::new(self.config.case_length).encode(&discretized)
    }

    pub fn run(&self, log: &EventLog) -> Result<PipelineOutput> {
        let filtered = self.filter(log)?;
        info!(
            raw_events = log.len(),
            kept_events = filtered.len(),
            z = self.config.case_length,
            "event log filtered"
        );

        let graph = self.social_network(&filtered);
        let unreachable = unreachable_pairs(&graph, self.config.pair_scan);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            unreachable = unreachable.len(),
            x = self.config.handoff_threshold,
            "social network built"
        );

        let features = self.feature_table(&filtered)?;
        info!(
            cases = features.num_rows(),
            columns = features.num_columns(),
            "feature table encoded"
        );

        Ok(PipelineOutput {
            filtered,
            graph,
            unreachable,
            features,
        })
    }
}
