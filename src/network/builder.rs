//! Global aggregation of candidate handoffs into a thresholded graph.

use super::{detect_edges, HandoffEdge, SocialGraph};
use crate::eventlog::EventLog;
use std::collections::HashMap;
use tracing::debug;

/// Counts handoff pairs across the whole log and keeps those seen at least
/// `threshold` times.
#[derive(Debug, Clone)]
pub struct SocialNetworkBuilder {
    threshold: u32,
}

impl SocialNetworkBuilder {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Build the graph from already-detected candidate edges.
    ///
    /// Edges are added in the order their pair first appears in `edges`, so
    /// node enumeration order follows the candidate stream.
    pub fn build<I>(&self, edges: I) -> SocialGraph
    where
        I: IntoIterator<Item = HandoffEdge>,
    {
        let mut counts: HashMap<HandoffEdge, u32> = HashMap::new();
        let mut first_seen: Vec<HandoffEdge> = Vec::new();
        for edge in edges {
            let c = counts.entry(edge).or_insert_with_key(|k| {
                first_seen.push(k.clone());
                0
            });
            *c += 1;
        }

        let mut graph = SocialGraph::new();
        for edge in &first_seen {
            let count = counts[edge];
            if count >= self.threshold {
                graph.add_edge(&edge.source, &edge.target, count);
            }
        }
        debug!(
            candidates = first_seen.len(),
            retained = graph.edge_count(),
            threshold = self.threshold,
            "built social network"
        );
        graph
    }

    /// Detect candidate edges for every case in `log` and build the graph.
    pub fn build_from_log(&self, log: &EventLog) -> SocialGraph {
        let candidates: Vec<HandoffEdge> = log
            .cases()
            .iter()
            .flat_map(detect_edges)
            .collect();
        self.build(candidates)
    }
}

impl Default for SocialNetworkBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}
