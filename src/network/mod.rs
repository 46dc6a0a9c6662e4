//! Resource handoff social network: edge detection, graph construction, reachability.

mod builder;
mod handoff;
mod reachability;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use builder::SocialNetworkBuilder;
pub use handoff::{detect_edges, HandoffEdge, RunState};
pub use reachability::{unreachable_pairs, PairScan};

/// Weighted edge as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Directed handoff graph. Nodes are enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    graph: DiGraph<String, u32>,
    index: HashMap<String, NodeIndex>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, resource: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(resource) {
            return idx;
        }
        let idx = self.graph.add_node(resource.to_string());
        self.index.insert(resource.to_string(), idx);
        idx
    }

    /// Add (or overwrite) the edge `source -> target`, creating both endpoints.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: u32) {
        let a = self.node(source);
        let b = self.node(target);
        self.graph.update_edge(a, b, weight);
    }

    /// Resources in enumeration order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|i| self.graph[i].as_str())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, resource: &str) -> bool {
        self.index.contains_key(resource)
    }

    pub fn weight(&self, source: &str, target: &str) -> Option<u32> {
        let a = *self.index.get(source)?;
        let b = *self.index.get(target)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.graph
            .edge_references()
            .map(|e| WeightedEdge {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                weight: *e.weight(),
            })
            .collect()
    }

    /// Underlying petgraph graph, for callers that run their own algorithms.
    pub fn as_graph(&self) -> &DiGraph<String, u32> {
        &self.graph
    }
}
