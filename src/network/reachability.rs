//! Unreachable resource pairs in the handoff graph.

use super::SocialGraph;
use petgraph::visit::Dfs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which ordered node pairs are checked, in node enumeration (insertion) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairScan {
    /// Only positional pairs `(nodes[i], nodes[j])` with `i < j`.
    Forward,
    /// Every ordered pair of distinct nodes. Strictly stronger than `Forward`.
    #[default]
    AllOrdered,
}

impl PairScan {
    fn includes(self, i: usize, j: usize) -> bool {
        match self {
            PairScan::Forward => i < j,
            PairScan::AllOrdered => i != j,
        }
    }
}

/// Report every scanned pair `(a, b)` with no directed path `a -> b`.
///
/// One DFS per source node, so O(V * (V + E)).
pub fn unreachable_pairs(graph: &SocialGraph, scan: PairScan) -> Vec<(String, String)> {
    let g = graph.as_graph();
    let nodes: Vec<_> = g.node_indices().collect();
    let mut out = Vec::new();

    for (i, &source) in nodes.iter().enumerate() {
        let mut reachable = HashSet::new();
        let mut dfs = Dfs::new(g, source);
        while let Some(n) = dfs.next(g) {
            reachable.insert(n);
        }
        for (j, &target) in nodes.iter().enumerate() {
            if scan.includes(i, j) && !reachable.contains(&target) {
                out.push((g[source].clone(), g[target].clone()));
            }
        }
    }
    out
}
