//! Output writers: graph as JSON node-link data and Graphviz DOT, feature table as JSON.

use crate::error::Result;
use crate::features::FeatureTable;
use crate::network::{SocialGraph, WeightedEdge};
use petgraph::dot::Dot;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    pub nodes: Vec<&'a str>,
    pub edges: Vec<WeightedEdge>,
}

impl<'a> From<&'a SocialGraph> for GraphDocument<'a> {
    fn from(g: &'a SocialGraph) -> Self {
        Self {
            nodes: g.nodes(),
            edges: g.edges(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureRowDocument<'a> {
    pub caseid: &'a str,
    pub values: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct FeatureDocument<'a> {
    pub columns: Vec<String>,
    pub rows: Vec<FeatureRowDocument<'a>>,
}

impl<'a> From<&'a FeatureTable> for FeatureDocument<'a> {
    fn from(t: &'a FeatureTable) -> Self {
        let rows = t
            .case_ids()
            .iter()
            .zip(t.values().rows())
            .map(|(caseid, row)| FeatureRowDocument {
                caseid,
                values: row.to_vec(),
            })
            .collect();
        Self {
            columns: t.column_names(),
            rows,
        }
    }
}

/// Graphviz text with resource labels and weight edge labels.
pub fn graph_to_dot(graph: &SocialGraph) -> String {
    format!("{}", Dot::new(graph.as_graph()))
}

/// Paths of the written artifacts.
#[derive(Debug, Clone)]
pub struct WrittenArtifacts {
    pub graph_json: PathBuf,
    pub graph_dot: PathBuf,
    pub features_json: PathBuf,
}

/// Write `graph.json`, `graph.dot` and `features.json` under `dir`.
pub fn write_artifacts(
    dir: &Path,
    graph: &SocialGraph,
    features: &FeatureTable,
) -> Result<WrittenArtifacts> {
    fs::create_dir_all(dir)?;
    let out = WrittenArtifacts {
        graph_json: dir.join("graph.json"),
        graph_dot: dir.join("graph.dot"),
        features_json: dir.join("features.json"),
    };
    fs::write(
        &out.graph_json,
        serde_json::to_string_pretty(&GraphDocument::from(graph))?,
    )?;
    fs::write(&out.graph_dot, graph_to_dot(graph))?;
    fs::write(
        &out.features_json,
        serde_json::to_string(&FeatureDocument::from(features))?,
    )?;
    info!(dir = %dir.display(), "artifacts written");
    Ok(out)
}
