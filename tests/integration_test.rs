//! Integration test: config load, SQLite source, full pipeline, artifact output.

mod common;

use handoff_miner::{
    config::{DiscretizationConfig, MinerConfig, PipelineConfig},
    lookup,
    output::{graph_to_dot, write_artifacts},
    MinerError, PairScan, Pipeline, StructuredLogger,
};
use handoff_miner::storage::EventStore;
use std::path::Path;

#[test]
fn config_load_default() {
    let c = MinerConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.pipeline.case_length, 13);
    assert_eq!(c.pipeline.handoff_threshold, 3);
    assert_eq!(c.pipeline.pair_scan, PairScan::AllOrdered);
    assert_eq!(c.source.table, "loans");
    assert_eq!(c.discretization.gap_medium_ratio, 0.65);
}

#[test]
fn config_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"pipeline":{"case_length":4,"pair_scan":"forward"},"log":{"json":true}}"#,
    )
    .unwrap();
    let c = MinerConfig::load(&path);
    assert_eq!(c.pipeline.case_length, 4);
    assert_eq!(c.pipeline.handoff_threshold, 3);
    assert_eq!(c.pipeline.pair_scan, PairScan::Forward);
    assert!(c.log.json);
    assert_eq!(c.log.level, "info");
}

fn pipeline(z: usize, x: u32) -> Pipeline {
    Pipeline::new(
        PipelineConfig {
            case_length: z,
            handoff_threshold: x,
            pair_scan: PairScan::AllOrdered,
        },
        DiscretizationConfig::default(),
    )
}

#[test]
fn storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::open(&dir.path().join("log.db"), "loans").unwrap();
    let log = common::sample_log();
    assert_eq!(store.insert_events(log.events()).unwrap(), log.len());
    assert_eq!(store.count().unwrap(), log.len() as u64);

    let loaded = store.load_log().unwrap();
    // stored by row id, which the sample log already follows
    assert_eq!(loaded, log);
}

#[test]
fn storage_rejects_bad_table_name() {
    let dir = tempfile::tempdir().unwrap();
    let res = EventStore::open(&dir.path().join("log.db"), "loans; DROP TABLE x");
    assert!(matches!(res, Err(MinerError::InvalidParameter(_))));
}

#[test]
fn full_pipeline_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = EventStore::open(&dir.path().join("log.db"), "loans").unwrap();
    store.insert_events(common::sample_log().events()).unwrap();
    let log = store.load_log().unwrap();

    let out = pipeline(3, 1).run(&log).unwrap();

    assert_eq!(out.filtered.len(), 6);
    assert_eq!(out.graph.weight("r1", "r2"), Some(3));
    assert_eq!(out.graph.nodes(), vec!["r1", "r2"]);
    assert_eq!(out.unreachable, vec![("r2".to_string(), "r1".to_string())]);
    assert_eq!(out.features.case_ids(), &["c1".to_string(), "c2".to_string()]);

    // c1: A@r1, A@r1, B@r2 ; c2: A@r1, B@r2, B@r2
    assert_eq!(lookup(&out.features, "c1", "activity", "B", 3).unwrap(), 1);
    assert_eq!(lookup(&out.features, "c2", "activity", "B", 2).unwrap(), 1);
    assert_eq!(lookup(&out.features, "c1", "resource", "r1", 2).unwrap(), 1);
    assert_eq!(lookup(&out.features, "c2", "apptype", "loan", 1).unwrap(), 1);
    assert!(matches!(
        lookup(&out.features, "c3", "activity", "A", 1),
        Err(MinerError::CaseNotFound(_))
    ));

    let summary = out.summary();
    assert_eq!(summary.cases, 2);
    assert_eq!(summary.edges, 1);
    assert_eq!(summary.unreachable_pairs, 1);
    assert_eq!(summary.feature_columns, out.features.num_columns());
}

#[test]
fn threshold_above_all_counts_gives_empty_graph() {
    let out = pipeline(3, 10).run(&common::sample_log()).unwrap();
    assert_eq!(out.graph.node_count(), 0);
    assert!(out.unreachable.is_empty());
    assert_eq!(out.features.num_rows(), 2);
}

#[test]
fn pipeline_fails_when_no_case_is_long_enough() {
    let err = pipeline(10, 1).run(&common::sample_log()).unwrap_err();
    assert!(matches!(err, MinerError::InsufficientData { min_events: 10 }));
}

#[test]
fn artifacts_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = pipeline(3, 1).run(&common::sample_log()).unwrap();
    let written = write_artifacts(&dir.path().join("out"), &out.graph, &out.features).unwrap();

    let graph: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written.graph_json).unwrap()).unwrap();
    assert_eq!(graph["nodes"], serde_json::json!(["r1", "r2"]));
    assert_eq!(graph["edges"][0]["weight"], 3);

    let features: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written.features_json).unwrap()).unwrap();
    assert_eq!(features["rows"].as_array().unwrap().len(), 2);
    assert_eq!(features["rows"][0]["caseid"], "c1");
    assert_eq!(
        features["columns"].as_array().unwrap().len(),
        out.features.num_columns()
    );

    let dot = std::fs::read_to_string(&written.graph_dot).unwrap();
    assert_eq!(dot, graph_to_dot(&out.graph));
    assert!(dot.contains("digraph"));
    assert!(dot.contains("r1"));
}

#[test]
fn summary_is_one_json_line() {
    let out = pipeline(3, 1).run(&common::sample_log()).unwrap();
    let mut buf = Vec::new();
    StructuredLogger::emit_json(&out.summary(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(v["edges"], 1);
}
