//! Handoff miner entrypoint: read the event log from SQLite, build the handoff
//! network and the case feature table, write both under the output directory.

use handoff_miner::{
    config::MinerConfig,
    logging::StructuredLogger,
    output::write_artifacts,
    pipeline::Pipeline,
    storage::EventStore,
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("HANDOFF_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = MinerConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        db = ?config.source.db_path,
        table = %config.source.table,
        "handoff miner starting"
    );

    let store = EventStore::open(&config.source.db_path, &config.source.table)?;
    let log = store.load_log()?;
    info!(events = log.len(), "event log loaded");

    let pipeline = Pipeline::new(config.pipeline.clone(), config.discretization.clone());
    let output = pipeline.run(&log)?;

    for (a, b) in &output.unreachable {
        info!(source = %a, target = %b, "no handoff path");
    }

    let written = write_artifacts(&config.output.dir, &output.graph, &output.features)?;
    info!(
        graph = %written.graph_json.display(),
        dot = %written.graph_dot.display(),
        features = %written.features_json.display(),
        "handoff miner done"
    );

    StructuredLogger::emit_json(&output.summary(), &mut std::io::stdout().lock())?;
    Ok(())
}
