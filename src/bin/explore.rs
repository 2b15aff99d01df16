// Explorer: load the artifact into an immutable snapshot, serve the menu.
use skillscout::analyzer::Snapshot;
use skillscout::config::load_config;
use skillscout::explorer;
use skillscout::store;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, warn};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let postings = match store::load_postings(Path::new(&config.raw_data_path)) {
        Ok(postings) => postings,
        Err(e) => {
            error!("Failed to load {}: {e} (run `collect` first)", config.raw_data_path);
            return ExitCode::FAILURE;
        }
    };

    let snapshot = Snapshot::from_postings(&postings);
    if snapshot.is_empty() {
        warn!("{} holds no postings; every lookup will come up empty", config.raw_data_path);
    }

    if let Err(e) = explorer::run(&snapshot, &config) {
        error!("I/O error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
