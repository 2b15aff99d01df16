// Cities recommender: one skill on stdin, ranked location table on stdout.
use colored::Colorize;
use skillscout::analyzer::{Snapshot, demand};
use skillscout::config::load_config;
use skillscout::render;
use skillscout::store;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::error;

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

    print!("Enter a skill (e.g. python, sql, aws): ");
    if let Err(e) = io::stdout().flush() {
        error!("I/O error: {e}");
        return ExitCode::FAILURE;
    }

    let mut input = String::new();
    if let Err(e) = io::stdin().read_line(&mut input) {
        error!("I/O error: {e}");
        return ExitCode::FAILURE;
    }

    match demand::cities_for_skill(&snapshot, &input) {
        Ok(ranking) => {
            println!(
                "\n{}\n",
                format!("Job demand for skill '{}'", input.trim().to_lowercase()).bold()
            );
            print!("{}", render::ranked_table("location", &ranking));
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    ExitCode::SUCCESS
}
