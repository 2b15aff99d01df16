// Collector: fetch the listing page once, parse it, write the raw artifact.
use skillscout::config::load_config;
use skillscout::model::ScrapeError;
use skillscout::parser::{JobBoardParser, Parser};
use skillscout::scraper::{Fetcher, HttpFetcher};
use skillscout::store;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match HttpFetcher::new(&config.user_agent) {
        Ok(f) => f,
        Err(e) => {
            error!("HTTP client error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Fetching {} ...", config.listings_url);
    let html = match fetcher.fetch(&config.listings_url).await {
        Ok(html) => html,
        Err(ScrapeError::InvalidResponse(body)) => {
            log_and_save_html(&body);
            error!("Listing page returned an error status");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Fetch error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Parsing listings...");
    let postings = match JobBoardParser::new().parse(&html) {
        Ok(postings) => postings,
        Err(e) => {
            log_and_save_html(&html);
            error!("Parse error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if postings.is_empty() {
        warn!("No postings found; the page structure may have changed");
        log_and_save_html(&html);
    }

    if let Err(e) = store::save_postings(Path::new(&config.raw_data_path), &postings) {
        error!("Save error: {e}");
        return ExitCode::FAILURE;
    }

    info!(
        "Scraping complete: {} postings saved to {}",
        postings.len(),
        config.raw_data_path
    );
    ExitCode::SUCCESS
}

/// Dumps the fetched page under logs/html/ for postmortem when fetching or
/// parsing goes wrong.
fn log_and_save_html(html: &str) {
    let folder = Path::new("logs/html");
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {e}");
        return;
    }
    let filename = folder.join("debug-listings.html");
    if let Err(e) = fs::write(&filename, html) {
        warn!("Failed to write debug HTML: {e}");
    } else {
        info!("Saved debug HTML: {}", filename.display());
    }
}
