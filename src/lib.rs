pub mod analyzer;
pub mod config;
pub mod explorer;
pub mod model;
pub mod parser;
pub mod render;
pub mod scraper;
pub mod store;
pub mod tagger;
