// Core records: Posting, TaggedPosting
use thiserror::Error;

/// One scraped job listing, exactly as the page carried it. The `skills`
/// tags come from the listing itself and are often empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub title: String,
    pub location: String,
    pub skills: Vec<String>,
}

/// One (posting, inferred skill) pair. A posting with N inferred skills
/// becomes N rows sharing title and location. `skill` is always lowercase
/// and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPosting {
    pub title: String,
    pub location: String,
    pub skill: String,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("http error: {0}")]
    Http(String),
    /// Non-success status; carries the body so callers can dump it for debug.
    #[error("listing page returned an error status")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bad selector: {0}")]
    BadSelector(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact is empty")]
    Empty,
    #[error("unexpected header: {0}")]
    BadHeader(String),
    #[error("malformed row at line {0}")]
    MalformedRow(usize),
}

/// Outcome of a free-text lookup. Malformed input and zero matches surface
/// through the same channel; the dashboard just prints the message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid input: enter a non-empty value")]
    EmptyInput,
    #[error("no results found for {0}")]
    NoResults(String),
}
