//! Error types for the catalogue pipeline
//!
//! Every failure surfaces to the caller; nothing is recovered silently and
//! nothing is retried.

use thiserror::Error;

/// Error type for catalogue pipeline operations
#[derive(Error, Debug)]
pub enum TvSubsError {
    /// Network-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Index page responded with a non-success status
    #[error("index page request returned status {status}: {url}")]
    Fetch { status: u16, url: String },

    /// Reddit API token request was rejected
    #[error("Reddit authentication failed: {0}")]
    Auth(String),

    /// Index page markup could not be parsed
    #[error("failed to parse index page: {0}")]
    Parse(String),

    /// Required HTML element was not found
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// Every extracted entry belongs to a meta category
    #[error("no show entries left after trimming meta categories")]
    EmptyRange,

    /// A show name did not resolve to a subreddit
    #[error("subreddit lookup failed for '{name}': {reason}")]
    Lookup { name: String, reason: String },

    /// Catalogue columns differ in length
    #[error("column length mismatch: {names} names, {ids} ids, {categories} categories")]
    LengthMismatch {
        names: usize,
        ids: usize,
        categories: usize,
    },

    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure while writing the catalogue
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for catalogue pipeline operations
pub type Result<T> = std::result::Result<T, TvSubsError>;
