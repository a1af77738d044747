//! TV-Show Subreddit Catalogue Core Library
//!
//! This crate builds a catalogue of television-show subreddits from the
//! r/television wiki "big list" page, resolves each show to its stable
//! subreddit fullname through the Reddit API, and exports the result as a
//! three-column CSV (`ShowName, subreddit_id, Type`).
//!
//! # Pipeline
//! - Fetch the index page markup
//! - Walk its nested lists into (category, link) entries
//! - Trim the leading/trailing meta-category blocks
//! - Strip the "/r/" prefix from each link
//! - Append the hand-curated shows
//! - Resolve every show name to a subreddit fullname
//! - Write the catalogue CSV

pub mod catalog;
pub mod client;
pub mod error;
pub mod export;
pub mod parser;
pub mod resolver;
pub mod settings;
pub mod stages;
pub mod types;

// Re-export main types for convenience
pub use catalog::CatalogPipeline;
pub use client::{ClientConfig, WikiClient};
pub use error::{Result, TvSubsError};
pub use export::OUTPUT_FILE;
pub use resolver::{RedditCredentials, RedditResolver, ResolvePolicy, ResolveSubreddit};
pub use settings::Settings;
pub use types::{IndexEntry, ResolvedShow, ShowRecord};
