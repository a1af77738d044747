//! Data types for the catalogue pipeline
//!
//! Every stage consumes the previous stage's output and produces a new
//! sequence; none of these types carries identity beyond its position.

use serde::{Deserialize, Serialize};

/// One (category, link) pair extracted from the wiki index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Genre label of the nearest preceding top-level list item.
    pub category: String,
    /// Link target as it appears in the page (e.g. "/r/TheWire").
    pub href: String,
}

/// A show subreddit awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Bare subreddit name, without the "/r/" prefix.
    pub name: String,
    /// Genre label from the index page.
    pub category: String,
}

/// Terminal catalogue row, one per exported CSV line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedShow {
    /// Bare subreddit name.
    pub name: String,
    /// Stable subreddit fullname (e.g. "t5_2qnzg"). Empty only when a
    /// lookup was skipped under the skip-and-record policy.
    pub subreddit_id: String,
    /// Genre label.
    pub category: String,
}
