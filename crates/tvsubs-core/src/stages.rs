//! Pure pipeline stages between parsing and resolution
//!
//! Each stage takes the previous stage's sequence and returns a new one;
//! nothing here touches the network or the filesystem.

use regex_lite::Regex;

use crate::error::{Result, TvSubsError};
use crate::types::{IndexEntry, ShowRecord};

/// Meta-category labels that group general TV subreddits, not shows.
pub const EXCLUDED_CATEGORIES: [&str; 2] = ["TV Reddit", "Networks"];

/// Genre labels for the hand-curated shows, index-aligned with
/// [`MANUAL_SHOWS`].
pub const MANUAL_CATEGORIES: [&str; 18] = [
    "Comedy", "Comedy", "Comedy", "Comedy", "Animated", "Drama", "Drama", "Drama", "Drama",
    "Drama", "Sci-Fi", "Sci-Fi", "Sci-Fi", "Sci-Fi", "Sci-Fi", "Sci-Fi", "Sci-Fi", "Sci-Fi",
];

/// Shows curated by hand from the genre drop-down menus the index page used
/// to have; they never made it onto the wiki list itself.
pub const MANUAL_SHOWS: [&str; 18] = [
    "crazyexgirlfriend",
    "FreshOfftheBoatTV",
    "JaneTheVirginCW",
    "Powerless",
    "YOI",
    "TwentyFour",
    "Brakebills",
    "Longmire",
    "TheNightOf",
    "UnRealTv",
    "BlackMirror",
    "legionfx",
    "RedDwarf",
    "StrangerThings",
    "TheOA",
    "Timeless",
    "Westworld",
    "ZNation",
];

/// Trim leading and trailing runs of meta-category entries.
///
/// Keeps the contiguous slice from the first to the last entry whose category
/// is not excluded, inclusive. Not a plain filter: an excluded block sitting
/// between two retained blocks survives; only the outer runs are dropped.
///
/// # Errors
/// `TvSubsError::EmptyRange` if every entry belongs to a meta category.
pub fn trim_meta_categories(entries: Vec<IndexEntry>) -> Result<Vec<IndexEntry>> {
    let mut kept = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !EXCLUDED_CATEGORIES.contains(&e.category.as_str()))
        .map(|(i, _)| i);

    let first = kept.next().ok_or(TvSubsError::EmptyRange)?;
    let last = kept.last().unwrap_or(first);

    Ok(entries
        .into_iter()
        .skip(first)
        .take(last - first + 1)
        .collect())
}

/// Strip every occurrence of "/r/" from a link target.
///
/// A global substitution, not a prefix trim: "/r//r/x" becomes "x".
pub fn strip_subreddit_prefix(href: &str) -> String {
    let re = Regex::new("/r/").unwrap();
    re.replace_all(href, "").into_owned()
}

/// Convert filtered entries into show records with bare subreddit names.
pub fn normalize_entries(entries: Vec<IndexEntry>) -> Vec<ShowRecord> {
    entries
        .into_iter()
        .map(|entry| ShowRecord {
            name: strip_subreddit_prefix(&entry.href),
            category: entry.category,
        })
        .collect()
}

/// Append the hand-curated shows to the end of the catalogue.
///
/// No deduplication against the collected entries; a show listed both on the
/// wiki page and here appears twice.
pub fn append_manual_shows(mut shows: Vec<ShowRecord>) -> Vec<ShowRecord> {
    shows.extend(
        MANUAL_SHOWS
            .iter()
            .zip(MANUAL_CATEGORIES.iter())
            .map(|(name, category)| ShowRecord {
                name: (*name).to_string(),
                category: (*category).to_string(),
            }),
    );
    shows
}
