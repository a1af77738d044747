//! Index page parsing
//!
//! - `dom`: minimal element interface the walker traverses against
//! - `index`: nested-list walker producing (category, link) entries

pub mod dom;
pub mod index;

// Re-export main parsing entry points
pub use dom::DomNode;
pub use index::{extract_entries, parse_index};
