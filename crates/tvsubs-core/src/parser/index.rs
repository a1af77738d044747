//! Index page walker
//!
//! The "big list" wiki page keeps its whole index inside a single
//! `<blockquote>`: one top-level `<li>` per genre, the genre label in the
//! item's first link and the show links in a nested `<ul>`.

use scraper::{Html, Selector};

use crate::error::{Result, TvSubsError};
use crate::types::IndexEntry;

use super::dom::DomNode;

/// Parse the raw index page markup into (category, link) entries.
///
/// # Arguments
/// * `html` - Raw HTML content of the index page
///
/// # Returns
/// * `Ok(Vec<IndexEntry>)` in document order
/// * `Err(TvSubsError::ElementNotFound)` if the blockquote or its list is
///   missing
pub fn parse_index(html: &str) -> Result<Vec<IndexEntry>> {
    let document = Html::parse_document(html);

    let blockquote = Selector::parse("blockquote")
        .map_err(|e| TvSubsError::Parse(format!("invalid selector: {e:?}")))?;
    let container = document
        .select(&blockquote)
        .next()
        .ok_or_else(|| TvSubsError::ElementNotFound("blockquote".to_string()))?;

    let list = Selector::parse("ul")
        .map_err(|e| TvSubsError::Parse(format!("invalid selector: {e:?}")))?;
    let list = container
        .select(&list)
        .next()
        .ok_or_else(|| TvSubsError::ElementNotFound("index list".to_string()))?;

    extract_entries(&list)
}

/// Walk the top-level list and collect one entry per show link.
///
/// Each top-level `<li>` contributes its first link's text as the current
/// category label, then every link inside its nested `<ul>`s as one entry
/// under that label. The label carries over to following siblings that have
/// no link of their own; an item with no nested list contributes nothing but
/// still updates the label.
///
/// # Errors
/// `TvSubsError::ElementNotFound` if a nested list appears before any
/// category label has been seen.
pub fn extract_entries<N: DomNode>(list: &N) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    let mut category: Option<String> = None;

    for item in list.children() {
        if item.tag_name() != "li" {
            continue;
        }

        let children = item.children();

        if let Some(label) = children.iter().find(|c| c.tag_name() == "a") {
            category = Some(label.text().trim().to_string());
        }

        for sublist in children.iter().filter(|c| c.tag_name() == "ul") {
            let label = category
                .as_ref()
                .ok_or_else(|| TvSubsError::ElementNotFound("category label".to_string()))?;

            for href in collect_hrefs(sublist) {
                entries.push(IndexEntry {
                    category: label.clone(),
                    href,
                });
            }
        }
    }

    Ok(entries)
}

/// Collect the href of every link below `node`, in document order.
///
/// Links without an href are skipped.
fn collect_hrefs<N: DomNode>(node: &N) -> Vec<String> {
    let mut hrefs = Vec::new();

    for child in node.children() {
        if child.tag_name() == "a" {
            if let Some(href) = child.attribute("href") {
                hrefs.push(href.to_string());
            }
        }
        hrefs.extend(collect_hrefs(&child));
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_single_show() {
        let html = r#"<html><body><blockquote><ul>
            <li><a href="/t/drama">Drama</a><ul><li><a href="/r/show1">show1</a></li></ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        assert_eq!(
            entries,
            vec![IndexEntry {
                category: "Drama".to_string(),
                href: "/r/show1".to_string(),
            }]
        );
    }

    #[test]
    fn test_entry_count_matches_link_count() {
        let html = r#"<html><body><blockquote><ul>
            <li><a>Drama</a><ul>
                <li><a href="/r/TheWire">The Wire</a></li>
                <li><a href="/r/okkupert">Occupied</a></li>
            </ul></li>
            <li><a>Comedy</a><ul>
                <li><a href="/r/brooklynninenine">B99</a></li>
            </ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].category, "Drama");
        assert_eq!(entries[1].category, "Drama");
        assert_eq!(entries[2].category, "Comedy");
        assert_eq!(entries[2].href, "/r/brooklynninenine");
    }

    #[test]
    fn test_category_carries_over_to_unlabeled_sibling() {
        let html = r#"<html><body><blockquote><ul>
            <li><a>Drama</a></li>
            <li><ul><li><a href="/r/TheWire">The Wire</a></li></ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, "Drama");
    }

    #[test]
    fn test_item_without_sublist_only_updates_label() {
        let html = r#"<html><body><blockquote><ul>
            <li><a>Drama</a><ul><li><a href="/r/TheWire">The Wire</a></li></ul></li>
            <li><a>Comedy</a></li>
            <li><ul><li><a href="/r/Veep">Veep</a></li></ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].category, "Comedy");
        assert_eq!(entries[1].href, "/r/Veep");
    }

    #[test]
    fn test_deeply_nested_links_are_collected() {
        let html = r#"<html><body><blockquote><ul>
            <li><a>Drama</a><ul>
                <li><a href="/r/a">a</a><ul><li><a href="/r/b">b</a></li></ul></li>
            </ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        let hrefs: Vec<&str> = entries.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/r/a", "/r/b"]);
    }

    #[test]
    fn test_link_without_href_is_skipped() {
        let html = r#"<html><body><blockquote><ul>
            <li><a>Drama</a><ul>
                <li><a>nameless</a></li>
                <li><a href="/r/TheWire">The Wire</a></li>
            </ul></li>
        </ul></blockquote></body></html>"#;

        let entries = parse_index(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].href, "/r/TheWire");
    }

    #[test]
    fn test_sublist_before_any_label_fails() {
        let html = r#"<html><body><blockquote><ul>
            <li><ul><li><a href="/r/TheWire">The Wire</a></li></ul></li>
        </ul></blockquote></body></html>"#;

        let result = parse_index(html);
        assert!(matches!(result, Err(TvSubsError::ElementNotFound(_))));
    }

    #[test]
    fn test_missing_blockquote_fails() {
        let result = parse_index("<html><body><ul></ul></body></html>");
        match result {
            Err(TvSubsError::ElementNotFound(what)) => assert_eq!(what, "blockquote"),
            other => panic!("expected ElementNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blockquote_without_list_fails() {
        let result = parse_index("<html><body><blockquote><p>empty</p></blockquote></body></html>");
        match result {
            Err(TvSubsError::ElementNotFound(what)) => assert_eq!(what, "index list"),
            other => panic!("expected ElementNotFound, got {other:?}"),
        }
    }
}
