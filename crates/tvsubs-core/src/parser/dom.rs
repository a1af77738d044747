//! Typed view over the parsed HTML tree
//!
//! The index walker only needs four operations on an element. Keeping them
//! behind a trait keeps the walk independent of the HTML library; the
//! `scraper` implementation lives here.

use scraper::ElementRef;

/// Minimal element interface the index walker traverses against.
pub trait DomNode: Sized {
    /// Lowercased tag name of this element.
    fn tag_name(&self) -> &str;

    /// Child elements in document order. Text nodes are skipped.
    fn children(&self) -> Vec<Self>;

    /// Attribute value, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Concatenated text content of this element and its descendants.
    fn text(&self) -> String;
}

impl<'a> DomNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn children(&self) -> Vec<Self> {
        // Walk the underlying tree nodes; wrap keeps only elements.
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        // Inherent ElementRef::text, not the trait method.
        ElementRef::text(self).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_tag_name_and_attribute() {
        let document = Html::parse_fragment(r#"<a href="/r/TheWire">The Wire</a>"#);
        let link = first(&document, "a");

        assert_eq!(DomNode::tag_name(&link), "a");
        assert_eq!(DomNode::attribute(&link, "href"), Some("/r/TheWire"));
        assert_eq!(DomNode::attribute(&link, "title"), None);
    }

    #[test]
    fn test_children_skip_text_nodes() {
        let document = Html::parse_fragment("<li>label <a>x</a> tail <ul></ul></li>");
        let item = first(&document, "li");

        let children = DomNode::children(&item);
        let tags: Vec<&str> = children.iter().map(|c| DomNode::tag_name(c)).collect();
        assert_eq!(tags, vec!["a", "ul"]);
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let document = Html::parse_fragment("<li><a>Sci</a>-<a>Fi</a></li>");
        let item = first(&document, "li");

        assert_eq!(DomNode::text(&item), "Sci-Fi");
    }
}
