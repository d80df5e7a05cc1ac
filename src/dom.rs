//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate that the detectors share: attribute
//! access, tag names, element lookup by tag or attribute predicate, label
//! resolution and the visible-text walk.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Elements whose text never renders.
pub const NON_VISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with runs of whitespace collapsed to single spaces.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    collapse_whitespace(&sel.text())
}

/// Collapse every whitespace run to one space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

// === Querying ===

/// Get all elements with the given tag name
#[inline]
#[must_use]
pub fn get_elements_by_tag_name<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    doc.select(tag)
}

/// Elements carrying `attr` whose value satisfies `predicate`.
///
/// Attribute values are matched in Rust rather than through a CSS attribute
/// selector so arbitrary values never need selector escaping.
pub fn find_by_attribute<'a, F>(doc: &'a Document, attr: &str, predicate: F) -> Vec<Selection<'a>>
where
    F: Fn(&str) -> bool,
{
    doc.select(&format!("[{attr}]"))
        .iter()
        .filter(|el| el.attr(attr).is_some_and(|value| predicate(&value)))
        .collect()
}

/// The `<label>` whose `for` attribute references `target_id`.
#[must_use]
pub fn label_for<'a>(doc: &'a Document, target_id: &str) -> Option<Selection<'a>> {
    get_elements_by_tag_name(doc, "label")
        .iter()
        .find(|label| label.attr("for").is_some_and(|reference| &*reference == target_id))
}

/// Flatten the text below `sel` into one whitespace-joined string.
///
/// Every text run is whitespace-collapsed and joined to its neighbours with a
/// single space, whatever element boundaries separate them. Text inside
/// [`NON_VISIBLE_TAGS`] is skipped unless `include_hidden` is set.
#[must_use]
pub fn rendered_text(sel: &Selection, include_hidden: bool) -> String {
    let mut out = String::new();
    for node in sel.nodes() {
        push_rendered(&Selection::from(node.clone()), include_hidden, &mut out);
    }
    out
}

fn push_rendered(sel: &Selection, include_hidden: bool, out: &mut String) {
    let Some(node) = sel.nodes().first() else {
        return;
    };

    for child in node.children() {
        if child.is_text() {
            for word in child.text().split_whitespace() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(word);
            }
        } else if child.is_element() {
            let el = Selection::from(child);
            let tag = tag_name(&el).unwrap_or_default();
            if !include_hidden && NON_VISIBLE_TAGS.contains(&tag.as_str()) {
                continue;
            }
            push_rendered(&el, include_hidden, out);
        }
    }
}

/// Parse HTML into a document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_access() {
        let doc = parse(r#"<input id="news" class="opt in" type="checkbox" checked>"#);
        let input = doc.select("input");

        assert_eq!(id(&input), Some("news".to_string()));
        assert_eq!(class_name(&input), Some("opt in".to_string()));
        assert_eq!(get_attribute(&input, "type"), Some("checkbox".to_string()));
        assert!(has_attribute(&input, "checked"));
        assert!(!has_attribute(&input, "disabled"));
    }

    #[test]
    fn test_tag_name_is_lowercase() {
        let doc = parse("<DIV id='x'>hi</DIV>");
        assert_eq!(tag_name(&doc.select("#x")), Some("div".to_string()));
    }

    #[test]
    fn test_find_by_attribute() {
        let doc = parse(
            r#"<span style="text-decoration: line-through">$5</span>
               <span style="color: red">$6</span>
               <span>$7</span>"#,
        );
        let struck = find_by_attribute(&doc, "style", |s| s.contains("line-through"));
        assert_eq!(struck.len(), 1);
        assert_eq!(text_content(&struck[0]).to_string(), "$5");
    }

    #[test]
    fn test_label_for() {
        let doc = parse(
            r#"<label for="other">Other</label>
               <label for="cb">Subscribe</label>
               <input type="checkbox" id="cb">"#,
        );
        let label = label_for(&doc, "cb");
        assert_eq!(label.map(|l| normalized_text(&l)), Some("Subscribe".to_string()));
        assert!(label_for(&doc, "none").is_none());
    }

    #[test]
    fn test_parent_text() {
        let doc = parse(r#"<div><input type="checkbox"> Add gift wrap</div>"#);
        let input = doc.select("input");
        assert_eq!(normalized_text(&parent(&input)), "Add gift wrap");
    }

    #[test]
    fn test_rendered_text_flattens_blocks_and_skips_scripts() {
        let doc = parse(
            r#"<body><p>Free   shipping</p><script>var total = 1;</script>
               <div>Order <b>total</b></div></body>"#,
        );
        let text = rendered_text(&doc.select("body"), false);
        assert_eq!(text, "Free shipping Order total");

        let with_scripts = rendered_text(&doc.select("body"), true);
        assert!(with_scripts.contains("var total = 1;"));
    }

    #[test]
    fn test_rendered_text_keeps_inline_runs_together() {
        let doc = parse("<p>Only <span>3</span> left</p>");
        assert_eq!(rendered_text(&doc.select("p"), false), "Only 3 left");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }
}
