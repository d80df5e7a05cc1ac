//! Pre-checked opt-in detection.
//!
//! A checkbox qualifies when its checked state is explicit in the markup and
//! the text that labels it matches the locale's opt-in keywords.

use crate::detect::{snippet, text};
use crate::dom::{self, Document, Selection};
use crate::registry::PatternSet;

/// Where a checkbox label was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// `<label for="...">` referencing the checkbox `id`.
    ForReference,
    /// The checkbox's immediate parent element.
    Parent,
}

/// Whether `input` is a checkbox input (`type` compared case-insensitively).
#[must_use]
pub fn is_checkbox(input: &Selection) -> bool {
    dom::get_attribute(input, "type").is_some_and(|kind| kind.trim().eq_ignore_ascii_case("checkbox"))
}

/// Whether the checked state is set explicitly in the markup.
///
/// The `checked` attribute is present, in boolean form or with a spelled-out
/// value (`checked="checked"`, `checked="true"`). `aria-checked` is ignored:
/// on a native input it does not carry the state.
#[must_use]
pub fn is_checked(input: &Selection) -> bool {
    dom::has_attribute(input, "checked")
}

/// Resolve the text that labels `checkbox`.
///
/// Ordered fallback: a non-blank `<label for=id>`, then (if
/// `parent_fallback`) the text of the immediate parent element.
#[must_use]
pub fn resolve_label(doc: &Document, checkbox: &Selection, parent_fallback: bool) -> Option<(LabelSource, String)> {
    let by_reference = dom::id(checkbox)
        .filter(|id| !id.trim().is_empty())
        .and_then(|id| dom::label_for(doc, &id))
        .map(|label| dom::normalized_text(&label))
        .filter(|text| !text.is_empty());
    if let Some(text) = by_reference {
        return Some((LabelSource::ForReference, text));
    }

    if !parent_fallback {
        return None;
    }
    let parent_text = dom::normalized_text(&dom::parent(checkbox));
    (!parent_text.is_empty()).then_some((LabelSource::Parent, parent_text))
}

/// First checked checkbox whose resolved label matches `keywords`.
#[must_use]
pub fn prechecked_optin(doc: &Document, keywords: &PatternSet, parent_fallback: bool) -> Option<String> {
    dom::get_elements_by_tag_name(doc, "input")
        .iter()
        .filter(|input| is_checkbox(input) && is_checked(input))
        .find_map(|checkbox| {
            let (source, label) = resolve_label(doc, &checkbox, parent_fallback)?;
            let keyword = text::first_match(&label, keywords)?;
            let via = match source {
                LabelSource::ForReference => "label",
                LabelSource::Parent => "parent text",
            };
            Some(format!("checked checkbox {via} `{}` matched `{keyword}`", snippet(&label)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::locale::Locale;
    use crate::registry::PatternRegistry;

    fn keywords(locale: Locale) -> PatternSet {
        PatternRegistry::builtin()
            .expect("builtin patterns load")
            .resolve(Category::PrecheckedOptin, locale)
            .clone()
    }

    fn first_input(doc: &Document) -> Selection<'_> {
        doc.select("input").first()
    }

    #[test]
    fn checked_states() {
        let doc = dom::parse(
            r#"<input id="a" type="checkbox" checked>
               <input id="b" type="checkbox" checked="checked">
               <input id="c" type="checkbox" checked="yes">
               <input id="d" type="checkbox">"#,
        );
        let state = |id: &str| is_checked(&doc.select(&format!("#{id}")));
        assert!(state("a"));
        assert!(state("b"));
        assert!(state("c"));
        assert!(!state("d"));
    }

    #[test]
    fn aria_checked_alone_is_not_checked() {
        let doc = dom::parse(r#"<label><input type="checkbox" aria-checked="true"> Subscribe</label>"#);
        assert!(!is_checked(&first_input(&doc)));
        assert!(prechecked_optin(&doc, &keywords(Locale::En), true).is_none());
    }

    #[test]
    fn checkbox_type_is_case_insensitive() {
        let doc = dom::parse(r#"<input type="CheckBox"><input type="radio">"#);
        let inputs: Vec<_> = doc.select("input").iter().collect();
        assert!(is_checkbox(&inputs[0]));
        assert!(!is_checkbox(&inputs[1]));
    }

    #[test]
    fn label_for_reference_is_preferred() {
        let doc = dom::parse(
            r#"<div>Parent text <input type="checkbox" id="nl" checked></div>
               <label for="nl">Sign up for the newsletter</label>"#,
        );
        let resolved = resolve_label(&doc, &first_input(&doc), true);
        assert_eq!(
            resolved,
            Some((LabelSource::ForReference, "Sign up for the newsletter".to_string()))
        );
    }

    #[test]
    fn blank_label_falls_back_to_parent() {
        let doc = dom::parse(
            r#"<p><input type="checkbox" id="w" checked> Add 2-year warranty</p>
               <label for="w">  </label>"#,
        );
        let resolved = resolve_label(&doc, &first_input(&doc), true);
        assert_eq!(resolved, Some((LabelSource::Parent, "Add 2-year warranty".to_string())));
    }

    #[test]
    fn wrapping_label_is_the_parent() {
        let doc = dom::parse(r#"<label><input type="checkbox" checked> Gift wrap this order</label>"#);
        let resolved = resolve_label(&doc, &first_input(&doc), true);
        assert_eq!(resolved, Some((LabelSource::Parent, "Gift wrap this order".to_string())));
    }

    #[test]
    fn parent_fallback_can_be_disabled() {
        let doc = dom::parse(r#"<p><input type="checkbox" checked> Subscribe</p>"#);
        assert_eq!(resolve_label(&doc, &first_input(&doc), false), None);
    }

    #[test]
    fn english_newsletter_is_detected() {
        let doc = dom::parse(
            r#"<input type="checkbox" id="n" checked><label for="n">Subscribe to our newsletter</label>"#,
        );
        assert!(prechecked_optin(&doc, &keywords(Locale::En), true).is_some());
    }

    #[test]
    fn dutch_newsletter_is_detected() {
        let doc = dom::parse(
            r#"<input type="checkbox" id="n" checked><label for="n">Abonneer op onze nieuwsbrief</label>"#,
        );
        assert!(prechecked_optin(&doc, &keywords(Locale::Nl), true).is_some());
    }

    #[test]
    fn remember_me_is_not_an_optin() {
        let doc = dom::parse(r#"<input type="checkbox" id="r" checked><label for="r">Remember me</label>"#);
        assert!(prechecked_optin(&doc, &keywords(Locale::En), true).is_none());
    }

    #[test]
    fn unchecked_newsletter_is_not_flagged() {
        let doc = dom::parse(r#"<label><input type="checkbox"> Subscribe to our newsletter</label>"#);
        assert!(prechecked_optin(&doc, &keywords(Locale::En), true).is_none());
    }

    #[test]
    fn any_matching_checkbox_is_enough() {
        let doc = dom::parse(
            r#"<label><input type="checkbox" checked> Remember me</label>
               <label><input type="checkbox" checked> Add gift wrap</label>"#,
        );
        let evidence = prechecked_optin(&doc, &keywords(Locale::En), true);
        assert!(evidence.is_some_and(|e| e.contains("gift wrap")));
    }
}
