//! Strikethrough price detection.
//!
//! A struck element only counts when its own text carries a currency amount,
//! so `<del>Sale</del>` is ignored while `<del>$49.99</del>` is not.

use crate::detect::snippet;
use crate::dom::{self, Document, Selection};
use crate::patterns::{LINE_THROUGH_STYLE, SEMANTIC_STRIKE_SELECTOR, STRUCK_PRICE_CLASS_SELECTOR};
use crate::registry::PatternSet;

/// `del`, `s` and `strike` elements whose text holds a currency amount.
#[must_use]
pub fn semantic_strikethrough_price(doc: &Document, currency: &PatternSet) -> Option<String> {
    doc.select(SEMANTIC_STRIKE_SELECTOR)
        .iter()
        .find_map(|el| priced(&el, currency))
        .map(|(tag, price)| format!("<{tag}> holds price `{price}`"))
}

/// Elements struck through by inline style, or by a struck-price class name.
///
/// Styled candidates always need a currency amount. Class-named candidates
/// need one only when `require_currency_for_classes` is set.
#[must_use]
pub fn styled_strikethrough_price(
    doc: &Document,
    currency: &PatternSet,
    require_currency_for_classes: bool,
) -> Option<String> {
    let styled = dom::find_by_attribute(doc, "style", |style| LINE_THROUGH_STYLE.is_match(style))
        .into_iter()
        .find_map(|el| priced(&el, currency))
        .map(|(tag, price)| format!("<{tag}> styled line-through holds price `{price}`"));
    if styled.is_some() {
        return styled;
    }

    let classed = doc.select(STRUCK_PRICE_CLASS_SELECTOR);
    if require_currency_for_classes {
        classed
            .iter()
            .find_map(|el| priced(&el, currency))
            .map(|(tag, price)| format!("<{tag}> struck-price class holds price `{price}`"))
    } else {
        classed.iter().next().map(|el| {
            let class = dom::class_name(&el).unwrap_or_default();
            format!("element with struck-price class `{class}`")
        })
    }
}

/// Tag name and text of `el` when its text matches a currency pattern.
fn priced(el: &Selection, currency: &PatternSet) -> Option<(String, String)> {
    let text = dom::text_content(el);
    if !currency.is_match(&text) {
        return None;
    }
    Some((dom::tag_name(el).unwrap_or_default(), snippet(&text)))
}
