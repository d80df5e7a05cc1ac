//! Category detectors.
//!
//! Every category is decided by exactly one [`Detector`], picked from the
//! registration table in [`Category::detector`]. Text detectors match the
//! visible text against the category's pattern set; structural detectors
//! inspect the parsed markup and use their pattern set for the text of the
//! elements they select.
//!
//! A detector returns `Some(evidence)` when its category is present, where
//! the evidence names the pattern or element that triggered it.

pub mod countdown;
pub mod optin;
pub mod price;
pub mod text;

use crate::category::Category;
use crate::dom::collapse_whitespace;
use crate::locale::Locale;
use crate::options::Options;
use crate::page::Page;
use crate::patterns::EVIDENCE_SNIPPET_CHARS;
use crate::registry::PatternRegistry;

/// How a category is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    /// Match the page's visible text against the category pattern set.
    ///
    /// Non-localized detectors always use the default-locale set.
    Text { localized: bool },
    /// Inspect the markup structure.
    Structural(StructuralCheck),
}

/// Structural detector shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralCheck {
    /// `del`/`s`/`strike` elements holding a price.
    SemanticStrikethrough,
    /// Inline `line-through` styles and struck-price class names holding a price.
    StyledStrikethrough,
    /// Checked opt-in checkboxes.
    PrecheckedOptin,
    /// Clock-shaped text or countdown widgets.
    Countdown,
}

/// Everything a detector may look at for one page.
pub(crate) struct DetectionContext<'a> {
    pub page: &'a Page,
    pub locale: Locale,
    pub registry: &'a PatternRegistry,
    pub options: &'a Options,
}

impl Detector {
    /// Run this detector for `category`; `Some(evidence)` when present.
    pub(crate) fn run(self, category: Category, ctx: &DetectionContext<'_>) -> Option<String> {
        match self {
            Detector::Text { localized } => {
                let locale = if localized { ctx.locale } else { Locale::DEFAULT };
                let patterns = ctx.registry.resolve(category, locale);
                text::first_match(ctx.page.visible_text(), patterns)
                    .map(|source| format!("text matched `{source}`"))
            }
            Detector::Structural(check) => {
                let patterns = ctx.registry.resolve(category, ctx.locale);
                let doc = ctx.page.document();
                match check {
                    StructuralCheck::SemanticStrikethrough => price::semantic_strikethrough_price(doc, patterns),
                    StructuralCheck::StyledStrikethrough => price::styled_strikethrough_price(
                        doc,
                        patterns,
                        ctx.options.require_currency_for_price_classes,
                    ),
                    StructuralCheck::PrecheckedOptin => {
                        optin::prechecked_optin(doc, patterns, ctx.options.label_parent_fallback)
                    }
                    StructuralCheck::Countdown => {
                        countdown::countdown_timer(ctx.page.visible_text(), doc, patterns)
                    }
                }
            }
        }
    }
}

/// Whitespace-collapsed text cut to [`EVIDENCE_SNIPPET_CHARS`].
pub(crate) fn snippet(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= EVIDENCE_SNIPPET_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(EVIDENCE_SNIPPET_CHARS).collect();
    cut.push('…');
    cut
}
