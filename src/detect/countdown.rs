//! Countdown timer detection: clock-shaped text OR a countdown widget class.

use crate::detect::{snippet, text};
use crate::dom::{self, Document};
use crate::patterns::TIMER_CLASS;
use crate::registry::PatternSet;

/// Clock text in `visible_text`, or any element whose class names a timer.
#[must_use]
pub fn countdown_timer(visible_text: &str, doc: &Document, clock: &PatternSet) -> Option<String> {
    if let Some(source) = text::first_match(visible_text, clock) {
        return Some(format!("clock text matched `{source}`"));
    }

    dom::find_by_attribute(doc, "class", |class| TIMER_CLASS.is_match(class))
        .first()
        .map(|el| format!("element class `{}`", snippet(&dom::class_name(el).unwrap_or_default())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::locale::Locale;
    use crate::registry::PatternRegistry;

    fn clock() -> PatternSet {
        PatternRegistry::builtin()
            .expect("builtin patterns load")
            .resolve(Category::CountdownTimer, Locale::En)
            .clone()
    }

    #[test]
    fn clock_text_alone_is_enough() {
        let doc = dom::parse("<p>Offer ends in 23:59:59</p>");
        let evidence = countdown_timer("Offer ends in 23:59:59", &doc, &clock());
        assert!(evidence.is_some_and(|e| e.starts_with("clock text")));
    }

    #[test]
    fn timer_class_alone_is_enough() {
        let doc = dom::parse(r#"<div class="countdown-banner"></div>"#);
        let evidence = countdown_timer("", &doc, &clock());
        assert_eq!(evidence.as_deref(), Some("element class `countdown-banner`"));
    }

    #[test]
    fn plain_times_without_seconds_do_not_count() {
        let doc = dom::parse("<p>Open 09:00 - 17:30</p>");
        assert!(countdown_timer("Open 09:00 - 17:30", &doc, &clock()).is_none());
    }
}
