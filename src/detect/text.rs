//! Generic text matcher.

use crate::registry::PatternSet;

/// True iff any pattern in `patterns` matches anywhere in `text`.
#[must_use]
pub fn matches_any(text: &str, patterns: &PatternSet) -> bool {
    patterns.is_match(text)
}

/// Source of the first matching pattern; evaluation stops there.
#[must_use]
pub fn first_match<'p>(text: &str, patterns: &'p PatternSet) -> Option<&'p str> {
    patterns.first_match(text)
}
