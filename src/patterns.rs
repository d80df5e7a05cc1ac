//! Compiled regex patterns and CSS selectors for the structural detectors.
//!
//! Locale-dependent copy lives in the [`PatternRegistry`](crate::PatternRegistry);
//! this module only holds markup heuristics that do not depend on language.
//! Patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Strikethrough Price Heuristics
// =============================================================================

/// Inline style declaring a line-through decoration.
/// Matches `text-decoration: line-through`, the shorthand with extra values,
/// and the occasional `linethrough` typo.
pub static LINE_THROUGH_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)line-?through").expect("LINE_THROUGH_STYLE regex"));

/// Elements that mark text as deleted or no longer accurate.
pub const SEMANTIC_STRIKE_SELECTOR: &str = "del, s, strike";

/// Class names shops use for the crossed-out reference price.
pub const STRUCK_PRICE_CLASS_SELECTOR: &str = ".old-price, .price-del, .strike-price";

// =============================================================================
// Countdown Heuristics
// =============================================================================

/// Class names of countdown widgets (`countdown-banner`, `deal-timer`, ...).
pub static TIMER_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)countdown|timer").expect("TIMER_CLASS regex"));

// =============================================================================
// Evidence
// =============================================================================

/// Longest evidence snippet kept for explanations (characters).
pub const EVIDENCE_SNIPPET_CHARS: usize = 60;
