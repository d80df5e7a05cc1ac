//! # rs-darkpatterns
//!
//! Rule-based detection of dark patterns on captured e-commerce product pages.
//!
//! Each page yields one [`DetectionRecord`]: a flag for each of the 14
//! categories of the fixed taxonomy, the detected content language and the
//! number of categories present. Every flag is decided by an auditable rule,
//! either a locale-aware regular expression over the page's visible text or
//! a structural check on the markup (struck prices, pre-checked opt-ins,
//! countdown widgets).
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_darkpatterns::{classify, Category};
//!
//! let html = r#"<html lang="en"><body>
//!   <p>Now $29.99 <del>$49.99</del></p>
//!   <div class="countdown-banner">Deal ends soon</div>
//! </body></html>"#;
//!
//! let record = classify("shop.example", html)?;
//! assert!(record.flag(Category::PriceAnchoring));
//! assert!(record.flag(Category::CountdownTimer));
//! assert_eq!(record.total_patterns(), 2);
//! # Ok::<(), rs_darkpatterns::Error>(())
//! ```
//!
//! ## Custom patterns
//!
//! [`classify`] uses the pattern data bundled with the crate. To use your own,
//! build a [`PatternRegistry`] (from JSON or with its builder) and hand it to a
//! [`Classifier`].

mod error;
mod options;
mod page;
mod patterns;

/// DOM helpers shared by the structural detectors.
pub mod dom;

/// The fixed category taxonomy and its detector registration table.
pub mod category;

/// Page locale detection.
pub mod locale;

/// Pattern sets per category and locale.
pub mod registry;

/// Text and structural detectors.
pub mod detect;

/// Aggregation of detector outcomes into records.
pub mod classify;

/// Output records and their tabular shape.
pub mod record;

/// Charset detection for captured page bytes.
pub mod encoding;

/// Sources of captured page markup.
pub mod source;

use std::sync::LazyLock;

// Public API - re-exports
pub use category::{Category, CATEGORY_COUNT};
pub use classify::{Classifier, Finding};
pub use error::{Error, Result};
pub use locale::Locale;
pub use options::Options;
pub use page::Page;
pub use record::{CategoryFlags, DetectionRecord};
pub use registry::{PatternRegistry, PatternSet, RegistryBuilder};
pub use source::{DirectorySource, FetchFailure, PageSource};

/// Classifier over the bundled patterns, built on first use.
static BUILTIN_CLASSIFIER: LazyLock<std::result::Result<Classifier, String>> =
    LazyLock::new(|| PatternRegistry::builtin().map(Classifier::new).map_err(|err| err.to_string()));

fn builtin_classifier() -> Result<&'static Classifier> {
    BUILTIN_CLASSIFIER
        .as_ref()
        .map_err(|message| Error::Configuration(message.clone()))
}

/// Classifies one page with the bundled patterns and default options.
///
/// # Arguments
///
/// * `domain` - Site the page belongs to, copied into the record
/// * `markup` - Rendered page markup
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when the markup cannot be parsed into a
/// structural view (for example, an empty string). No partial record is
/// produced.
pub fn classify(domain: &str, markup: &str) -> Result<DetectionRecord> {
    builtin_classifier()?.classify(domain, markup)
}

/// Classifies raw page bytes, decoding the declared charset first.
///
/// # Example
///
/// ```rust
/// use rs_darkpatterns::{classify_bytes, Category};
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body><s>\x80 80</s></body></html>";
/// let record = classify_bytes("shop.example", html)?;
/// assert!(record.flag(Category::PriceAnchoring));
/// # Ok::<(), rs_darkpatterns::Error>(())
/// ```
pub fn classify_bytes(domain: &str, markup: &[u8]) -> Result<DetectionRecord> {
    let text = encoding::decode_markup(markup);
    classify(domain, &text)
}
