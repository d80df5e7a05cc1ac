//! Page classification: runs every category detector over one page and
//! assembles the [`DetectionRecord`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, debug_span};

use crate::category::Category;
use crate::detect::DetectionContext;
use crate::error::Result;
use crate::locale::{detect_locale, Locale};
use crate::options::Options;
use crate::page::Page;
use crate::record::{CategoryFlags, DetectionRecord};
use crate::registry::PatternRegistry;

/// Outcome of one category on one page, with the evidence that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub category: Category,
    /// Pattern or element that triggered the category; `None` when absent.
    pub evidence: Option<String>,
}

impl Finding {
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.evidence.is_some()
    }
}

/// Dark-pattern classifier over an injected, immutable pattern registry.
///
/// Cheap to clone and safe to share between threads; every call works on
/// its own parsed page.
///
/// # Example
///
/// ```rust
/// use rs_darkpatterns::{Category, Classifier, PatternRegistry};
///
/// let classifier = Classifier::new(PatternRegistry::builtin()?);
/// let record = classifier.classify(
///     "shop.example",
///     "<html lang=\"en\"><body><p>Hurry, only 2 left!</p></body></html>",
/// )?;
/// assert!(record.flag(Category::Urgency));
/// assert_eq!(record.total_patterns(), 1);
/// # Ok::<(), rs_darkpatterns::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<PatternRegistry>,
    options: Options,
}

impl Classifier {
    /// Classifier with default options.
    pub fn new(registry: impl Into<Arc<PatternRegistry>>) -> Self {
        Self::with_options(registry, Options::default())
    }

    pub fn with_options(registry: impl Into<Arc<PatternRegistry>>, options: Options) -> Self {
        Self {
            registry: registry.into(),
            options,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Classify one page, stamping the record with the current time.
    pub fn classify(&self, domain: &str, markup: &str) -> Result<DetectionRecord> {
        self.classify_at(domain, markup, Utc::now())
    }

    /// Classify one page with an explicit capture timestamp.
    ///
    /// Identical markup and registry always give identical records here.
    pub fn classify_at(&self, domain: &str, markup: &str, captured_at: DateTime<Utc>) -> Result<DetectionRecord> {
        let (locale, findings) = self.run(domain, markup)?;
        let flags = CategoryFlags::from_fn(|category| findings[category.index()].is_present());
        let record = DetectionRecord::new(domain, locale, flags, captured_at);
        debug!(domain, %locale, total = record.total_patterns(), "classified page");
        Ok(record)
    }

    /// Per-category findings with evidence, in record order.
    pub fn explain(&self, markup: &str) -> Result<Vec<Finding>> {
        self.run("", markup).map(|(_, findings)| findings)
    }

    fn run(&self, domain: &str, markup: &str) -> Result<(Locale, Vec<Finding>)> {
        let _span = debug_span!("classify", domain).entered();

        let page = Page::parse_with_options(markup, &self.options)?;
        let locale = detect_locale(page.document());
        let ctx = DetectionContext {
            page: &page,
            locale,
            registry: &self.registry,
            options: &self.options,
        };

        let findings = Category::ALL
            .into_iter()
            .map(|category| {
                let evidence = category.detector().run(category, &ctx);
                if let Some(reason) = &evidence {
                    debug!(category = category.name(), reason = reason.as_str(), "pattern present");
                }
                Finding { category, evidence }
            })
            .collect();

        Ok((locale, findings))
    }
}
