use regex::{Regex, RegexBuilder};

use crate::category::Category;
use crate::error::{Error, Result};
use crate::locale::Locale;

/// Ordered, case-insensitive patterns for one (category, locale) pair.
#[derive(Debug, Clone)]
pub struct PatternSet {
    sources: Vec<String>,
    regexes: Vec<Regex>,
}

impl PatternSet {
    pub(crate) fn compile(category: Category, locale: Locale, sources: Vec<String>) -> Result<Self> {
        let regexes = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| Error::InvalidPattern {
                        category: category.name().to_string(),
                        locale: locale.code().to_string(),
                        source: err,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { sources, regexes })
    }

    /// Pattern sources in evaluation order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    /// True iff any pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// Source of the first pattern (in order) that matches `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.regexes
            .iter()
            .zip(&self.sources)
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, source)| source.as_str())
    }
}

impl PartialEq for PatternSet {
    fn eq(&self, other: &Self) -> bool {
        self.sources == other.sources
    }
}

impl Eq for PatternSet {}
