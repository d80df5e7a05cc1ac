//! Pattern registry: (category, locale) → ordered, compiled pattern set.
//!
//! The registry is an immutable value built once and injected into the
//! [`Classifier`](crate::Classifier). Every category must carry a set for
//! [`Locale::DEFAULT`]; locales without a dedicated set fall back to it.

mod pattern_set;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::debug;

pub use self::pattern_set::PatternSet;
use crate::category::Category;
use crate::error::{Error, Result};
use crate::locale::Locale;

/// Pattern data shipped with the crate.
const BUILTIN_PATTERNS_JSON: &str = include_str!("../../data/patterns.json");

/// Pattern sets of one category.
#[derive(Debug, Clone)]
struct CategoryPatterns {
    default: PatternSet,
    localized: HashMap<Locale, PatternSet>,
}

/// Immutable mapping from (category, locale) to pattern sets.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    // Indexed by `Category::index()`.
    categories: Vec<CategoryPatterns>,
}

impl PatternRegistry {
    /// Start an empty registry builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding the pattern data embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PATTERNS_JSON)
    }

    /// Load a registry from JSON shaped as `{ category: { locale: [pattern, ...] } }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, Vec<String>>> = serde_json::from_str(json)?;

        let mut builder = Self::builder();
        for (category_key, locales) in raw {
            let category: Category = category_key.parse()?;
            for (locale_key, patterns) in locales {
                let locale: Locale = locale_key.parse()?;
                builder = builder.patterns(category, locale, patterns);
            }
        }
        builder.build()
    }

    /// Load a registry from a JSON file (see [`PatternRegistry::from_json_str`]).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading pattern registry");
        Self::from_json_str(&json)
    }

    /// Pattern set for `category` in `locale`, or the default-locale set when
    /// `locale` has no dedicated one.
    #[must_use]
    pub fn resolve(&self, category: Category, locale: Locale) -> &PatternSet {
        let entry = &self.categories[category.index()];
        entry.localized.get(&locale).unwrap_or(&entry.default)
    }

    /// Dedicated pattern set for exactly (`category`, `locale`), without fallback.
    #[must_use]
    pub fn get(&self, category: Category, locale: Locale) -> Option<&PatternSet> {
        let entry = &self.categories[category.index()];
        if locale == Locale::DEFAULT {
            Some(&entry.default)
        } else {
            entry.localized.get(&locale)
        }
    }

    /// Locales with a dedicated set for `category`, default first.
    #[must_use]
    pub fn locales(&self, category: Category) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.get(category, *locale).is_some())
            .collect()
    }
}

/// Collects raw pattern strings and validates them into a [`PatternRegistry`].
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    raw: BTreeMap<(Category, Locale), Vec<String>>,
}

impl RegistryBuilder {
    /// Set the patterns of one (category, locale) pair, replacing earlier ones.
    #[must_use]
    pub fn patterns<I, S>(mut self, category: Category, locale: Locale, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw
            .insert((category, locale), patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Compile every set and check that each category has a default-locale set.
    pub fn build(self) -> Result<PatternRegistry> {
        let mut compiled: BTreeMap<(Category, Locale), PatternSet> = BTreeMap::new();
        for ((category, locale), patterns) in self.raw {
            if patterns.is_empty() {
                return Err(Error::Configuration(format!(
                    "empty pattern set for {category}/{locale}"
                )));
            }
            compiled.insert((category, locale), PatternSet::compile(category, locale, patterns)?);
        }

        let mut categories = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let Some(default) = compiled.remove(&(category, Locale::DEFAULT)) else {
                return Err(Error::Configuration(format!(
                    "category `{category}` has no `{}` pattern set",
                    Locale::DEFAULT
                )));
            };
            let localized = Locale::ALL
                .into_iter()
                .filter(|locale| *locale != Locale::DEFAULT)
                .filter_map(|locale| compiled.remove(&(category, locale)).map(|set| (locale, set)))
                .collect();
            categories.push(CategoryPatterns { default, localized });
        }

        Ok(PatternRegistry { categories })
    }
}
