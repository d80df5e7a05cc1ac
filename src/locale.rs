//! Content language of a page.
//!
//! Only two locales are supported. Anything else, including a missing
//! `lang` attribute, resolves to [`Locale::DEFAULT`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::{self, Document};
use crate::error::Error;

/// Supported content locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Dutch.
    Nl,
}

impl Locale {
    /// Locale used when a page declares nothing recognizable.
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Nl];

    /// Two-letter code as written in output rows.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
        }
    }

    /// Resolve a language tag such as `nl-BE` or `EN_us`.
    ///
    /// Prefix match on the case-folded tag; `None` for unsupported tags.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Locale> {
        let tag = tag.trim().to_ascii_lowercase();
        Locale::ALL.into_iter().find(|locale| tag.starts_with(locale.code()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Configuration(format!("unsupported locale `{s}`")))
    }
}

/// Detect the page locale from the root element's `lang` attribute.
///
/// Total: always returns a supported locale.
#[must_use]
pub fn detect_locale(doc: &Document) -> Locale {
    let declared = dom::get_attribute(&doc.select("html"), "lang");
    let locale = declared
        .as_deref()
        .and_then(Locale::from_lang_tag)
        .unwrap_or(Locale::DEFAULT);
    debug!(declared = declared.as_deref().unwrap_or(""), %locale, "resolved page locale");
    locale
}
