//! Page text extraction.
//!
//! A [`Page`] is the per-page working set shared by every detector: the parsed
//! structural view and the flattened visible text, both derived exactly once.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;

/// Any start tag, end tag, comment or doctype.
#[allow(clippy::expect_used)]
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[!/?]?[A-Za-z]").expect("MARKUP_TAG regex"));

/// Parsed page markup plus its visible text.
pub struct Page {
    document: Document,
    visible_text: String,
}

impl Page {
    /// Parse markup with default options.
    pub fn parse(markup: &str) -> Result<Self> {
        Self::parse_with_options(markup, &Options::default())
    }

    /// Parse markup into a structural view and render its visible text.
    ///
    /// Fails with [`Error::MalformedInput`] for blank markup, markup without a
    /// single tag, or markup above `options.max_markup_bytes`.
    pub fn parse_with_options(markup: &str, options: &Options) -> Result<Self> {
        if let Err(err) = check_markup(markup, options) {
            warn!(bytes = markup.len(), "rejecting page markup: {err}");
            return Err(err);
        }

        let document = dom::parse(markup);
        let visible_text = dom::rendered_text(&document.select("html"), options.include_script_text);

        Ok(Self {
            document,
            visible_text,
        })
    }

    /// Structural view of the page.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Flattened visible text of the page.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }
}

fn check_markup(markup: &str, options: &Options) -> Result<()> {
    if markup.trim().is_empty() {
        return Err(Error::MalformedInput("markup is empty".to_string()));
    }
    if let Some(limit) = options.max_markup_bytes {
        if markup.len() > limit {
            return Err(Error::MalformedInput(format!(
                "markup is {} bytes, limit is {limit}",
                markup.len()
            )));
        }
    }
    if !MARKUP_TAG.is_match(markup) {
        return Err(Error::MalformedInput("markup contains no elements".to_string()));
    }
    Ok(())
}
