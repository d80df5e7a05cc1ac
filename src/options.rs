//! Configuration options for page classification.
//!
//! The `Options` struct tunes how markup is flattened and how strictly the
//! structural detectors qualify their candidates. Pattern data is configured
//! separately through [`PatternRegistry`](crate::PatternRegistry).

/// Default upper bound on accepted markup size (20 MiB).
pub const DEFAULT_MAX_MARKUP_BYTES: usize = 20 * 1024 * 1024;

/// Configuration options for classification.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_darkpatterns::Options;
///
/// let options = Options {
///     label_parent_fallback: false,
///     ..Options::default()
/// };
/// assert!(!options.include_script_text);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Keep the text of `script`, `style`, `noscript` and `template`
    /// elements in the visible text.
    ///
    /// Default: `false`
    pub include_script_text: bool,

    /// Fall back to the checkbox's parent element text when no
    /// `<label for=...>` resolves for a pre-checked checkbox.
    ///
    /// Default: `true`
    pub label_parent_fallback: bool,

    /// Require a currency amount inside elements that are flagged only by a
    /// struck-price class name (`old-price`, `price-del`, `strike-price`).
    ///
    /// When `false`, the class name alone qualifies the element.
    ///
    /// Default: `true`
    pub require_currency_for_price_classes: bool,

    /// Reject markup larger than this many bytes as malformed input.
    ///
    /// Default: `Some(20 MiB)`
    pub max_markup_bytes: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_script_text: false,
            label_parent_fallback: true,
            require_currency_for_price_classes: true,
            max_markup_bytes: Some(DEFAULT_MAX_MARKUP_BYTES),
        }
    }
}
