//! Character decoding for captured page bytes.
//!
//! Captured markup is usually UTF-8, but older shops still declare legacy
//! charsets. Decoding order: byte-order mark, `<meta charset>`,
//! `<meta http-equiv="Content-Type">`, then UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Encoding declared by `bytes`, defaulting to UTF-8.
///
/// A meta-declared UTF-16 label maps to UTF-8; only a BOM selects UTF-16.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    [&*CONTENT_TYPE_CHARSET_RE, &*CHARSET_META_RE]
        .into_iter()
        .filter_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode page bytes to text; undecodable sequences become U+FFFD.
#[must_use]
pub fn decode_markup(bytes: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(bytes);
    let (text, _used, _had_errors) = encoding.decode(bytes);
    text
}
