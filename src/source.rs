//! Page sources: where captured markup comes from.
//!
//! Fetching and rendering live pages belongs to a browser-automation layer
//! outside this crate. The classifier only needs the [`PageSource`]
//! capability; [`DirectorySource`] serves pages that were captured to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

use crate::encoding::decode_markup;

/// Why a page could not be provided.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    /// Nothing was captured for this URL.
    #[error("no captured page for {url} (looked for {})", path.display())]
    NotFound { url: String, path: PathBuf },

    /// The capture exists but could not be read.
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Capability to obtain page markup for a URL.
pub trait PageSource {
    /// Markup for `url`. Implementations never retry.
    fn fetch(&self, url: &str) -> Result<String, FetchFailure>;
}

/// Serves captured pages stored as files below a root directory.
///
/// `https://shop.example/p/sneaker-42?ref=x` is looked up as
/// `shop.example_p_sneaker-42.html`; anything that is not an absolute
/// http(s) URL is treated as a path relative to the root.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the capture of `url`.
    #[must_use]
    pub fn path_for(&self, url: &str) -> PathBuf {
        match capture_file_name(url) {
            Some(name) => self.root.join(name),
            None => self.root.join(url.trim()),
        }
    }
}

impl PageSource for DirectorySource {
    fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        let path = self.path_for(url);
        match fs::read(&path) {
            Ok(bytes) => Ok(decode_markup(&bytes).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(FetchFailure::NotFound {
                url: url.to_string(),
                path,
            }),
            Err(source) => Err(FetchFailure::Io { path, source }),
        }
    }
}

/// Flat file name for an http(s) URL; `None` for anything else.
#[must_use]
pub fn capture_file_name(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;

    let mut name = host.to_ascii_lowercase();
    for segment in parsed.path().split('/').filter(|s| !s.is_empty()) {
        name.push('_');
        name.extend(segment.chars().map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '.') {
                c
            } else {
                '_'
            }
        }));
    }
    name.push_str(".html");
    Some(name)
}

/// Registrable-looking domain of an http(s) URL, without a leading `www.`.
#[must_use]
pub fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    Some(host.strip_prefix("www.").map_or_else(|| host.clone(), str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_file_names() {
        assert_eq!(
            capture_file_name("https://Shop.Example/p/sneaker-42?ref=x").as_deref(),
            Some("shop.example_p_sneaker-42.html")
        );
        assert_eq!(capture_file_name("http://a.nl/").as_deref(), Some("a.nl.html"));
        assert_eq!(capture_file_name("pages/one.html"), None);
        assert_eq!(capture_file_name("ftp://a.nl/x"), None);
    }

    #[test]
    fn relative_paths_resolve_under_root() {
        let source = DirectorySource::new("/captures");
        assert_eq!(source.path_for("nl/one.html"), PathBuf::from("/captures/nl/one.html"));
        assert_eq!(
            source.path_for("https://www.bol.com/p/9"),
            PathBuf::from("/captures/www.bol.com_p_9.html")
        );
    }

    #[test]
    fn missing_capture_is_not_found() {
        let source = DirectorySource::new(std::env::temp_dir().join("rs-darkpatterns-no-such-dir"));
        let result = source.fetch("https://shop.example/p/1");
        assert!(matches!(result, Err(FetchFailure::NotFound { .. })));
    }

    #[test]
    fn reads_and_decodes_capture() {
        let root = std::env::temp_dir().join(format!("rs-darkpatterns-source-{}", std::process::id()));
        fs::create_dir_all(&root).expect("create temp dir");
        fs::write(root.join("shop.example_p_1.html"), b"<meta charset=\"windows-1252\"><p>\x80 9</p>")
            .expect("write capture");

        let markup = DirectorySource::new(&root).fetch("https://shop.example/p/1");
        assert!(markup.is_ok_and(|m| m.contains("€ 9")));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn domain_strips_www() {
        assert_eq!(domain_of("https://www.Zalando.nl/x").as_deref(), Some("zalando.nl"));
        assert_eq!(domain_of("not a url"), None);
    }
}
