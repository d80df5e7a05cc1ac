//! Error types for rs-darkpatterns.
//!
//! Configuration problems surface while building a [`PatternRegistry`](crate::PatternRegistry);
//! the only per-page failure is [`Error::MalformedInput`].

/// Error type for registry construction and page classification.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markup could not be turned into a structural view.
    #[error("Malformed page markup: {0}")]
    MalformedInput(String),

    /// Pattern configuration is incomplete or inconsistent.
    #[error("Pattern configuration error: {0}")]
    Configuration(String),

    /// A configured pattern is not a valid regular expression.
    #[error("Invalid pattern for {category}/{locale}: {source}")]
    InvalidPattern {
        category: String,
        locale: String,
        #[source]
        source: regex::Error,
    },

    /// Pattern configuration file is not valid JSON.
    #[error("Pattern configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading configuration or captured markup failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, Error>;
