//! Quote-Ripple: a quotes-site harvester
//!
//! This crate walks the paginated listing of a quotes website, extracts every
//! quote together with its author's biography, and writes both to CSV tables.
//! Author pages are fetched at most once per run thanks to an explicit,
//! run-scoped author cache.

pub mod config;
pub mod crawler;
pub mod output;
pub mod records;

use thiserror::Error;

/// Main error type for Quote-Ripple operations
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Malformed page {url}: {source}")]
    Parse { url: String, source: ParseError },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

impl RippleError {
    /// Returns true if the run failed at the network boundary
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Returns true if a fetched page lacked an expected element
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Network failures raised by a [`crawler::Fetcher`]
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection refused for {url}")]
    Unreachable { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. }
            | Self::Timeout { url }
            | Self::Unreachable { url }
            | Self::Status { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Structural problems found while reading a fetched page
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },

    #[error("missing attribute `{attribute}` on `{selector}`")]
    MissingAttribute { selector: String, attribute: String },

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("invalid link `{href}`: {source}")]
    InvalidLink {
        href: String,
        source: ::url::ParseError,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quote-Ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for page parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, Crawler, Fetcher, HttpFetcher};
pub use records::{Author, AuthorCache, Quote};
