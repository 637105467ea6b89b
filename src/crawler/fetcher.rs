//! HTTP fetcher implementation
//!
//! This module is the network boundary of the crawler:
//! - The [`Fetcher`] trait the rest of the crawler depends on
//! - A blocking reqwest-backed implementation, [`HttpFetcher`]
//! - Error classification (timeouts, refused connections, non-2xx statuses)
//!
//! There is no retry logic. Any failure is returned to the caller, which
//! aborts the run.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Source of raw page content
pub trait Fetcher {
    /// Fetches `url` and returns its body as text
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Builds a blocking HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout settings
///
/// # Example
///
/// ```no_run
/// use quote_ripple::config::{HttpConfig, UserAgentConfig};
/// use quote_ripple::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        http: &HttpConfig,
    ) -> Result<Self, reqwest::Error> {
        build_http_client(user_agent, http).map(Self::new)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Maps a transport error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Unreachable { url }
    } else {
        FetchError::Request { url, source: error }
    }
}
