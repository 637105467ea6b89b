//! Author resolution with a run-scoped cache
//!
//! Each author page is fetched the first time its author is named on a quote
//! and never again during the same run. The cache is owned by the resolver
//! and handed back to the caller when the crawl finishes.

use crate::crawler::parser::parse_author_page;
use crate::crawler::Fetcher;
use crate::records::AuthorCache;
use crate::{ParseError, RippleError};
use scraper::Html;
use url::Url;

/// Resolves author names to cached [`Author`](crate::Author) records
pub struct AuthorResolver<'a, F: ?Sized> {
    fetcher: &'a F,
    base_url: &'a Url,
    cache: AuthorCache,
    pages_fetched: u64,
    cache_hits: u64,
}

impl<'a, F: Fetcher + ?Sized> AuthorResolver<'a, F> {
    /// Creates a resolver with an empty cache
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Used for author pages on cache misses
    /// * `base_url` - Author links are joined onto this URL
    pub fn new(fetcher: &'a F, base_url: &'a Url) -> Self {
        Self::with_cache(fetcher, base_url, AuthorCache::new())
    }

    /// Creates a resolver around an existing cache
    pub fn with_cache(fetcher: &'a F, base_url: &'a Url, cache: AuthorCache) -> Self {
        Self {
            fetcher,
            base_url,
            cache,
            pages_fetched: 0,
            cache_hits: 0,
        }
    }

    /// Ensures the author `name` is cached
    ///
    /// # Algorithm
    ///
    /// 1. If `name` is already cached, return without any network access
    /// 2. Otherwise fetch `base_url` joined with `href`, parse the four
    ///    author fields and cache the result under `name`
    ///
    /// Nothing is cached when the fetch or the parse fails.
    pub fn resolve(&mut self, name: &str, href: &str) -> Result<(), RippleError> {
        if self.cache.contains(name) {
            tracing::debug!("Getting author {} from cache", name);
            self.cache_hits += 1;
            return Ok(());
        }

        tracing::info!("Fetching author page for {}", name);
        let url = self
            .base_url
            .join(href)
            .map_err(|source| RippleError::Parse {
                url: self.base_url.to_string(),
                source: ParseError::InvalidLink {
                    href: href.to_string(),
                    source,
                },
            })?;

        let body = self.fetcher.fetch(&url)?;
        self.pages_fetched += 1;

        let document = Html::parse_document(&body);
        let author =
            parse_author_page(&document.root_element()).map_err(|source| RippleError::Parse {
                url: url.to_string(),
                source,
            })?;

        self.cache.insert(name, author);
        Ok(())
    }

    /// The authors resolved so far
    pub fn cache(&self) -> &AuthorCache {
        &self.cache
    }

    /// Number of author pages fetched
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Number of resolutions answered from the cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Consumes the resolver, returning its cache
    pub fn into_cache(self) -> AuthorCache {
        self.cache
    }
}
