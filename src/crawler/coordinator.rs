//! Crawler coordinator - the sequential crawl loop
//!
//! The loop walks the listing pages in increasing page order:
//! - Page 1 is the base URL itself, page `n` is `page/<n>` under it
//! - Every quote on a page is parsed (resolving its author) and appended
//! - The loop stops after the first page without a next-page indicator
//!
//! Any fetch or parse failure aborts the crawl immediately.

use crate::crawler::parser::{extract_quotes, has_next_page, parse_quote};
use crate::crawler::resolver::AuthorResolver;
use crate::crawler::Fetcher;
use crate::output::CrawlStats;
use crate::records::{AuthorCache, Quote};
use crate::{ParseError, RippleError};
use scraper::Html;
use url::Url;

/// Crawl loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    /// Listing page `page` is next to be fetched
    Fetching { page: u32 },
    /// The last listing page has been processed
    Done,
}

/// Everything a completed crawl produced
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Quotes in page order, then in-page order
    pub quotes: Vec<Quote>,

    /// One author per distinct author name, in order of first appearance
    pub authors: AuthorCache,

    /// Counters for the run
    pub stats: CrawlStats,
}

/// Sequential crawler over the listing pages of one site
pub struct Crawler<F> {
    fetcher: F,
    base_url: Url,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a crawler starting at `base_url`
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Network boundary used for listing and author pages
    /// * `base_url` - First listing page; must end with `/`
    pub fn new(fetcher: F, base_url: Url) -> Self {
        Self { fetcher, base_url }
    }

    /// URL of listing page `page` (1-based)
    pub fn listing_url(&self, page: u32) -> Result<Url, RippleError> {
        if page <= 1 {
            return Ok(self.base_url.clone());
        }
        Ok(self.base_url.join(&format!("page/{}", page))?)
    }

    /// Runs the crawl to completion
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - Every reachable listing page was processed
    /// * `Err(RippleError)` - The first fetch or parse failure encountered
    pub fn run(&self) -> Result<CrawlOutcome, RippleError> {
        let mut resolver = AuthorResolver::new(&self.fetcher, &self.base_url);
        let mut quotes = Vec::new();
        let mut listing_pages = 0u64;
        let mut state = CrawlState::Fetching { page: 1 };

        while let CrawlState::Fetching { page } = state {
            let url = self.listing_url(page)?;
            tracing::info!("Starting parsing page #{} ({})", page, url);

            let body = self.fetcher.fetch(&url)?;
            listing_pages += 1;

            let document = Html::parse_document(&body);
            let root = document.root_element();
            let in_page = |source: ParseError| RippleError::Parse {
                url: url.to_string(),
                source,
            };

            let elements = extract_quotes(&root).map_err(in_page)?;
            tracing::debug!("Found {} quotes on page #{}", elements.len(), page);
            for element in &elements {
                quotes.push(parse_quote(element, &mut resolver, url.as_str())?);
            }

            state = if has_next_page(&root).map_err(in_page)? {
                CrawlState::Fetching { page: page + 1 }
            } else {
                CrawlState::Done
            };
        }

        let stats = CrawlStats {
            listing_pages,
            author_pages: resolver.pages_fetched(),
            cache_hits: resolver.cache_hits(),
            quotes: quotes.len() as u64,
            authors: resolver.cache().len() as u64,
        };

        Ok(CrawlOutcome {
            quotes,
            authors: resolver.into_cache(),
            stats,
        })
    }
}

/// Crawls `base_url` with `fetcher`
pub fn run_crawl<F: Fetcher>(fetcher: F, base_url: Url) -> Result<CrawlOutcome, RippleError> {
    Crawler::new(fetcher, base_url).run()
}
