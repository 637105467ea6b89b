//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The fetcher boundary and its HTTP implementation
//! - A document-node interface over parsed HTML
//! - Listing-page and author-page parsing
//! - Author resolution through the run-scoped cache
//! - The sequential crawl loop

mod coordinator;
mod document;
mod fetcher;
mod parser;
mod resolver;

pub use coordinator::{run_crawl, CrawlOutcome, CrawlState, Crawler};
pub use document::PageNode;
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use parser::{
    author_reference, extract_quotes, has_next_page, parse_author_page, parse_quote, selectors,
};
pub use resolver::AuthorResolver;

use crate::config::Config;
use crate::output::{write_outcome, CrawlStats};
use crate::RippleError;
use std::path::Path;
use url::Url;

/// Runs a complete crawl from configuration
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Walk the listing pages from the configured base URL
/// 3. Resolve every quoted author exactly once
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Quotes, authors and run counters
/// * `Err(RippleError)` - Crawl failed
pub fn crawl(config: &Config) -> Result<CrawlOutcome, RippleError> {
    let base_url = Url::parse(&config.site.base_url)?;
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)?;
    run_crawl(fetcher, base_url)
}

/// Crawls the configured site and writes both tables
///
/// Nothing is written unless the whole crawl succeeds. The quotes table is
/// written before the authors table.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `quotes_path` - Target of the quotes table
/// * `authors_path` - Target of the authors table
pub fn harvest(
    config: &Config,
    quotes_path: &Path,
    authors_path: &Path,
) -> Result<CrawlStats, RippleError> {
    let outcome = crawl(config)?;
    write_outcome(&outcome, quotes_path, authors_path)?;
    Ok(outcome.stats)
}
