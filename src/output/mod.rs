//! Output module for writing crawl results
//!
//! This module handles:
//! - Writing the quotes and authors tables as CSV
//! - Reporting crawl statistics

mod csv_writer;
pub mod stats;
mod traits;

pub use csv_writer::{write_authors, write_quotes, write_table, AUTHORS_PATH, DEFAULT_QUOTES_PATH};
pub use stats::{log_statistics, CrawlStats};
pub use traits::{OutputError, OutputResult, TableRecord};

use crate::crawler::CrawlOutcome;
use std::path::Path;

/// Writes both tables for a finished crawl
///
/// Quotes are written first, then authors. If the authors table fails, the
/// quotes table has already been replaced.
///
/// # Arguments
///
/// * `outcome` - The finished crawl
/// * `quotes_path` - Target of the quotes table
/// * `authors_path` - Target of the authors table
pub fn write_outcome(
    outcome: &CrawlOutcome,
    quotes_path: &Path,
    authors_path: &Path,
) -> OutputResult<()> {
    write_quotes(quotes_path, &outcome.quotes)?;
    write_authors(authors_path, &outcome.authors)?;
    Ok(())
}
