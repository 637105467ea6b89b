//! CSV table writers
//!
//! Tables are comma-delimited UTF-8 with the header row first. The target
//! file is always truncated; there is no append mode.

use crate::output::traits::{OutputResult, TableRecord};
use crate::records::{AuthorCache, Quote};
use std::path::Path;

/// Default path of the quotes table
pub const DEFAULT_QUOTES_PATH: &str = "quotes.csv";

/// Path of the authors table
pub const AUTHORS_PATH: &str = "authors.csv";

/// Writes `records` to `path`, one row per record after the header
///
/// # Arguments
///
/// * `path` - Target file, created or overwritten
/// * `records` - Rows to write, in order
///
/// # Returns
///
/// The number of data rows written
pub fn write_table<'a, T, I>(path: &Path, records: I) -> OutputResult<usize>
where
    T: TableRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(T::HEADERS)?;

    let mut rows = 0;
    for record in records {
        writer.write_record(record.to_row())?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Writes the quotes table
pub fn write_quotes(path: &Path, quotes: &[Quote]) -> OutputResult<usize> {
    let rows = write_table(path, quotes)?;
    tracing::info!("Wrote {} quotes to {}", rows, path.display());
    Ok(rows)
}

/// Writes the cached authors, in cache order
pub fn write_authors(path: &Path, authors: &AuthorCache) -> OutputResult<usize> {
    let rows = write_table(path, authors)?;
    tracing::info!("Wrote {} authors to {}", rows, path.display());
    Ok(rows)
}
