//! Output traits and error types
//!
//! Every record written to a table implements [`TableRecord`], which fixes
//! the header row and the order of the cells in each data row.

use crate::records::{Author, Quote};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A record that serializes to one row of a table
pub trait TableRecord {
    /// Column names, in cell order
    const HEADERS: &'static [&'static str];

    /// Cell values, one per header
    fn to_row(&self) -> Vec<String>;
}

impl TableRecord for Quote {
    const HEADERS: &'static [&'static str] = &["text", "author", "tags"];

    fn to_row(&self) -> Vec<String> {
        vec![self.text.clone(), self.author.clone(), self.tags_repr()]
    }
}

impl TableRecord for Author {
    const HEADERS: &'static [&'static str] = &["name", "born_date", "born_location", "description"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.born_date.clone(),
            self.born_location.clone(),
            self.description.clone(),
        ]
    }
}
