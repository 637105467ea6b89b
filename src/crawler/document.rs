//! Opaque document-node interface
//!
//! Page parsing only needs three capabilities from an HTML tree: select the
//! first matching descendant, select all matching descendants, and read an
//! attribute. [`PageNode`] captures exactly that, so the parsing logic does
//! not depend on a concrete HTML library. The scraper-backed implementation
//! lives here too.

use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Selector};

/// A node of a parsed page
pub trait PageNode: Sized {
    /// First descendant matching the CSS `selector`, if any
    fn select_first(&self, selector: &str) -> ParseResult<Option<Self>>;

    /// All descendants matching the CSS `selector`, in document order
    fn select_all(&self, selector: &str) -> ParseResult<Vec<Self>>;

    /// Value of attribute `name`
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text content, surrounding whitespace trimmed
    fn text(&self) -> String;

    /// Like [`select_first`](Self::select_first), but a missing match is an error
    fn require(&self, selector: &str) -> ParseResult<Self> {
        self.select_first(selector)?
            .ok_or_else(|| ParseError::MissingElement {
                selector: selector.to_string(),
            })
    }

    /// Text of the first descendant matching `selector`
    fn require_text(&self, selector: &str) -> ParseResult<String> {
        self.require(selector).map(|node| node.text())
    }
}

fn compile(selector: &str) -> ParseResult<Selector> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl<'a> PageNode for ElementRef<'a> {
    fn select_first(&self, selector: &str) -> ParseResult<Option<Self>> {
        let selector = compile(selector)?;
        Ok(self.select(&selector).next())
    }

    fn select_all(&self, selector: &str) -> ParseResult<Vec<Self>> {
        let selector = compile(selector)?;
        Ok(self.select(&selector).collect())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect::<String>().trim().to_string()
    }
}
