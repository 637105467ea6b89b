//! Listing-page and author-page parsing
//!
//! This module reads the designated fields out of fetched pages:
//! - Quote elements on a listing page, and the next-page indicator
//! - Text, author name, author link and tags of each quote element
//! - The four biographical fields of an author page
//!
//! A missing field is a [`ParseError`]; no partial record is ever produced.

use crate::crawler::document::PageNode;
use crate::crawler::resolver::AuthorResolver;
use crate::crawler::Fetcher;
use crate::records::{Author, Quote};
use crate::{ParseError, RippleError};

/// CSS selectors for the designated page fields
pub mod selectors {
    /// One quote on a listing page
    pub const QUOTE: &str = ".quote";
    /// Author name inside a quote
    pub const AUTHOR_NAME: &str = ".author";
    /// Link to the author page (first hyperlink inside a quote)
    pub const AUTHOR_LINK: &str = "a";
    /// Quote text inside a quote
    pub const TEXT: &str = ".text";
    /// Tag label inside a quote (repeated)
    pub const TAG: &str = ".tag";
    /// Present on a listing page iff a later page exists
    pub const NEXT_PAGE: &str = ".next";

    pub const AUTHOR_TITLE: &str = ".author-title";
    pub const AUTHOR_BORN_DATE: &str = ".author-born-date";
    pub const AUTHOR_BORN_LOCATION: &str = ".author-born-location";
    pub const AUTHOR_DESCRIPTION: &str = ".author-description";
}

/// Returns the raw quote elements of a listing page, in page order
pub fn extract_quotes<N: PageNode>(page: &N) -> Result<Vec<N>, ParseError> {
    page.select_all(selectors::QUOTE)
}

/// Returns true iff the listing page carries a next-page indicator
pub fn has_next_page<N: PageNode>(page: &N) -> Result<bool, ParseError> {
    Ok(page.select_first(selectors::NEXT_PAGE)?.is_some())
}

/// Reads the author name and author-page link of a quote element
pub fn author_reference<N: PageNode>(element: &N) -> Result<(String, String), ParseError> {
    let name = element.require_text(selectors::AUTHOR_NAME)?;
    let href = element
        .require(selectors::AUTHOR_LINK)?
        .attr("href")
        .ok_or_else(|| ParseError::MissingAttribute {
            selector: selectors::AUTHOR_LINK.to_string(),
            attribute: "href".to_string(),
        })?;
    Ok((name, href))
}

/// Builds a [`Quote`] from one quote element
///
/// The author is resolved through `resolver` before the quote is returned, so
/// the author cache always holds every author named by a finished quote.
///
/// # Arguments
///
/// * `element` - A node returned by [`extract_quotes`]
/// * `resolver` - Author resolver owning the run's author cache
/// * `page_url` - URL of the listing page, used as error context
///
/// # Returns
///
/// * `Ok(Quote)` - All fields were present
/// * `Err(RippleError::Parse)` - A designated field was missing
/// * `Err(RippleError::Fetch)` - The author page could not be fetched
pub fn parse_quote<N, F>(
    element: &N,
    resolver: &mut AuthorResolver<'_, F>,
    page_url: &str,
) -> Result<Quote, RippleError>
where
    N: PageNode,
    F: Fetcher + ?Sized,
{
    let in_page = |source: ParseError| RippleError::Parse {
        url: page_url.to_string(),
        source,
    };

    let (author, href) = author_reference(element).map_err(in_page)?;
    resolver.resolve(&author, &href)?;

    let text = element.require_text(selectors::TEXT).map_err(in_page)?;
    let tags = element
        .select_all(selectors::TAG)
        .map_err(in_page)?
        .iter()
        .map(PageNode::text)
        .collect();

    Ok(Quote { text, author, tags })
}

/// Builds an [`Author`] from an author page
pub fn parse_author_page<N: PageNode>(page: &N) -> Result<Author, ParseError> {
    Ok(Author {
        name: page.require_text(selectors::AUTHOR_TITLE)?,
        born_date: page.require_text(selectors::AUTHOR_BORN_DATE)?,
        born_location: page.require_text(selectors::AUTHOR_BORN_LOCATION)?,
        description: page.require_text(selectors::AUTHOR_DESCRIPTION)?,
    })
}
