//! Record types produced by a crawl
//!
//! A run yields a sequence of [`Quote`]s and an [`AuthorCache`] holding one
//! [`Author`] per distinct author name.

mod author;
mod cache;
mod quote;

pub use author::Author;
pub use cache::AuthorCache;
pub use quote::Quote;
