//! Run-scoped author cache
//!
//! The cache maps an author name (as printed on a quote) to the [`Author`]
//! built from that author's page. Entries are never replaced or evicted, and
//! iteration follows insertion order so output is deterministic.

use crate::records::Author;
use std::collections::HashMap;

/// Insertion-ordered mapping from author name to [`Author`]
#[derive(Debug, Clone, Default)]
pub struct AuthorCache {
    authors: Vec<Author>,
    index: HashMap<String, usize>,
}

impl AuthorCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an author is cached under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up the author cached under `name`
    pub fn get(&self, name: &str) -> Option<&Author> {
        self.index.get(name).map(|&i| &self.authors[i])
    }

    /// Caches `author` under `name`
    ///
    /// The first insertion for a name wins. Returns false, leaving the cache
    /// unchanged, if `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, author: Author) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name, self.authors.len());
        self.authors.push(author);
        true
    }

    /// Number of cached authors
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Returns true if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Iterates over cached authors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }

    /// Consumes the cache, returning authors in insertion order
    pub fn into_authors(self) -> Vec<Author> {
        self.authors
    }
}

impl<'a> IntoIterator for &'a AuthorCache {
    type Item = &'a Author;
    type IntoIter = std::slice::Iter<'a, Author>;

    fn into_iter(self) -> Self::IntoIter {
        self.authors.iter()
    }
}
