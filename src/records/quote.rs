/// A single quote taken from a listing page
///
/// `author` is the author's name as printed next to the quote. It is a weak
/// reference into the [`AuthorCache`](super::AuthorCache); resolving it there
/// is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quote text
    pub text: String,

    /// Name of the author
    pub author: String,

    /// Tag labels in page order, duplicates kept
    pub tags: Vec<String>,
}

impl Quote {
    /// Renders the tag list as a single cell value, e.g. `["life", "love"]`
    pub fn tags_repr(&self) -> String {
        format!("{:?}", self.tags)
    }
}
