/// Biographical record read from an author page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Name as shown in the author page title
    pub name: String,

    /// Date of birth, verbatim
    pub born_date: String,

    /// Place of birth, verbatim (e.g. "in Ulm, Germany")
    pub born_location: String,

    /// Free-form biography
    pub description: String,
}
