//! URL mapping entity.

/// A stored mapping between an original URL and its short code.
///
/// `original` is the natural key: the code is a deterministic function of
/// it, so resubmitting a URL reproduces the same mapping. Rows are immutable
/// once written; the service never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub original: String,
    pub short: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(original: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            short: short.into(),
        }
    }
}
