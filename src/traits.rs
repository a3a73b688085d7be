use crate::entry::Entry;

/// Determines whether a visited entry is a match.
///
/// Implement this to define custom matching logic — extension filtering,
/// regex, metadata filters, or anything else. The built-in rule is substring
/// containment on the entry name (see
/// [`SearchBuilder::matching`](crate::SearchBuilder::matching)).
///
/// # Example
///
/// ```rust
/// use fex::{Matcher, Entry};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}
