use std::path::PathBuf;

use crate::error::FexError;
use crate::traits::Matcher;
use crate::visitor::{visit_with, TraversalPolicy, VisitResult, WalkConfig};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a filename search.
///
/// Created via [`fex::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = fex::search()
///     .root("/var/log")
///     .matching("invoice")
///     .limit(10)
///     .run()?;
/// ```
#[derive(Default)]
pub struct SearchBuilder {
    root: Option<PathBuf>,
    matcher: Option<Box<dyn Matcher>>,
    pattern: Option<String>,
    limit: Option<usize>,
    max_depth: Option<usize>,
    case_insensitive: bool,
}

impl SearchBuilder {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Set the directory to search under.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Set a custom matcher.
    ///
    /// Any type implementing [`Matcher`] is accepted. Use this for custom
    /// matching logic — regex, extension filters, metadata filters, etc.
    /// Takes precedence over `.matching()`, and `.case_insensitive()` does
    /// not apply: case handling is the custom matcher's to define.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    /// Shorthand for substring matching on the entry name.
    ///
    /// Case-sensitive unless `.case_insensitive(true)` is also set.
    pub fn matching(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Make `.matching()` ignore case.
    ///
    /// Off by default: plain substring containment is the baseline rule,
    /// and loosening it is an explicit opt-in.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Stop after `n` matches.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Maximum traversal depth. `0` means the root only, `1` means one
    /// level of children, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until the walk completes.
    ///
    /// # Errors
    ///
    /// Returns `Err(FexError::NotADirectory)` if no root was provided or the
    /// root is not an existing directory. Non-fatal errors during traversal
    /// are collected into [`VisitResult::errors`].
    pub fn run(self) -> Result<VisitResult, FexError> {
        let root = self
            .root
            .ok_or_else(|| FexError::NotADirectory(PathBuf::new()))?;

        // Default matcher: match everything
        let matcher: Box<dyn Matcher> = match (self.matcher, self.pattern) {
            (Some(m), _) => m,
            (None, Some(p)) => Box::new(SubstringMatcher::new(p, self.case_insensitive)),
            (None, None) => Box::new(AllMatcher),
        };

        let config = WalkConfig {
            max_depth: self.max_depth,
            limit: self.limit,
        };

        visit_with(&root, TraversalPolicy::CollectMatches(matcher), &config)
    }
}

// ---------------------------------------------------------------------------
// Built-in matchers
// ---------------------------------------------------------------------------

/// Matches entries whose name contains `pattern`.
pub(crate) struct SubstringMatcher {
    pattern: String,
    fold_case: bool,
}

impl SubstringMatcher {
    pub(crate) fn new(pattern: String, fold_case: bool) -> Self {
        let pattern = if fold_case {
            pattern.to_lowercase()
        } else {
            pattern
        };
        Self { pattern, fold_case }
    }
}

impl Matcher for SubstringMatcher {
    fn is_match(&self, entry: &crate::entry::Entry) -> bool {
        if self.fold_case {
            entry.name.to_lowercase().contains(&self.pattern)
        } else {
            entry.name.contains(&self.pattern)
        }
    }
}

/// Matches every entry. Used when no matcher is specified.
struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &crate::entry::Entry) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};

    fn entry(name: &str) -> Entry {
        Entry {
            path: name.into(),
            name: name.to_string(),
            kind: EntryKind::File,
            depth: 1,
            metadata: None,
        }
    }

    #[test]
    fn substring_is_case_sensitive_by_default() {
        let m = SubstringMatcher::new("Invoice".into(), false);
        assert!(m.is_match(&entry("Invoice_jan.txt")));
        assert!(!m.is_match(&entry("invoice_jan.txt")));
    }

    #[test]
    fn substring_folds_case_on_request() {
        let m = SubstringMatcher::new("Invoice".into(), true);
        assert!(m.is_match(&entry("INVOICE_feb.txt")));
        assert!(m.is_match(&entry("invoice_feb.txt")));
        assert!(!m.is_match(&entry("report.txt")));
    }
}
