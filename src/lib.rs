//! # fex
//!
//! Interactive console file explorer built around a reusable directory
//! visitor.
//!
//! fex is a library plus two thin front ends (`fex`, a command shell, and
//! `fex-menu`, a single-key menu). The library owns the walk engine, the
//! one-shot file operations, the error type, and the builder API. The front
//! ends only tokenize input, dispatch, and print — they contain no
//! filesystem logic of their own.
//!
//! The core abstraction is [`visit`]: one depth-first, contents-first walk
//! parameterized by a [`TraversalPolicy`]. Recursive filename search and
//! recursive deletion are the same traversal with a different action per
//! entry, so neither owns a private recursion.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let results = fex::search()
//!     .root("/var/log")
//!     .matching("invoice")
//!     .run()
//!     .unwrap();
//!
//! for path in &results.matches {
//!     println!("{}", path.display());
//! }
//! println!("scanned {} entries in {:.3}s",
//!     results.stats.files + results.stats.dirs,
//!     results.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Recursive removal
//!
//! Removal is bottom-up: a directory goes only after everything inside it
//! went. A child that cannot be removed pins its whole ancestor chain in
//! place while sibling subtrees are still cleaned up. Failures are returned
//! as data, never panics:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let result = fex::remove_tree(Path::new("/tmp/scratch")).unwrap();
//! for err in &result.errors {
//!     eprintln!("kept: {err}");
//! }
//! ```
//!
//! # Custom matchers
//!
//! Implement [`Matcher`] for matching logic beyond substring containment:
//!
//! ```rust
//! use fex::{Matcher, Entry};
//!
//! struct ExtensionMatcher(String);
//!
//! impl Matcher for ExtensionMatcher {
//!     fn is_match(&self, entry: &Entry) -> bool {
//!         entry.path
//!             .extension()
//!             .map(|e| e.eq_ignore_ascii_case(&self.0))
//!             .unwrap_or(false)
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod entry;
mod error;
mod traits;
mod visitor;

pub mod console;
pub mod ops;
pub mod session;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use entry::{Entry, EntryKind};
pub use error::FexError;
pub use ops::FileInfo;
pub use session::Session;
pub use traits::Matcher;
pub use visitor::{visit, TraversalPolicy, VisitResult, WalkStats};

// ── Entry points ──────────────────────────────────────────────────────────────

use std::path::Path;

/// Create a new [`SearchBuilder`] to configure and run a filename search.
///
/// # Example
///
/// ```rust,no_run
/// let results = fex::search()
///     .root(".")
///     .matching("draft")
///     .limit(20)
///     .run()
///     .unwrap();
///
/// assert!(results.matches.len() <= 20);
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}

/// Remove the directory tree at `root`, children before parents.
///
/// Equivalent to `visit(root, TraversalPolicy::DeleteAfterChildren)`.
/// Destructive and irreversible; see [`VisitResult::errors`] for entries
/// that survived.
pub fn remove_tree(root: &Path) -> Result<VisitResult, FexError> {
    visitor::visit(root, TraversalPolicy::DeleteAfterChildren)
}
