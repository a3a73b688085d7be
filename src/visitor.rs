use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use walkdir::WalkDir;

use crate::entry::{Entry, EntryKind};
use crate::error::FexError;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// TraversalPolicy
// ---------------------------------------------------------------------------

/// What to do at each node of a depth-first directory walk.
///
/// Both recursive search and recursive deletion are the same contents-first
/// traversal with a different action per entry, so they share one walk loop
/// instead of each owning a private recursion.
pub enum TraversalPolicy {
    /// Collect the path of every entry the matcher accepts.
    ///
    /// Matching is order-independent, so the contents-first order used for
    /// deletion is equally valid here.
    CollectMatches(Box<dyn Matcher>),

    /// Remove every entry, children before their parent directory.
    ///
    /// Destructive and irreversible — entries go straight to the
    /// filesystem's unlink, not to any trash.
    DeleteAfterChildren,
}

/// Traversal parameters passed from the builder to the walk.
///
/// `pub(crate)` — not part of the public API. Callers configure these
/// via the builder methods (`.max_depth()`, `.limit()`).
pub(crate) struct WalkConfig {
    pub max_depth: Option<usize>,
    pub limit: Option<usize>,
}

impl WalkConfig {
    pub(crate) fn unbounded() -> Self {
        Self {
            max_depth: None,
            limit: None,
        }
    }
}

// ---------------------------------------------------------------------------
// VisitResult
// ---------------------------------------------------------------------------

/// The output of a completed traversal.
///
/// Failures below the root never abort the walk; they land in `errors` and
/// the remaining siblings are still visited. Callers decide how loudly to
/// report them.
#[derive(Debug)]
pub struct VisitResult {
    /// Paths accepted by the matcher, in the order the walk produced them.
    /// Empty under [`TraversalPolicy::DeleteAfterChildren`].
    pub matches: Vec<PathBuf>,

    /// Number of filesystem entries successfully removed.
    /// Zero under [`TraversalPolicy::CollectMatches`].
    pub removed: usize,

    /// Non-fatal errors encountered during the walk: per-entry removal
    /// failures and mid-walk enumeration failures. Partial results are
    /// returned alongside rather than discarded.
    pub errors: Vec<FexError>,

    /// Walk statistics.
    pub stats: WalkStats,
}

/// Statistics for a completed walk.
#[derive(Debug)]
pub struct WalkStats {
    /// Total number of files encountered (matched or not).
    pub files: usize,

    /// Total number of directories encountered, the root included.
    pub dirs: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,

    /// Total entries visited per second. Convenience field — equals
    /// `(files + dirs) / duration.as_secs_f64()`, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl WalkStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}

// ---------------------------------------------------------------------------
// visit()
// ---------------------------------------------------------------------------

/// Depth-first traversal of the directory tree at `root`, applying `policy`
/// to each entry.
///
/// The walk is sequential, synchronous, and contents-first: a directory is
/// always visited after everything inside it. Symlinks are never followed.
/// Children enumerate in filesystem order — no sorting guarantee.
///
/// # Errors
///
/// Returns `Err(FexError::NotADirectory)` if `root` does not exist or is not
/// a directory; nothing has been touched in that case. All failures below
/// the root are returned as data in [`VisitResult::errors`].
pub fn visit(root: &Path, policy: TraversalPolicy) -> Result<VisitResult, FexError> {
    visit_with(root, policy, &WalkConfig::unbounded())
}

/// The walk loop shared by [`visit`] and [`SearchBuilder`](crate::SearchBuilder).
pub(crate) fn visit_with(
    root: &Path,
    policy: TraversalPolicy,
    config: &WalkConfig,
) -> Result<VisitResult, FexError> {
    match fs::symlink_metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(FexError::NotADirectory(root.to_path_buf())),
    }

    let mut walker = WalkDir::new(root).follow_links(false).contents_first(true);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut matches = Vec::new();
    let mut errors = Vec::new();
    let mut removed = 0usize;
    let mut files = 0usize;
    let mut dirs = 0usize;

    // Directories that must not be removed because something underneath
    // them survived. Taint propagates upward as skipped directories are
    // reached, so an untouched leaf pins its whole ancestor chain.
    let mut tainted: HashSet<PathBuf> = HashSet::new();
    let deleting = matches!(policy, TraversalPolicy::DeleteAfterChildren);

    let start = Instant::now();

    for res in walker.into_iter() {
        let dirent = match res {
            Ok(e) => e,
            Err(err) => {
                // Enumeration failed partway (entry vanished, unreadable
                // directory). Record it, keep whatever is underneath, and
                // continue with the remaining siblings.
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                if deleting {
                    tainted.insert(path.clone());
                }
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk error"));
                errors.push(FexError::Interrupted { path, source });
                continue;
            }
        };

        let kind = EntryKind::of(dirent.file_type());
        match kind {
            EntryKind::Dir => dirs += 1,
            EntryKind::File => files += 1,
            _ => {}
        }

        match &policy {
            TraversalPolicy::CollectMatches(matcher) => {
                // The root is not an entry under itself.
                if dirent.depth() == 0 {
                    continue;
                }
                let entry = Entry {
                    path: dirent.path().to_path_buf(),
                    name: dirent.file_name().to_string_lossy().into_owned(),
                    kind,
                    depth: dirent.depth(),
                    metadata: None, // lazy — matchers populate if needed
                };
                if matcher.is_match(&entry) {
                    matches.push(entry.path);
                    if config.limit.is_some_and(|lim| matches.len() >= lim) {
                        break;
                    }
                }
            }
            TraversalPolicy::DeleteAfterChildren => {
                let path = dirent.path();
                if kind == EntryKind::Dir && tainted.contains(path) {
                    taint_parent(&mut tainted, path);
                    continue;
                }
                let outcome = if kind == EntryKind::Dir {
                    fs::remove_dir(path)
                } else {
                    fs::remove_file(path)
                };
                match outcome {
                    Ok(()) => removed += 1,
                    Err(source) => {
                        taint_parent(&mut tainted, path);
                        errors.push(FexError::EntryRemoval {
                            path: path.to_path_buf(),
                            source,
                        });
                    }
                }
            }
        }
    }

    Ok(VisitResult {
        matches,
        removed,
        errors,
        stats: WalkStats::compute(files, dirs, start.elapsed()),
    })
}

fn taint_parent(tainted: &mut HashSet<PathBuf>, path: &Path) {
    if let Some(parent) = path.parent() {
        tainted.insert(parent.to_path_buf());
    }
}
