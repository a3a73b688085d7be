use std::path::PathBuf;
use std::time::SystemTime;

/// A single file-system node seen during a traversal or a directory listing.
///
/// `metadata` is populated lazily — only when the producer already had it in
/// hand or a matcher explicitly requests it. This avoids an extra `stat()`
/// syscall on every entry when nothing downstream looks at size or mtime.
pub struct Entry {
    /// Full path to the entry.
    pub path: PathBuf,

    /// The entry's file name, lossily decoded.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Root = 0.
    pub depth: usize,

    /// Filesystem metadata, populated on demand.
    /// Matchers that need it call `std::fs::symlink_metadata(&entry.path)`
    /// themselves and cache the result here.
    pub metadata: Option<std::fs::Metadata>,
}

impl Entry {
    /// Size in bytes, defined only for regular files with cached metadata.
    pub fn size(&self) -> Option<u64> {
        match (&self.kind, &self.metadata) {
            (EntryKind::File, Some(meta)) => Some(meta.len()),
            _ => None,
        }
    }

    /// Last-modified time, if metadata is cached and the platform reports one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.metadata.as_ref().and_then(|m| m.modified().ok())
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link (never followed during traversal).
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn of(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
