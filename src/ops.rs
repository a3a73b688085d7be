//! One-shot file operations backing the front ends.
//!
//! Every shell command and menu choice resolves to exactly one function
//! here (recursive search and recursive deletion go through the visitor
//! instead). The front ends only tokenize, dispatch, and print.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::entry::{Entry, EntryKind};
use crate::error::FexError;

/// Metadata snapshot for one path, as reported by `info`.
pub struct FileInfo {
    /// Absolute path where resolvable, the given path otherwise.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes, regular files only.
    pub size: Option<u64>,
    pub modified: Option<SystemTime>,
    /// Permission bits, `None` on platforms without a POSIX mode.
    pub mode: Option<u32>,
}

fn io_err(path: &Path, source: io::Error) -> FexError {
    if source.kind() == io::ErrorKind::NotFound {
        FexError::NotFound(path.to_path_buf())
    } else {
        FexError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Direct children of `path`, in filesystem order.
///
/// Metadata is attached where the platform hands it out cheaply, so
/// listings can show sizes without a second stat pass.
pub fn list_dir(path: &Path) -> Result<Vec<Entry>, FexError> {
    let meta = fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    if !meta.is_dir() {
        return Err(FexError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = Vec::new();
    for res in fs::read_dir(path).map_err(|e| io_err(path, e))? {
        let dirent = res.map_err(|e| io_err(path, e))?;
        let kind = dirent
            .file_type()
            .map(EntryKind::of)
            .unwrap_or(EntryKind::Other);
        entries.push(Entry {
            path: dirent.path(),
            name: dirent.file_name().to_string_lossy().into_owned(),
            kind,
            depth: 1,
            metadata: dirent.metadata().ok(),
        });
    }
    Ok(entries)
}

/// Read a file's contents. Directories are refused rather than dumped.
pub fn read_file(path: &Path) -> Result<Vec<u8>, FexError> {
    let meta = fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    if meta.is_dir() {
        return Err(FexError::IsADirectory(path.to_path_buf()));
    }
    fs::read(path).map_err(|e| io_err(path, e))
}

/// Create a directory, parents included.
pub fn make_dir(path: &Path) -> Result<(), FexError> {
    fs::create_dir_all(path).map_err(|e| io_err(path, e))
}

/// Create an empty file, or open-append an existing one untouched.
pub fn touch(path: &Path) -> Result<(), FexError> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| io_err(path, e))
}

/// Copy `src` to `dst`, overwriting existing files.
///
/// Directories copy recursively. A file copied onto an existing directory
/// lands inside it under its own name.
pub fn copy_path(src: &Path, dst: &Path) -> Result<(), FexError> {
    let meta = fs::metadata(src).map_err(|e| io_err(src, e))?;

    if !meta.is_dir() {
        let target = if dst.is_dir() {
            match src.file_name() {
                Some(name) => dst.join(name),
                None => dst.to_path_buf(),
            }
        } else {
            dst.to_path_buf()
        };
        // Copying a file onto itself would truncate it before reading
        if target.as_path() == src {
            return Err(FexError::DestinationInsideSource(target));
        }
        fs::copy(src, &target).map_err(|e| io_err(&target, e))?;
        return Ok(());
    }

    // A destination under the source would be picked up by the walk as it
    // is being written, recursing until path-length limits.
    if dst.strip_prefix(src).is_ok() {
        return Err(FexError::DestinationInsideSource(dst.to_path_buf()));
    }

    for res in WalkDir::new(src).follow_links(false) {
        let dirent = res.map_err(|err| {
            let path = err.path().map(Path::to_path_buf).unwrap_or_default();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("walk error"));
            FexError::Interrupted { path, source }
        })?;

        let rel = match dirent.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = dst.join(rel);

        if dirent.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| io_err(&target, e))?;
        } else {
            fs::copy(dirent.path(), &target).map_err(|e| io_err(&target, e))?;
        }
    }
    Ok(())
}

/// Rename `src` to `dst`.
pub fn move_path(src: &Path, dst: &Path) -> Result<(), FexError> {
    fs::rename(src, dst).map_err(|e| io_err(src, e))
}

/// Remove a file or an empty directory.
///
/// Non-empty directories are refused with [`FexError::DirNotEmpty`];
/// recursive removal is the visitor's job, not this function's.
pub fn remove_path(path: &Path) -> Result<(), FexError> {
    let meta = fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    if meta.is_dir() {
        let mut children = fs::read_dir(path).map_err(|e| io_err(path, e))?;
        if children.next().is_some() {
            return Err(FexError::DirNotEmpty(path.to_path_buf()));
        }
        fs::remove_dir(path).map_err(|e| io_err(path, e))
    } else {
        fs::remove_file(path).map_err(|e| io_err(path, e))
    }
}

/// Size, kind, modified time, and permission bits for one path.
pub fn stat_path(path: &Path) -> Result<FileInfo, FexError> {
    let meta = fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    let kind = EntryKind::of(meta.file_type());
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(FileInfo {
        path: abs,
        size: (kind == EntryKind::File).then(|| meta.len()),
        modified: meta.modified().ok(),
        mode: mode_of(&meta),
        kind,
    })
}

#[cfg(unix)]
fn mode_of(meta: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(_meta: &fs::Metadata) -> Option<u32> {
    None
}

/// Apply an octal permission mode (e.g. `"755"`) to `path`.
pub fn set_mode(path: &Path, octal: &str) -> Result<(), FexError> {
    let bits =
        u32::from_str_radix(octal, 8).map_err(|_| FexError::InvalidMode(octal.to_string()))?;
    if bits > 0o7777 {
        return Err(FexError::InvalidMode(octal.to_string()));
    }
    // Existence check up front so a bad path reports NotFound, not a
    // platform-specific chmod failure.
    fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    apply_mode(path, bits)
}

#[cfg(unix)]
fn apply_mode(path: &Path, bits: u32) -> Result<(), FexError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(bits)).map_err(|e| io_err(path, e))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _bits: u32) -> Result<(), FexError> {
    Err(FexError::Unsupported("chmod requires a POSIX filesystem"))
}

/// Render the nine permission bits as `rwxr-xr-x`.
pub fn format_mode(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
