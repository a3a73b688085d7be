use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FexError;

/// Working-directory state for one interactive session.
///
/// The session owns its notion of "here"; nothing ever calls
/// `env::set_current_dir`, so a library consumer (or a second session in
/// the same process) sees no global side effects.
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    /// Start a session at the process's current directory.
    pub fn new() -> Result<Self, FexError> {
        let cwd = std::env::current_dir().map_err(|source| FexError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Ok(Self { cwd })
    }

    /// Start a session at `path`, which must be an existing directory.
    pub fn at(path: &Path) -> Result<Self, FexError> {
        let cwd = canonical_dir(path)?;
        Ok(Self { cwd })
    }

    /// The session's current directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a command argument against the current directory.
    /// Absolute arguments pass through unchanged.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let p = Path::new(arg);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.cwd.join(p)
        }
    }

    /// Change the current directory. `..` and friends are resolved away so
    /// the prompt always shows a canonical path.
    pub fn change_dir(&mut self, arg: &str) -> Result<(), FexError> {
        self.cwd = canonical_dir(&self.resolve(arg))?;
        Ok(())
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf, FexError> {
    let canonical = fs::canonicalize(path)
        .map_err(|_| FexError::NotADirectory(path.to_path_buf()))?;
    if !canonical.is_dir() {
        return Err(FexError::NotADirectory(path.to_path_buf()));
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_arguments_resolve_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::at(dir.path()).unwrap();
        assert_eq!(session.resolve("notes.txt"), session.cwd().join("notes.txt"));
    }

    #[test]
    fn absolute_arguments_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::at(dir.path()).unwrap();
        assert_eq!(session.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn change_dir_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("plain.txt"), "x").unwrap();
        let mut session = Session::at(dir.path()).unwrap();
        assert!(matches!(
            session.change_dir("plain.txt"),
            Err(FexError::NotADirectory(_))
        ));
    }

    #[test]
    fn change_dir_canonicalizes_dotdot() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut session = Session::at(dir.path()).unwrap();
        session.change_dir("sub").unwrap();
        session.change_dir("..").unwrap();
        assert_eq!(session.cwd(), fs::canonicalize(dir.path()).unwrap());
    }
}
