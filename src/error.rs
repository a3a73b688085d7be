use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FexError {
    // Traversal
    #[error("not a directory")]
    NotADirectory(PathBuf),

    #[error("path not found")]
    NotFound(PathBuf),

    #[error("could not remove entry")]
    EntryRemoval {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("traversal interrupted")]
    Interrupted {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // One-shot operations
    #[error("is a directory")]
    IsADirectory(PathBuf),

    #[error("directory not empty")]
    DirNotEmpty(PathBuf),

    #[error("destination lies inside source")]
    DestinationInsideSource(PathBuf),

    #[error("invalid permission mode")]
    InvalidMode(String),

    #[error("unsupported on this platform")]
    Unsupported(&'static str),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FexError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotADirectory(p)
            | Self::NotFound(p)
            | Self::IsADirectory(p)
            | Self::DirNotEmpty(p)
            | Self::DestinationInsideSource(p)
            | Self::EntryRemoval { path: p, .. }
            | Self::Interrupted { path: p, .. }
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether a traversal can continue after this error.
    ///
    /// Recoverable errors (a single entry that could not be removed, an
    /// enumeration that failed partway) are collected into
    /// [`VisitResult::errors`](crate::VisitResult) and the walk keeps going.
    ///
    /// Everything else is fatal to the call that produced it.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EntryRemoval { .. } | Self::Interrupted { .. })
    }
}
