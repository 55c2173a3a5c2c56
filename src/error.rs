//! Error type for target file I/O

use std::io;
use std::path::PathBuf;

/// Failures while reading or rewriting a target file
#[derive(Debug, thiserror::Error)]
pub enum FixupError {
    #[error("Failed to read: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to back up {} to {}", path.display(), backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FixupError>;
