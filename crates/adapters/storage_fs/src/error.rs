//! Storage-specific error type wrapping filesystem and serialization errors.

use std::io;
use std::path::PathBuf;

use callblocker_domain::error::CallBlockerError;

/// Errors originating from the filesystem storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage root could not be prepared.
    #[error("failed to prepare data directory {}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a list file failed for a reason other than absence.
    #[error("failed to read list file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or renaming a list file failed.
    #[error("failed to write list file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A list could not be serialized to JSON.
    #[error("failed to serialize list")]
    Serialize(#[source] serde_json::Error),
}

impl From<StorageError> for CallBlockerError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
