//! Storage errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [`PreferenceStore`](super::PreferenceStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access storage file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {} is not a JSON object of strings", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the value would exceed the store's capacity.
    #[error("storage quota of {limit} bytes exceeded while writing '{key}'")]
    QuotaExceeded { key: String, limit: usize },
}
