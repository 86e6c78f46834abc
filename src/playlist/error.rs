use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by playlist operations.
///
/// All of these are recoverable at the menu boundary: the session loop
/// reports the condition and keeps running.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Remove/edit target is absent from the playlist.
    #[error("no song titled \"{0}\"")]
    NotFound(String),

    /// Rejected user input or a malformed stored record.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing file could not be read, written or removed.
    #[error("cannot access {path}: {source}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
