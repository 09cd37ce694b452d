//! Error types for plaisio-console
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::EventMask;

/// Result type alias for plaisio-console operations
pub type PlaisioResult<T> = Result<T, PlaisioError>;

/// Main error type for plaisio-console operations
#[derive(Error, Debug)]
pub enum PlaisioError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The watch facility refused to register a directory
    #[error("unable to watch {path}: {message}")]
    WatchFailed { path: PathBuf, message: String },

    /// The watch facility could not be created
    #[error("unable to initialize the file watcher: {0}")]
    WatcherInit(String),

    /// An external program could not be started
    #[error("unable to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An event carried a mask none of the reactions handle
    #[error("unhandled event mask {mask} on {path}")]
    UnhandledEventMask { mask: EventMask, path: PathBuf },

    /// A compiled file does not live under the asset root
    #[error("path '{path}' is outside the asset root '{root}'")]
    OutsideAssetRoot { path: PathBuf, root: PathBuf },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
