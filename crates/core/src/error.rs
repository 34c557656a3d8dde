//! Error types for slide analysis and compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analyzing markdown or compiling a deck.
///
/// Segmentation, classification, extraction and markup generation never
/// fail; only I/O boundaries and the external renderer produce errors.
#[derive(Error, Debug)]
pub enum Error {
    /// An input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Listing a content directory failed. Aborts the whole batch.
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an input file failed for a reason other than it missing.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure with no single input path attached.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The requested output format cannot be produced.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The external renderer exited with a non-zero code.
    #[error("Renderer failed with exit code {0}")]
    RenderFailed(i32),

    /// A configuration or slide plan file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Map an I/O error on `path` to `FileNotFound` when the path is missing.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.into())
        } else {
            Error::ReadFile {
                path: path.into(),
                source: err,
            }
        }
    }
}
