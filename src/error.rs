//! Unified error type for stripslice.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while slicing an image.
#[derive(Debug, Error)]
pub enum SliceError {
    /// The input file could not be opened (e.g. it is missing).
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input image could not be decoded.
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        /// The input path.
        path: PathBuf,
        /// Error reported by the imaging backend.
        source: image::ImageError,
    },

    /// A strip could not be encoded or written.
    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        /// The output path of the strip.
        path: PathBuf,
        /// Error reported by the imaging backend.
        source: image::ImageError,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}
