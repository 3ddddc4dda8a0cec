//! Error types for slide export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a slide export.
///
/// Irregular markup is never an error; it only reduces the number of
/// extracted slides.
#[derive(Error, Debug)]
pub enum Error {
    /// The input document does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Failed to read the input or write the output.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
