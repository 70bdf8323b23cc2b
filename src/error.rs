//! Error types for patterngen

use thiserror::Error;

/// Result type for patterngen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or saving patterns
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A shape, scale factor or sample buffer was out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation exists in the API but has no implementation
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),

    /// The output path names a format the writer cannot produce
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Paper name outside the ISO A0..A6 table
    #[error("Unknown paper size: {0}")]
    UnknownPaperSize(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoder error
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
