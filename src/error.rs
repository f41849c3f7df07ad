//! Error types for canopy

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An export format outside the supported set was requested.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// An exclude/include pattern failed to compile.
    #[error("invalid {kind} pattern '{pattern}': {message}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
