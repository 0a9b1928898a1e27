//! Error types
//!
//! Hashing is total over byte input and never fails. The errors here come
//! from the edges: parsing a digest back from text, and turning outside
//! input into the exact bytes to hash.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestParseError {
    #[error("invalid digest length: expected {expected} hex characters, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("invalid hex digit {found:?} at index {index}")]
    InvalidHexDigit { index: usize, found: char },
}

/// Input could not be turned into bytes without guessing an encoding.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("argument {index} is not valid Unicode and has no lossless byte form on this platform")]
    NotUtf8 { index: usize },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
