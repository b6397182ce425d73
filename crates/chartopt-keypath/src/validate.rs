//! Strict key-path validation.
//!
//! The graph itself is tolerant of malformed paths; these helpers exist for
//! surfaces that want eager rejection (CLI input, configuration files)
//! before a path ever reaches a graph.

use thiserror::Error;

use crate::SEPARATOR;

/// Maximum accepted key-path length in bytes.
const MAX_PATH_LENGTH: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("empty key path")]
    Empty,
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
    #[error("key path longer than {MAX_PATH_LENGTH} bytes")]
    TooLong,
}

/// Validate a dotted key path.
///
/// A valid path is non-empty, at most 1024 bytes, and contains no empty
/// segments (no leading, trailing, or doubled separators).
///
/// # Example
///
/// ```
/// use chartopt_keypath::{validate_key_path, KeyPathError};
///
/// validate_key_path("chart.type").unwrap();
/// assert_eq!(validate_key_path(""), Err(KeyPathError::Empty));
/// assert_eq!(validate_key_path("a..b"), Err(KeyPathError::EmptySegment(1)));
/// assert_eq!(validate_key_path("a.b."), Err(KeyPathError::EmptySegment(2)));
/// ```
pub fn validate_key_path(path: &str) -> Result<(), KeyPathError> {
    if path.is_empty() {
        return Err(KeyPathError::Empty);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(KeyPathError::TooLong);
    }
    for (i, segment) in path.split(SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(KeyPathError::EmptySegment(i));
        }
    }
    Ok(())
}
