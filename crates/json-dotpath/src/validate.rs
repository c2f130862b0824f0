//! Path syntax constants and explicit validation.

use thiserror::Error;

use crate::error::DotPathError;
use crate::segment::DotPath;

/// Separator between path segments.
pub const FIELD_SEPARATOR: char = '.';

/// Opens an array index suffix.
pub const INDEX_OPEN: char = '[';

/// Closes an array index suffix.
pub const INDEX_CLOSE: char = ']';

/// Maximum allowed path string length.
pub const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed number of segments.
pub const MAX_PATH_SEGMENTS: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("path too long")]
    PathTooLong,
    #[error("too many path segments")]
    TooManySegments,
    #[error(transparent)]
    Syntax(#[from] DotPathError),
}

/// Validate a path string against the length limits and the segment grammar.
///
/// Reads and writes do not apply the limits themselves; call this on paths
/// from untrusted input.
///
/// # Example
///
/// ```
/// use json_dotpath::validate_path;
///
/// validate_path("").unwrap();
/// validate_path("a.items[3].name").unwrap();
/// validate_path("a.items[x]").unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    let parsed = DotPath::parse(path)?;
    if parsed.len() > MAX_PATH_SEGMENTS {
        return Err(ValidationError::TooManySegments);
    }
    Ok(())
}
