//! Error types for dot-path access.

use thiserror::Error;

use crate::types::NodeKind;

/// Structural failure: a malformed path, or a write that conflicts with the
/// kind of a node already in the tree.
///
/// A path that simply does not resolve is never an error; reads report it as
/// `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// Unmatched `[`/`]`, a bracket inside the field name, or text trailing
    /// the closing bracket.
    #[error("invalid array format in segment '{segment}' of path '{path}'")]
    InvalidArrayFormat { segment: String, path: String },
    /// Bracket content is not a decimal integer.
    #[error("invalid array index in segment '{segment}' of path '{path}'")]
    InvalidIndex { segment: String, path: String },
    #[error("negative array index in segment '{segment}' of path '{path}'")]
    NegativeIndex { segment: String, path: String },
    #[error("unexpected node type at '{path}': expected {expected}, found {found}")]
    UnexpectedType {
        expected: NodeKind,
        found: NodeKind,
        path: String,
    },
    #[error("cannot create container at '{path}': root is not an object")]
    NotAnObject { path: String },
}

pub type Result<T> = std::result::Result<T, DotPathError>;
