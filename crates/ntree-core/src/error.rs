//! Error taxonomy for the namespace engine.
//!
//! Every fallible operation returns exactly one of these kinds, and a
//! failed operation never leaves partial state behind: preconditions are
//! checked before the first structural change.

use thiserror::Error;

/// Errors produced by path parsing and tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Malformed path string: relative, empty segment, `.`/`..`, or an
    /// attempt to split the root.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// Path does not resolve to any node.
    #[error("not found: {0}")]
    NotFound(String),

    /// A file where a directory was required.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Destination parent directory is missing, or is not a directory.
    #[error("parent directory does not exist: {0}")]
    ParentNotFound(String),

    /// Target name is already taken in the destination directory.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Delete or move of the root directory.
    #[error("cannot delete or move the root directory")]
    RootForbidden,

    /// Destination lies inside the source subtree.
    #[error("destination {dest} is inside the subtree of {src}")]
    CycleDetected { src: String, dest: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
