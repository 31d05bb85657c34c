//! Path codec: canonical slash-delimited paths.
//!
//! A canonical path is a single leading `/` followed by `/`-joined
//! non-empty segments, with no trailing slash (`/a/b/c`); the root is `/`
//! alone. `normalize` tolerates exactly one deviation (a single trailing
//! slash, which is stripped) and rejects everything else with
//! [`TreeError::InvalidPath`] rather than silently correcting it:
//! relative paths, empty segments, and `.`/`..` are errors, not hints.

use crate::error::{TreeError, TreeResult};

/// The root path.
pub const ROOT: &str = "/";

/// True if `path` is the canonical root.
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Validate a single path segment.
///
/// A segment is non-empty, contains no `/` or NUL, and is not `.` or
/// `..`.
pub fn validate_segment(segment: &str) -> TreeResult<()> {
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains('\0')
    {
        return Err(TreeError::InvalidPath(segment.to_string()));
    }
    Ok(())
}

/// Normalize a path string to canonical form.
pub fn normalize(path: &str) -> TreeResult<String> {
    let Some(body) = path.strip_prefix('/') else {
        return Err(TreeError::InvalidPath(path.to_string()));
    };
    if body.is_empty() {
        return Ok(ROOT.to_string());
    }
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        // "//" is an empty segment, not a spelling of the root
        return Err(TreeError::InvalidPath(path.to_string()));
    }
    for segment in body.split('/') {
        validate_segment(segment).map_err(|_| TreeError::InvalidPath(path.to_string()))?;
    }
    Ok(format!("/{body}"))
}

/// Split a path into `(parent, segment)` after normalizing it.
///
/// The root has no final segment and cannot be split.
pub fn split(path: &str) -> TreeResult<(String, String)> {
    let normalized = normalize(path)?;
    if is_root(&normalized) {
        return Err(TreeError::InvalidPath(path.to_string()));
    }
    // A normalized non-root path always contains at least the leading '/'.
    let idx = normalized.rfind('/').unwrap_or(0);
    let parent = if idx == 0 {
        ROOT.to_string()
    } else {
        normalized[..idx].to_string()
    };
    let segment = normalized[idx + 1..].to_string();
    Ok((parent, segment))
}

/// Segments of a canonical path in root-to-leaf order. Empty for `/`.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Join a parent path and a child segment.
pub fn join(parent: &str, name: &str) -> String {
    if is_root(parent) {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// True when `path` is `ancestor` itself or lies inside its subtree.
///
/// Both arguments must be canonical. This is the cycle predicate for
/// move and copy: a destination for which this holds would place a node
/// inside itself.
pub fn is_ancestor(ancestor: &str, path: &str) -> bool {
    if is_root(ancestor) {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}
