//! The namespace tree: path-addressed CRUD over an owned node hierarchy.
//!
//! The tree is the single source of truth. A node's canonical path is
//! derived from its position by walking down from the root and is never
//! cached, so relocating a subtree cannot leave stale paths behind:
//! every descendant's path changes the instant its ancestor moves.
//!
//! Every mutating operation validates all of its preconditions before
//! touching the tree; a returned error means the tree is exactly as it
//! was.

use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::node::{DirEntry, Node, NodeKind};
use crate::path;
use crate::render;

/// An in-memory hierarchical namespace rooted at `/`.
///
/// ```
/// use ntree_core::{NamespaceTree, NodeKind};
///
/// let mut tree = NamespaceTree::new();
/// tree.create("/docs", NodeKind::Directory)?;
/// tree.create("/docs/readme.md", NodeKind::File)?;
/// tree.rename("/docs/readme.md", "/readme.md")?;
/// assert!(tree.exists("/readme.md"));
/// # Ok::<(), ntree_core::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceTree {
    root: Node,
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTree {
    /// Create an empty namespace: a root directory and nothing else.
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a path to the node it designates.
    ///
    /// Fails `NotFound` at the first missing segment, `NotADirectory`
    /// when an intermediate segment names a file.
    pub fn resolve(&self, path_str: &str) -> TreeResult<&Node> {
        let normalized = path::normalize(path_str)?;
        self.node_at(&normalized)
    }

    /// True if the path resolves to a node.
    pub fn exists(&self, path_str: &str) -> bool {
        self.resolve(path_str).is_ok()
    }

    /// Create a single node at `path`.
    ///
    /// The parent must already exist and be a directory
    /// (`ParentNotFound` otherwise); the final segment must be free
    /// (`AlreadyExists`).
    pub fn create(&mut self, path_str: &str, kind: NodeKind) -> TreeResult<()> {
        let normalized = path::normalize(path_str)?;
        let (parent_path, name) = path::split(&normalized)?;
        let parent = match self.node_at_mut(&parent_path) {
            Ok(node) if node.is_dir() => node,
            _ => return Err(TreeError::ParentNotFound(parent_path)),
        };
        if parent.child(&name).is_some() {
            return Err(TreeError::AlreadyExists(normalized));
        }
        parent.insert_child(Node::new(name, kind))?;
        debug!(path = %normalized, ?kind, "created node");
        Ok(())
    }

    /// Create every missing directory along `path`.
    ///
    /// Existing directories are fine. A file occupying the final
    /// segment fails `AlreadyExists`; a file anywhere earlier fails
    /// `NotADirectory`. Nothing is created on failure.
    pub fn create_dir_all(&mut self, path_str: &str) -> TreeResult<()> {
        let normalized = path::normalize(path_str)?;
        if path::is_root(&normalized) {
            return Ok(());
        }

        // Validate the full walk first so a failure half-way cannot
        // leave freshly created ancestors behind.
        let mut probe = &self.root;
        let mut walked = String::from(path::ROOT);
        for segment in path::segments(&normalized) {
            walked = path::join(&walked, segment);
            match probe.child(segment) {
                Some(child) if child.is_file() => {
                    return Err(if walked == normalized {
                        TreeError::AlreadyExists(walked)
                    } else {
                        TreeError::NotADirectory(walked)
                    });
                }
                Some(child) => probe = child,
                // everything below is missing; nothing left to collide with
                None => break,
            }
        }

        let mut current = &mut self.root;
        for segment in path::segments(&normalized) {
            current = current.ensure_child_dir(segment)?;
        }
        debug!(path = %normalized, "ensured directory path");
        Ok(())
    }

    /// Delete the node at `path` and its entire subtree.
    ///
    /// The root cannot be deleted. Deletion is atomic: either the whole
    /// subtree is gone or nothing changed.
    pub fn delete(&mut self, path_str: &str) -> TreeResult<()> {
        let normalized = path::normalize(path_str)?;
        if path::is_root(&normalized) {
            return Err(TreeError::RootForbidden);
        }
        let (parent_path, name) = path::split(&normalized)?;
        let parent = match self.node_at_mut(&parent_path) {
            Ok(node) => node,
            // a missing parent means the full path is missing
            Err(TreeError::NotFound(_)) => return Err(TreeError::NotFound(normalized)),
            Err(err) => return Err(err),
        };
        if !parent.is_dir() {
            return Err(TreeError::NotADirectory(parent_path));
        }
        let removed = parent
            .remove_child(&name)
            .ok_or_else(|| TreeError::NotFound(normalized.clone()))?;
        debug!(path = %normalized, nodes = removed.subtree_len(), "deleted subtree");
        Ok(())
    }

    /// Move the node at `src` to `dest`, renaming it to `dest`'s final
    /// segment. The subtree moves intact; because paths are derived
    /// from position, no descendant bookkeeping is needed.
    ///
    /// Named after `rename(2)`, since `move` is reserved in Rust.
    pub fn rename(&mut self, src: &str, dest: &str) -> TreeResult<()> {
        let (src_path, dest_path) = self.prepare_transfer(src, dest)?;
        let (src_parent, src_name) = path::split(&src_path)?;
        let (dest_parent, dest_name) = path::split(&dest_path)?;

        let mut node = self
            .dir_at_mut(&src_parent)?
            .remove_child(&src_name)
            .ok_or_else(|| TreeError::NotFound(src_path.clone()))?;
        node.set_name(dest_name);
        self.dir_at_mut(&dest_parent)?.insert_child(node)?;
        debug!(src = %src_path, dest = %dest_path, "moved subtree");
        Ok(())
    }

    /// Copy the subtree at `src` to `dest`.
    ///
    /// Same precondition set as [`rename`](Self::rename); the source is
    /// left intact and the copy is a wholly independent deep clone.
    pub fn copy(&mut self, src: &str, dest: &str) -> TreeResult<()> {
        let (src_path, dest_path) = self.prepare_transfer(src, dest)?;
        let (dest_parent, dest_name) = path::split(&dest_path)?;

        let mut clone = self.node_at(&src_path)?.clone();
        clone.set_name(dest_name);
        self.dir_at_mut(&dest_parent)?.insert_child(clone)?;
        debug!(src = %src_path, dest = %dest_path, "copied subtree");
        Ok(())
    }

    /// List the children of the directory at `path`, sorted by name.
    pub fn list(&self, path_str: &str) -> TreeResult<Vec<DirEntry>> {
        let normalized = path::normalize(path_str)?;
        let node = self.node_at(&normalized)?;
        if !node.is_dir() {
            return Err(TreeError::NotADirectory(normalized));
        }
        Ok(node.entries())
    }

    /// Render the whole hierarchy as indented text.
    pub fn render(&self) -> String {
        render::render(&self.root)
    }

    /// Render the subtree at `path` as indented text.
    pub fn render_at(&self, path_str: &str) -> TreeResult<String> {
        Ok(render::render(self.resolve(path_str)?))
    }

    /// Shared precondition checks for `rename` and `copy`.
    ///
    /// Returns the normalized `(src, dest)` once every failure case is
    /// ruled out, so the mutation that follows cannot be interrupted
    /// half-way.
    fn prepare_transfer(&self, src: &str, dest: &str) -> TreeResult<(String, String)> {
        let src_path = path::normalize(src)?;
        let dest_path = path::normalize(dest)?;
        self.node_at(&src_path)?;
        if path::is_root(&src_path) {
            return Err(TreeError::RootForbidden);
        }
        if path::is_ancestor(&src_path, &dest_path) {
            return Err(TreeError::CycleDetected {
                src: src_path,
                dest: dest_path,
            });
        }
        let (dest_parent, _) = path::split(&dest_path)?;
        match self.node_at(&dest_parent) {
            Ok(node) if node.is_dir() => {}
            _ => return Err(TreeError::ParentNotFound(dest_parent)),
        }
        if self.node_at(&dest_path).is_ok() {
            return Err(TreeError::AlreadyExists(dest_path));
        }
        Ok((src_path, dest_path))
    }

    /// Walk a canonical path down from the root.
    fn node_at(&self, canonical: &str) -> TreeResult<&Node> {
        let mut current = &self.root;
        let mut walked = String::from(path::ROOT);
        for segment in path::segments(canonical) {
            if !current.is_dir() {
                return Err(TreeError::NotADirectory(walked));
            }
            current = current
                .child(segment)
                .ok_or_else(|| TreeError::NotFound(canonical.to_string()))?;
            walked = path::join(&walked, segment);
        }
        Ok(current)
    }

    fn node_at_mut(&mut self, canonical: &str) -> TreeResult<&mut Node> {
        let mut current = &mut self.root;
        let mut walked = String::from(path::ROOT);
        for segment in path::segments(canonical) {
            if !current.is_dir() {
                return Err(TreeError::NotADirectory(walked));
            }
            current = match current.child_mut(segment) {
                Some(child) => child,
                None => return Err(TreeError::NotFound(canonical.to_string())),
            };
            walked = path::join(&walked, segment);
        }
        Ok(current)
    }

    /// Like [`node_at_mut`](Self::node_at_mut), but the node must be a
    /// directory.
    fn dir_at_mut(&mut self, canonical: &str) -> TreeResult<&mut Node> {
        let owned = canonical.to_string();
        let node = self.node_at_mut(canonical)?;
        if node.is_dir() {
            Ok(node)
        } else {
            Err(TreeError::NotADirectory(owned))
        }
    }
}
