//! Tree nodes: directories that own their children, and leaf files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};
use crate::path;

/// Kind of node. Fixed at creation; a node never changes kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Directory,
    File,
}

/// A listing entry: the name and kind of one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Name of the entry (a single segment, not a full path).
    pub name: String,
    /// Kind of entry.
    pub kind: NodeKind,
}

impl DirEntry {
    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }
}

/// One element of the namespace tree.
///
/// A node exclusively owns its children, so dropping it drops the whole
/// subtree and cloning it deep-clones the subtree. Children live in a
/// `BTreeMap` keyed by name, which makes sibling names unique and
/// iteration lexicographic.
///
/// Construction goes through the tree (fields are private and the kind
/// is fixed for life); a file can never gain children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    kind: NodeKind,
    children: BTreeMap<String, Node>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            children: BTreeMap::new(),
        }
    }

    /// The root directory. Its name is the root path itself.
    pub(crate) fn root() -> Self {
        Self::new(path::ROOT.to_string(), NodeKind::Directory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Look up a child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Children in lexicographic name order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children.values()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.values().map(Node::subtree_len).sum::<usize>()
    }

    /// Sorted `(name, kind)` listing of the children.
    pub fn entries(&self) -> Vec<DirEntry> {
        self.children
            .values()
            .map(|child| DirEntry {
                name: child.name.clone(),
                kind: child.kind,
            })
            .collect()
    }

    /// Attach `node` as a child. Rejected on files and on name clashes.
    pub(crate) fn insert_child(&mut self, node: Node) -> TreeResult<()> {
        if !self.is_dir() {
            return Err(TreeError::NotADirectory(self.name.clone()));
        }
        if self.children.contains_key(&node.name) {
            return Err(TreeError::AlreadyExists(node.name));
        }
        self.children.insert(node.name.clone(), node);
        Ok(())
    }

    /// Detach and return the named child with its whole subtree.
    pub(crate) fn remove_child(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    /// Look up an existing child or insert a fresh, empty directory.
    ///
    /// Note this returns whatever occupies the name, file or directory;
    /// the caller decides whether a file there is an error.
    pub(crate) fn ensure_child_dir(&mut self, name: &str) -> TreeResult<&mut Node> {
        if !self.is_dir() {
            return Err(TreeError::NotADirectory(self.name.clone()));
        }
        Ok(self
            .children
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name.to_string(), NodeKind::Directory)))
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_reject_children() {
        let mut file = Node::new("leaf.txt".into(), NodeKind::File);
        let child = Node::new("x".into(), NodeKind::File);
        assert!(matches!(
            file.insert_child(child),
            Err(TreeError::NotADirectory(_))
        ));
        assert_eq!(file.child_count(), 0);
    }

    #[test]
    fn sibling_names_are_unique() {
        let mut dir = Node::root();
        dir.insert_child(Node::new("a".into(), NodeKind::File)).unwrap();
        let clash = Node::new("a".into(), NodeKind::Directory);
        assert!(matches!(
            dir.insert_child(clash),
            Err(TreeError::AlreadyExists(_))
        ));
    }

    #[test]
    fn children_iterate_in_name_order() {
        let mut dir = Node::root();
        for name in ["zebra", "apple", "mango"] {
            dir.insert_child(Node::new(name.into(), NodeKind::File)).unwrap();
        }
        let names: Vec<&str> = dir.children().map(Node::name).collect();
        assert_eq!(names, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut dir = Node::root();
        dir.insert_child(Node::new("sub".into(), NodeKind::Directory)).unwrap();
        let mut copy = dir.clone();
        copy.child_mut("sub")
            .and_then(|sub| {
                sub.insert_child(Node::new("extra".into(), NodeKind::File)).ok()
            })
            .unwrap();
        assert_eq!(dir.subtree_len(), 2);
        assert_eq!(copy.subtree_len(), 3);
    }

    #[test]
    fn ensure_child_dir_reuses_existing() {
        let mut dir = Node::root();
        dir.ensure_child_dir("cache").unwrap();
        dir.ensure_child_dir("cache").unwrap();
        assert_eq!(dir.child_count(), 1);
    }

    #[test]
    fn serializes_with_names_and_kinds() {
        let mut dir = Node::root();
        dir.insert_child(Node::new("readme.md".into(), NodeKind::File)).unwrap();
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["kind"], "Directory");
        assert_eq!(json["children"]["readme.md"]["kind"], "File");
    }
}
