//! ntree-core: an in-memory hierarchical namespace.
//!
//! This crate provides:
//!
//! - **path**: the codec for canonical `/`-delimited path strings
//! - **node**: the tree element, directories owning children, file leaves
//! - **tree**: [`NamespaceTree`], path-addressed create/delete/move/copy/list
//! - **render**: the pre-order walk and indented text view
//!
//! The tree is the single source of truth: a node's canonical path is
//! derived from its position, never cached, so structural mutations can
//! never leave the namespace internally inconsistent.
//!
//! ```
//! use ntree_core::{DirEntry, NamespaceTree, NodeKind};
//!
//! let mut tree = NamespaceTree::new();
//! tree.create("/Documents", NodeKind::Directory)?;
//! tree.create("/Documents/file1.txt", NodeKind::File)?;
//! assert_eq!(tree.list("/Documents")?, vec![DirEntry::file("file1.txt")]);
//! # Ok::<(), ntree_core::TreeError>(())
//! ```

pub mod error;
pub mod node;
pub mod path;
pub mod render;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use node::{DirEntry, Node, NodeKind};
pub use tree::NamespaceTree;
