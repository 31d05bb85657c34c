//! Property tests for the namespace invariants.
//!
//! Trees are grown from randomly generated path lists over a tiny
//! segment alphabet (so collisions and nesting actually happen), then
//! the structural invariants are checked: canonical-path uniqueness,
//! create/delete round-trips, and shape preservation across move and
//! copy.

use std::collections::HashSet;

use ntree_core::{path, render, NamespaceTree, Node, NodeKind};
use proptest::prelude::*;

/// Random path material: short segments over {a, b} nested up to four
/// levels deep.
fn path_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[ab]{1,2}", 1..4), 0..12)
}

/// Grow a tree from generated paths: directories along the way, a file
/// at each leaf. Paths that collide with an earlier file are skipped;
/// the generator does not promise consistency, the tree does.
fn build_tree(paths: &[Vec<String>]) -> NamespaceTree {
    let mut tree = NamespaceTree::new();
    for segs in paths {
        let full = format!("/{}", segs.join("/"));
        if let Ok((parent, _)) = path::split(&full) {
            if tree.create_dir_all(&parent).is_ok() {
                let _ = tree.create(&full, NodeKind::File);
            }
        }
    }
    tree
}

/// Every reachable node's canonical path, derived by walking down.
fn canonical_paths(tree: &NamespaceTree) -> Vec<String> {
    fn visit(node: &Node, prefix: &str, out: &mut Vec<String>) {
        for child in node.children() {
            let child_path = path::join(prefix, child.name());
            out.push(child_path.clone());
            visit(child, &child_path, out);
        }
    }
    let mut out = vec![path::ROOT.to_string()];
    visit(tree.root(), path::ROOT, &mut out);
    out
}

/// `(relative path, kind)` pairs under a node, in visit order.
fn shape(node: &Node) -> Vec<(usize, String, NodeKind)> {
    render::walk(node)
        .skip(1)
        .map(|(depth, n)| (depth, n.name().to_string(), n.kind()))
        .collect()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(segs in prop::collection::vec("[a-z]{1,6}", 0..5)) {
        let raw = format!("/{}", segs.join("/"));
        let normalized = path::normalize(&raw).unwrap();
        prop_assert_eq!(path::normalize(&normalized).unwrap(), normalized);
    }

    #[test]
    fn split_and_join_round_trip(segs in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let p = format!("/{}", segs.join("/"));
        let (parent, name) = path::split(&p).unwrap();
        prop_assert_eq!(path::join(&parent, &name), p);
    }

    #[test]
    fn canonical_paths_are_unique(paths in path_lists()) {
        let tree = build_tree(&paths);
        let mut seen = HashSet::new();
        for p in canonical_paths(&tree) {
            prop_assert!(seen.insert(p));
        }
    }

    #[test]
    fn create_then_delete_round_trips(paths in path_lists()) {
        let mut tree = build_tree(&paths);
        let before = tree.render();

        // segment alphabet is {a,b}, so these names cannot collide
        tree.create_dir_all("/scratch/zone").unwrap();
        tree.create("/scratch/zone/probe", NodeKind::File).unwrap();
        tree.delete("/scratch").unwrap();

        prop_assert_eq!(tree.render(), before);
    }

    #[test]
    fn rename_preserves_subtree_shape(paths in path_lists()) {
        let mut tree = build_tree(&paths);
        let Some(dir_name) = tree
            .root()
            .children()
            .find(|c| c.is_dir())
            .map(|c| c.name().to_string())
        else {
            return Ok(());
        };
        let src = format!("/{dir_name}");
        let before = shape(tree.resolve(&src).unwrap());

        tree.rename(&src, "/relocated0").unwrap();

        prop_assert!(!tree.exists(&src));
        prop_assert_eq!(shape(tree.resolve("/relocated0").unwrap()), before);
    }

    #[test]
    fn copy_is_independent_of_its_source(paths in path_lists()) {
        let mut tree = build_tree(&paths);
        let Some(dir_name) = tree
            .root()
            .children()
            .find(|c| c.is_dir())
            .map(|c| c.name().to_string())
        else {
            return Ok(());
        };
        let src = format!("/{dir_name}");
        let before = shape(tree.resolve(&src).unwrap());

        tree.copy(&src, "/mirror0").unwrap();
        tree.delete(&src).unwrap();

        prop_assert_eq!(shape(tree.resolve("/mirror0").unwrap()), before);
    }

    #[test]
    fn moves_never_lose_or_invent_nodes(paths in path_lists()) {
        let mut tree = build_tree(&paths);
        let total = tree.root().subtree_len();
        let Some(dir_name) = tree
            .root()
            .children()
            .find(|c| c.is_dir())
            .map(|c| c.name().to_string())
        else {
            return Ok(());
        };

        tree.rename(&format!("/{dir_name}"), "/relocated0").unwrap();
        prop_assert_eq!(tree.root().subtree_len(), total);
    }
}
