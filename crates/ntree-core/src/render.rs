//! Read-only hierarchy rendering.
//!
//! [`walk`] is a lazy pre-order traversal over a subtree; [`render`]
//! formats it as the indented `|- name` view, two spaces per depth
//! level:
//!
//! ```text
//! |- /
//!   |- Documents
//!   |- Pictures
//!     |- file1.txt
//! ```
//!
//! Rendering never mutates the tree, and with no mutation in between,
//! repeated renders are identical.

use crate::node::Node;

/// Lazy pre-order traversal yielding `(depth, node)` pairs.
///
/// Each directory emits itself, then its children in sorted-name order.
/// The tree is finite and acyclic, so the walk always terminates.
pub fn walk(node: &Node) -> Walk<'_> {
    Walk {
        stack: vec![(0, node)],
    }
}

/// Iterator state for [`walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // push in reverse so the lexicographically smallest pops first
        for child in node.children().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Render a subtree as indented text, one `|- name` line per node.
pub fn render(node: &Node) -> String {
    let lines: Vec<String> = walk(node)
        .map(|(depth, n)| format!("{}|- {}", "  ".repeat(depth), n.name()))
        .collect();
    lines.join("\n")
}
