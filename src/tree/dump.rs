//! Human-readable structure dump.

use std::fmt;

use super::RedBlackTree;
use super::node::{Arena, Side};

/// Displays every node of a tree with its color and its relation to its
/// parent, one line per node in pre-order.
///
/// Created by [`RedBlackTree::dump`].
///
/// # Examples
///
/// ```rust
/// use rbtree::RedBlackTree;
///
/// let tree: RedBlackTree<i32> = [20, 10, 30].into_iter().collect();
/// assert_eq!(
///     tree.dump().to_string(),
///     "20(B) is root\n10(R) is 20's   left child\n30(R) is 20's  right child\n"
/// );
/// ```
pub struct TreeDump<'a, K, C> {
    tree: &'a RedBlackTree<K, C>,
}

impl<K, C> RedBlackTree<K, C> {
    /// Returns a [`Display`](fmt::Display) adapter describing every node.
    #[must_use]
    pub const fn dump(&self) -> TreeDump<'_, K, C> {
        TreeDump { tree: self }
    }
}

impl<K: fmt::Display, C> fmt::Display for TreeDump<'_, K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root else {
            return Ok(());
        };
        write_node(&self.tree.arena, root, formatter)
    }
}

fn write_node<K: fmt::Display>(
    arena: &Arena<K>,
    index: u32,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let node = arena.node(index);
    let key = &node.key;
    let tag = node.color.tag();
    match node.parent {
        None => writeln!(formatter, "{key:>2}({tag}) is root")?,
        Some(parent) => {
            let parent_key = &arena.node(parent).key;
            let relation = match arena.side_of(index) {
                Side::Left => "left child",
                Side::Right => "right child",
            };
            writeln!(
                formatter,
                "{key:>2}({tag}) is {parent_key:>2}'s {relation:>12}"
            )?;
        }
    }
    for child in [node.left, node.right].into_iter().flatten() {
        write_node(arena, child, formatter)?;
    }
    Ok(())
}
