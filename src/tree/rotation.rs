//! Rotation primitives.
//!
//! Left rotation at `x` (right rotation at `y` is the inverse):
//!
//! ```text
//!       px                px
//!       |                 |
//!       x                 y
//!      / \      -->      / \
//!    lx   y             x   ry
//!        / \           / \
//!      ly   ry       lx   ly
//! ```
//!
//! These are the only operations that change the shape of the tree. They
//! preserve key order and leave colors untouched.

use tracing::trace;

use super::RedBlackTree;
use super::node::Side;

impl<K, C> RedBlackTree<K, C> {
    /// Rotates `x` down to the left; its right child `y` takes its place and
    /// `y`'s left subtree becomes `x`'s right subtree.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no right child.
    pub(crate) fn left_rotate(&mut self, x: u32) {
        let y = self
            .arena
            .right(x)
            .expect("left rotation requires a right child");
        trace!(target: "rbtree::rebalance", x, y, "left rotate");

        let inner = self.arena.left(y);
        self.arena.node_mut(x).right = inner;
        if let Some(inner) = inner {
            self.arena.node_mut(inner).parent = Some(x);
        }

        let parent = self.arena.parent(x);
        self.arena.node_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));

        self.arena.node_mut(y).left = Some(x);
        self.arena.node_mut(x).parent = Some(y);
    }

    /// Rotates `y` down to the right; its left child `x` takes its place and
    /// `x`'s right subtree becomes `y`'s left subtree.
    ///
    /// # Panics
    ///
    /// Panics if `y` has no left child.
    pub(crate) fn right_rotate(&mut self, y: u32) {
        let x = self
            .arena
            .left(y)
            .expect("right rotation requires a left child");
        trace!(target: "rbtree::rebalance", y, x, "right rotate");

        let inner = self.arena.right(x);
        self.arena.node_mut(y).left = inner;
        if let Some(inner) = inner {
            self.arena.node_mut(inner).parent = Some(y);
        }

        let parent = self.arena.parent(y);
        self.arena.node_mut(x).parent = parent;
        self.replace_child(parent, y, Some(x));

        self.arena.node_mut(x).right = Some(y);
        self.arena.node_mut(y).parent = Some(x);
    }

    /// Moves `node` one level down towards `side`, so the fixups can handle a
    /// case and its mirror with the same code.
    pub(crate) fn rotate(&mut self, node: u32, side: Side) {
        match side {
            Side::Left => self.left_rotate(node),
            Side::Right => self.right_rotate(node),
        }
    }

    /// Points whatever referenced `old` (its parent's child link, or the root)
    /// at `new`. Does not touch `new`'s own parent link.
    pub(crate) fn replace_child(&mut self, parent: Option<u32>, old: u32, new: Option<u32>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent_node = self.arena.node_mut(parent);
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;
    use crate::tree::node::{Color, Side};
    use rstest::rstest;

    /// Builds `2(1, 4(3, 5))` without rebalancing.
    fn right_leaning() -> (RedBlackTree<i32>, [u32; 5]) {
        let mut tree = RedBlackTree::new();
        let indices = [2, 1, 4, 3, 5].map(|key| tree.attach(key));
        for index in indices {
            tree.arena.set_color(index, Color::Black);
        }
        (tree, indices)
    }

    fn shape(tree: &RedBlackTree<i32>, index: u32) -> (i32, Option<i32>, Option<i32>, Option<i32>) {
        let node = tree.arena.node(index);
        let key_of = |link: Option<u32>| link.map(|i| tree.arena.node(i).key);
        (node.key, key_of(node.parent), key_of(node.left), key_of(node.right))
    }

    #[rstest]
    fn test_left_rotate_at_root() {
        let (mut tree, [two, one, four, three, five]) = right_leaning();
        tree.left_rotate(two);

        assert_eq!(tree.root, Some(four));
        assert_eq!(shape(&tree, four), (4, None, Some(2), Some(5)));
        assert_eq!(shape(&tree, two), (2, Some(4), Some(1), Some(3)));
        assert_eq!(shape(&tree, three), (3, Some(2), None, None));
        assert_eq!(shape(&tree, one), (1, Some(2), None, None));
        assert_eq!(shape(&tree, five), (5, Some(4), None, None));
    }

    #[rstest]
    fn test_right_rotate_undoes_left_rotate() {
        let (mut tree, [two, _, four, _, _]) = right_leaning();
        let before: Vec<i32> = tree.pre_order().copied().collect();

        tree.left_rotate(two);
        tree.right_rotate(four);

        assert_eq!(tree.root, Some(two));
        assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), before);
    }

    #[rstest]
    fn test_rotate_below_root_rewires_grandparent() {
        let (mut tree, [two, _, four, three, five]) = right_leaning();
        tree.right_rotate(four);

        assert_eq!(tree.root, Some(two));
        assert_eq!(shape(&tree, two), (2, None, Some(1), Some(3)));
        assert_eq!(shape(&tree, three), (3, Some(2), None, Some(4)));
        assert_eq!(shape(&tree, four), (4, Some(3), None, Some(5)));
        assert_eq!(shape(&tree, five).1, Some(4));
    }

    #[rstest]
    fn test_rotation_preserves_in_order() {
        let (mut tree, [two, ..]) = right_leaning();
        tree.left_rotate(two);
        assert_eq!(
            tree.in_order().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[rstest]
    fn test_rotate_by_side_matches_named_rotations() {
        let (mut by_name, [two, ..]) = right_leaning();
        let (mut by_side, _) = right_leaning();
        by_name.left_rotate(two);
        by_side.rotate(two, Side::Left);
        assert_eq!(
            by_name.pre_order().collect::<Vec<_>>(),
            by_side.pre_order().collect::<Vec<_>>()
        );
    }

    #[rstest]
    #[should_panic(expected = "left rotation requires a right child")]
    fn test_left_rotate_without_right_child_panics() {
        let (mut tree, [_, one, ..]) = right_leaning();
        tree.left_rotate(one);
    }

    #[rstest]
    #[should_panic(expected = "right rotation requires a left child")]
    fn test_right_rotate_without_left_child_panics() {
        let (mut tree, [_, _, _, _, five]) = right_leaning();
        tree.right_rotate(five);
    }
}
