//! Insertion and the insert fixup.

use std::cmp::Ordering;

use tracing::trace;

use super::RedBlackTree;
use super::node::{Color, Node, NodeHandle, Side};
use crate::comparator::Comparator;

impl<K, C: Comparator<K>> RedBlackTree<K, C> {
    /// Inserts `key` and returns a handle to its node.
    ///
    /// Duplicates are kept: a key equal to an existing one goes into the
    /// right subtree of the equal node.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let handle = tree.insert(42);
    /// tree.insert(42);
    ///
    /// assert_eq!(tree.get(handle), Some(&42));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> NodeHandle {
        let index = self.attach(key);
        self.insert_fix_up(index);
        self.debug_validate();
        self.arena.handle(index)
    }

    /// Links a new red node at its binary-search-tree position without
    /// rebalancing.
    pub(crate) fn attach(&mut self, key: K) -> u32 {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(index) = cursor {
            parent = Some(index);
            side = match self.comparator.compare(&key, &self.arena.node(index).key) {
                Ordering::Less => Side::Left,
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            cursor = self.arena.child(index, side);
        }

        let index = self.arena.allocate(Node::new_red(key, parent));
        match parent {
            None => self.root = Some(index),
            Some(parent) => self.arena.node_mut(parent).set_child(side, Some(index)),
        }
        self.length += 1;
        index
    }

    /// Restores the red-black properties after `node` was attached red.
    ///
    /// The only possible violation is a red `node` under a red parent. Each
    /// pass either pushes it two levels up (red uncle) or removes it with at
    /// most two rotations (black uncle).
    fn insert_fix_up(&mut self, mut node: u32) {
        while let Some(mut parent) = self
            .arena
            .parent(node)
            .filter(|&parent| self.arena.color(parent) == Color::Red)
        {
            let grandparent = self
                .arena
                .parent(parent)
                .expect("a red node is never the root");
            let side = self.arena.side_of(parent);
            let uncle = self.arena.child(grandparent, side.opposite());

            if self.arena.is_red(uncle) {
                trace!(target: "rbtree::rebalance", node, "insert case 1: red uncle");
                if let Some(uncle) = uncle {
                    self.arena.set_color(uncle, Color::Black);
                }
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.arena.child(parent, side.opposite()) == Some(node) {
                trace!(target: "rbtree::rebalance", node, "insert case 2: inner child");
                self.rotate(parent, side);
                std::mem::swap(&mut node, &mut parent);
            }

            trace!(target: "rbtree::rebalance", node, "insert case 3: outer child");
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.arena.set_color(root, Color::Black);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;
    use crate::tree::node::Color;
    use rstest::rstest;

    fn colors(tree: &RedBlackTree<i32>) -> Vec<(i32, Color)> {
        let mut cursor = tree.root.map(|root| tree.arena.subtree_minimum(root));
        let mut result = Vec::new();
        while let Some(index) = cursor {
            result.push((tree.arena.node(index).key, tree.arena.color(index)));
            cursor = tree.arena.successor(index);
        }
        result
    }

    #[rstest]
    fn test_first_insert_becomes_black_root() {
        let mut tree = RedBlackTree::new();
        let handle = tree.insert(10);
        assert_eq!(tree.root(), Some(handle));
        assert_eq!(tree.color(handle), Ok(Color::Black));
    }

    #[rstest]
    fn test_red_uncle_recolors() {
        let mut tree: RedBlackTree<i32> = [20, 10, 30].into_iter().collect();
        tree.insert(5);
        assert_eq!(
            colors(&tree),
            vec![
                (5, Color::Red),
                (10, Color::Black),
                (20, Color::Black),
                (30, Color::Black)
            ]
        );
    }

    #[rstest]
    #[case::left_left([30, 20, 10])]
    #[case::left_right([30, 10, 20])]
    #[case::right_right([10, 20, 30])]
    #[case::right_left([10, 30, 20])]
    fn test_black_uncle_rotates_middle_key_to_top(#[case] keys: [i32; 3]) {
        let tree: RedBlackTree<i32> = keys.into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&20));
        assert_eq!(
            colors(&tree),
            vec![(10, Color::Red), (20, Color::Black), (30, Color::Red)]
        );
    }

    #[rstest]
    fn test_ascending_insert_shape() {
        let tree: RedBlackTree<i32> = (1..=7).collect();
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&2));
        assert_eq!(tree.color(root), Ok(Color::Black));
        assert_eq!(tree.black_height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_eighth_ascending_key_lifts_four_to_root() {
        let tree: RedBlackTree<i32> = (1..=8).collect();
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&4));
        assert_eq!(tree.color(root), Ok(Color::Black));
        assert_eq!(tree.black_height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_duplicates_go_right() {
        let mut tree = RedBlackTree::new();
        let first = tree.insert(5);
        let second = tree.insert(5);
        assert_eq!(tree.parent(second), Ok(Some(first)));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![5, 5]);
    }
}
