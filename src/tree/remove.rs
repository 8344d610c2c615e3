//! Removal and the remove fixup.

use tracing::trace;

use super::RedBlackTree;
use super::node::{Color, NodeHandle, Side};
use crate::comparator::Comparator;
use crate::error::TreeError;

impl<K, C: Comparator<K>> RedBlackTree<K, C> {
    /// Removes one node whose key equals `key` and returns its key.
    ///
    /// Returns `None`, leaving the tree untouched, if no such key exists.
    /// With duplicates, the node found first by [`search`](Self::search) is
    /// removed.
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
    /// let mut tree: RedBlackTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let index = self.find_index(key)?;
        Some(self.remove_at(index))
    }

    /// Like [`remove`](Self::remove), but reports a missing key as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if `key` is not in the tree.
    pub fn try_remove(&mut self, key: &K) -> Result<K, TreeError> {
        self.remove(key).ok_or(TreeError::NotFound)
    }

    /// Removes exactly the node behind `handle` and returns its key.
    ///
    /// Useful with duplicate keys, where `remove` picks an arbitrary match.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node no longer exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let handle = tree.insert(7);
    /// assert_eq!(tree.remove_node(handle), Ok(7));
    /// assert!(tree.remove_node(handle).is_err());
    /// ```
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<K, TreeError> {
        let index = self.resolve(handle)?;
        Ok(self.remove_at(index))
    }

    fn remove_at(&mut self, node: u32) -> K {
        let left = self.arena.left(node);
        let right = self.arena.right(node);

        let (child, parent, removed_color) = if let (Some(left), Some(right)) = (left, right) {
            // The successor has no left child, so it can be unhooked like a
            // single-child node and then dropped into `node`'s position.
            let replace = self.arena.subtree_minimum(right);
            let node_parent = self.arena.parent(node);
            self.replace_child(node_parent, node, Some(replace));

            let child = self.arena.right(replace);
            let removed_color = self.arena.color(replace);
            let mut parent = self
                .arena
                .parent(replace)
                .expect("successor of a two-child node has a parent");

            if parent == node {
                parent = replace;
            } else {
                if let Some(child) = child {
                    self.arena.node_mut(child).parent = Some(parent);
                }
                self.arena.node_mut(parent).left = child;
                self.arena.node_mut(replace).right = Some(right);
                self.arena.node_mut(right).parent = Some(replace);
            }

            let node_color = self.arena.color(node);
            let replace_node = self.arena.node_mut(replace);
            replace_node.parent = node_parent;
            replace_node.color = node_color;
            replace_node.left = Some(left);
            self.arena.node_mut(left).parent = Some(replace);

            (child, Some(parent), removed_color)
        } else {
            let child = left.or(right);
            let parent = self.arena.parent(node);
            if let Some(child) = child {
                self.arena.node_mut(child).parent = parent;
            }
            self.replace_child(parent, node, child);
            (child, parent, self.arena.color(node))
        };

        self.length -= 1;
        if removed_color == Color::Black {
            self.remove_fix_up(child, parent);
        }
        let removed = self.arena.release(node);
        self.debug_validate();
        removed.key
    }

    /// Restores black-height balance after a black node left the path
    /// through `node` (which may be an absent position under `parent`).
    fn remove_fix_up(&mut self, mut node: Option<u32>, mut parent: Option<u32>) {
        while self.arena.is_black(node) && node != self.root {
            let parent_index = parent.expect("a non-root position has a parent");
            let side = if self.arena.left(parent_index) == node {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self.sibling(parent_index, side);

            if self.arena.color(sibling) == Color::Red {
                trace!(target: "rbtree::rebalance", sibling, "remove case 1: red sibling");
                self.arena.set_color(sibling, Color::Black);
                self.arena.set_color(parent_index, Color::Red);
                self.rotate(parent_index, side);
                sibling = self.sibling(parent_index, side);
            }

            let near = self.arena.child(sibling, side);
            let far = self.arena.child(sibling, side.opposite());
            if self.arena.is_black(near) && self.arena.is_black(far) {
                trace!(target: "rbtree::rebalance", sibling, "remove case 2: black nephews");
                self.arena.set_color(sibling, Color::Red);
                node = Some(parent_index);
                parent = self.arena.parent(parent_index);
                continue;
            }

            if self.arena.is_black(far) {
                trace!(target: "rbtree::rebalance", sibling, "remove case 3: red near nephew");
                if let Some(near) = near {
                    self.arena.set_color(near, Color::Black);
                }
                self.arena.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(parent_index, side);
            }

            trace!(target: "rbtree::rebalance", sibling, "remove case 4: red far nephew");
            let parent_color = self.arena.color(parent_index);
            self.arena.set_color(sibling, parent_color);
            self.arena.set_color(parent_index, Color::Black);
            if let Some(far) = self.arena.child(sibling, side.opposite()) {
                self.arena.set_color(far, Color::Black);
            }
            self.rotate(parent_index, side);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            self.arena.set_color(node, Color::Black);
        }
    }

    /// Sibling of the position on `side` of `parent`.
    fn sibling(&self, parent: u32, side: Side) -> u32 {
        self.arena
            .child(parent, side.opposite())
            .expect("a black-deficient position always has a sibling")
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;
    use crate::TreeError;
    use crate::tree::node::Color;
    use rstest::rstest;

    const SCENARIO: [i32; 9] = [10, 40, 30, 60, 90, 70, 20, 50, 80];

    #[rstest]
    fn test_remove_missing_key_is_noop() {
        let mut tree: RedBlackTree<i32> = SCENARIO.into_iter().collect();
        let before: Vec<i32> = tree.pre_order().copied().collect();
        assert_eq!(tree.remove(&35), None);
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), before);
    }

    #[rstest]
    fn test_try_remove_reports_not_found() {
        let mut tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.try_remove(&1), Err(TreeError::NotFound));
        tree.insert(1);
        assert_eq!(tree.try_remove(&1), Ok(1));
    }

    #[rstest]
    fn test_remove_only_node_empties_tree() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[rstest]
    fn test_remove_red_leaf_needs_no_fixup() {
        let mut tree: RedBlackTree<i32> = [20, 10, 30].into_iter().collect();
        assert_eq!(tree.remove(&10), Some(10));
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&20));
        assert_eq!(tree.color(tree.search(&30).unwrap()), Ok(Color::Red));
    }

    #[rstest]
    fn test_remove_root_with_two_children_promotes_successor() {
        let mut tree: RedBlackTree<i32> = [20, 10, 30].into_iter().collect();
        assert_eq!(tree.remove(&20), Some(20));
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&30));
        assert_eq!(tree.color(root), Ok(Color::Black));
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[rstest]
    fn test_remove_successor_deeper_in_right_subtree() {
        let mut tree: RedBlackTree<i32> = (1..=8).collect();
        assert_eq!(tree.remove(&4), Some(4));
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root), Some(&5));
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_remove_scenario_in_insertion_order() {
        let mut tree: RedBlackTree<i32> = SCENARIO.into_iter().collect();
        for (removed, key) in SCENARIO.iter().enumerate() {
            assert_eq!(tree.remove(key), Some(*key));
            assert_eq!(tree.len(), SCENARIO.len() - removed - 1);
            assert!(tree.validate().is_ok(), "invalid after removing {key}");
            assert!(!tree.contains(key));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[rstest]
    fn test_remove_node_targets_exact_duplicate() {
        let mut tree = RedBlackTree::new();
        let first = tree.insert(5);
        let second = tree.insert(5);
        tree.insert(6);

        assert_eq!(tree.remove_node(second), Ok(5));
        assert_eq!(tree.get(first), Some(&5));
        assert_eq!(tree.get(second), None);
        assert_eq!(tree.remove_node(second), Err(TreeError::StaleHandle(second)));
    }

    #[rstest]
    fn test_removed_slot_is_reused() {
        let mut tree: RedBlackTree<i32> = (0..4).collect();
        let capacity = tree.arena.capacity();
        tree.remove(&2);
        tree.insert(9);
        assert_eq!(tree.arena.capacity(), capacity);
    }
}
