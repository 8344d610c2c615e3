//! Lookup, extremes and in-order neighbours.

use std::cmp::Ordering;

use super::RedBlackTree;
use super::node::NodeHandle;
use crate::comparator::Comparator;
use crate::error::TreeError;

impl<K, C: Comparator<K>> RedBlackTree<K, C> {
    /// Returns a handle to a node whose key equals `key`.
    ///
    /// Descends recursively from the root. With duplicate keys, the match
    /// closest to the root is returned.
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
    /// let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
    /// let handle = tree.search(&20).unwrap();
    /// assert_eq!(tree.get(handle), Some(&20));
    /// assert_eq!(tree.search(&25), None);
    /// ```
    #[must_use]
    pub fn search(&self, key: &K) -> Option<NodeHandle> {
        self.search_from(self.root, key)
            .map(|index| self.arena.handle(index))
    }

    /// Recursive helper for search.
    fn search_from(&self, link: Option<u32>, key: &K) -> Option<u32> {
        let index = link?;
        match self.comparator.compare(key, &self.arena.node(index).key) {
            Ordering::Equal => Some(index),
            Ordering::Less => self.search_from(self.arena.left(index), key),
            Ordering::Greater => self.search_from(self.arena.right(index), key),
        }
    }

    /// Loop form of [`search`](Self::search); always returns the same node.
    #[must_use]
    pub fn iterative_search(&self, key: &K) -> Option<NodeHandle> {
        self.find_index(key).map(|index| self.arena.handle(index))
    }

    pub(crate) fn find_index(&self, key: &K) -> Option<u32> {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            cursor = match self.comparator.compare(key, &self.arena.node(index).key) {
                Ordering::Equal => return Some(index),
                Ordering::Less => self.arena.left(index),
                Ordering::Greater => self.arena.right(index),
            };
        }
        None
    }

    /// Returns `true` if some node's key equals `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }
}

impl<K, C> RedBlackTree<K, C> {
    /// Returns the smallest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.minimum(), Some(&1));
    ///
    /// let empty: RedBlackTree<i32> = RedBlackTree::new();
    /// assert_eq!(empty.minimum(), None);
    /// ```
    #[must_use]
    pub fn minimum(&self) -> Option<&K> {
        self.minimum_node().and_then(|handle| self.get(handle))
    }

    /// Returns the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn maximum(&self) -> Option<&K> {
        self.maximum_node().and_then(|handle| self.get(handle))
    }

    /// Like [`minimum`](Self::minimum), but reports an empty tree as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn try_minimum(&self) -> Result<&K, TreeError> {
        self.minimum().ok_or(TreeError::EmptyTree)
    }

    /// Like [`maximum`](Self::maximum), but reports an empty tree as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn try_maximum(&self) -> Result<&K, TreeError> {
        self.maximum().ok_or(TreeError::EmptyTree)
    }

    /// Returns a handle to the node with the smallest key.
    #[must_use]
    pub fn minimum_node(&self) -> Option<NodeHandle> {
        self.root
            .map(|root| self.arena.handle(self.arena.subtree_minimum(root)))
    }

    /// Returns a handle to the node with the largest key.
    #[must_use]
    pub fn maximum_node(&self) -> Option<NodeHandle> {
        self.root
            .map(|root| self.arena.handle(self.arena.subtree_maximum(root)))
    }

    /// Returns the node that follows `handle` in key order, or `Ok(None)` if
    /// `handle` is the maximum.
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
    /// let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
    /// let twenty = tree.search(&20).unwrap();
    /// let thirty = tree.successor(twenty).unwrap().unwrap();
    /// assert_eq!(tree.get(thirty), Some(&30));
    /// assert_eq!(tree.successor(thirty), Ok(None));
    /// ```
    pub fn successor(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, TreeError> {
        let index = self.resolve(handle)?;
        Ok(self.handle_of(self.arena.successor(index)))
    }

    /// Returns the node that precedes `handle` in key order, or `Ok(None)` if
    /// `handle` is the minimum.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node no longer exists.
    pub fn predecessor(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, TreeError> {
        let index = self.resolve(handle)?;
        Ok(self.handle_of(self.arena.predecessor(index)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{RedBlackTree, TreeError};
    use rstest::rstest;

    fn scenario() -> RedBlackTree<i32> {
        [10, 40, 30, 60, 90, 70, 20, 50, 80].into_iter().collect()
    }

    #[rstest]
    #[case(10)]
    #[case(50)]
    #[case(90)]
    fn test_search_variants_agree(#[case] key: i32) {
        let tree = scenario();
        let recursive = tree.search(&key);
        assert!(recursive.is_some());
        assert_eq!(recursive, tree.iterative_search(&key));
        assert_eq!(tree.get(recursive.unwrap()), Some(&key));
    }

    #[rstest]
    #[case(0)]
    #[case(55)]
    #[case(100)]
    fn test_search_missing(#[case] key: i32) {
        let tree = scenario();
        assert_eq!(tree.search(&key), None);
        assert_eq!(tree.iterative_search(&key), None);
        assert!(!tree.contains(&key));
    }

    #[rstest]
    fn test_minimum_maximum() {
        let tree = scenario();
        assert_eq!(tree.minimum(), Some(&10));
        assert_eq!(tree.maximum(), Some(&90));
        assert_eq!(tree.try_minimum(), Ok(&10));
        assert_eq!(tree.try_maximum(), Ok(&90));
    }

    #[rstest]
    fn test_minimum_maximum_of_empty_tree() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.minimum(), None);
        assert_eq!(tree.maximum(), None);
        assert_eq!(tree.minimum_node(), None);
        assert_eq!(tree.try_minimum(), Err(TreeError::EmptyTree));
        assert_eq!(tree.try_maximum(), Err(TreeError::EmptyTree));
    }

    #[rstest]
    fn test_successor_walks_whole_tree() {
        let tree = scenario();
        let mut keys = Vec::new();
        let mut cursor = tree.minimum_node();
        while let Some(handle) = cursor {
            keys.push(*tree.get(handle).unwrap());
            cursor = tree.successor(handle).unwrap();
        }
        assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[rstest]
    fn test_predecessor_walks_whole_tree_backwards() {
        let tree = scenario();
        let mut keys = Vec::new();
        let mut cursor = tree.maximum_node();
        while let Some(handle) = cursor {
            keys.push(*tree.get(handle).unwrap());
            cursor = tree.predecessor(handle).unwrap();
        }
        assert_eq!(keys, vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
    }

    #[rstest]
    fn test_extremes_have_no_outer_neighbour() {
        let tree = scenario();
        assert_eq!(tree.predecessor(tree.minimum_node().unwrap()), Ok(None));
        assert_eq!(tree.successor(tree.maximum_node().unwrap()), Ok(None));
    }

    #[rstest]
    fn test_neighbours_of_stale_handle() {
        let mut tree = scenario();
        let handle = tree.search(&30).unwrap();
        tree.remove(&30);
        assert_eq!(tree.successor(handle), Err(TreeError::StaleHandle(handle)));
        assert_eq!(tree.predecessor(handle), Err(TreeError::StaleHandle(handle)));
    }
}
