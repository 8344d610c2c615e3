//! Pre-order, in-order and post-order traversal, and teardown.
//!
//! The iterators walk parent links instead of keeping a stack, so each one
//! is a cursor plus a remaining count.

use tracing::debug;

use super::RedBlackTree;
use super::node::Arena;

// =============================================================================
// Arena-level successor functions for each order
// =============================================================================

impl<K> Arena<K> {
    /// Next node in pre-order (self, left, right).
    fn pre_order_next(&self, index: u32) -> Option<u32> {
        if let Some(child) = self.left(index).or_else(|| self.right(index)) {
            return Some(child);
        }
        let mut current = index;
        while let Some(parent) = self.parent(current) {
            if self.left(parent) == Some(current) {
                if let Some(right) = self.right(parent) {
                    return Some(right);
                }
            }
            current = parent;
        }
        None
    }

    /// First node of the subtree at `index` in post-order (left, right, self).
    fn post_order_first(&self, mut index: u32) -> u32 {
        while let Some(child) = self.left(index).or_else(|| self.right(index)) {
            index = child;
        }
        index
    }

    /// Next node in post-order. Only reads links of `index`'s ancestors, so
    /// `index` itself may be released right after this call.
    fn post_order_next(&self, index: u32) -> Option<u32> {
        let parent = self.parent(index)?;
        match self.right(parent) {
            Some(right) if right != index => Some(self.post_order_first(right)),
            _ => Some(parent),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

macro_rules! traversal_iterator {
    ($(#[$attribute:meta])* $name:ident, $advance:expr) => {
        $(#[$attribute])*
        pub struct $name<'a, K> {
            arena: &'a Arena<K>,
            next: Option<u32>,
            remaining: usize,
        }

        impl<'a, K> Iterator for $name<'a, K> {
            type Item = &'a K;

            fn next(&mut self) -> Option<Self::Item> {
                let index = self.next?;
                let advance: fn(&Arena<K>, u32) -> Option<u32> = $advance;
                self.next = advance(self.arena, index);
                self.remaining -= 1;
                Some(&self.arena.node(index).key)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.remaining, Some(self.remaining))
            }
        }

        impl<K> ExactSizeIterator for $name<'_, K> {
            fn len(&self) -> usize {
                self.remaining
            }
        }

        impl<K> std::iter::FusedIterator for $name<'_, K> {}

        impl<K> Clone for $name<'_, K> {
            fn clone(&self) -> Self {
                Self {
                    arena: self.arena,
                    next: self.next,
                    remaining: self.remaining,
                }
            }
        }
    };
}

traversal_iterator!(
    /// Iterator over keys in pre-order: each node before its subtrees.
    ///
    /// Created by [`RedBlackTree::pre_order`].
    PreOrder,
    |arena, index| arena.pre_order_next(index)
);

traversal_iterator!(
    /// Iterator over keys in ascending order.
    ///
    /// Created by [`RedBlackTree::in_order`].
    InOrder,
    |arena, index| arena.successor(index)
);

traversal_iterator!(
    /// Iterator over keys in post-order: each node after its subtrees.
    ///
    /// Created by [`RedBlackTree::post_order`].
    PostOrder,
    |arena, index| arena.post_order_next(index)
);

impl<K, C> RedBlackTree<K, C> {
    /// Visits every key, each node before its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// ```
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            arena: &self.arena,
            next: self.root,
            remaining: self.length,
        }
    }

    /// Visits every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder {
            arena: &self.arena,
            next: self.root.map(|root| self.arena.subtree_minimum(root)),
            remaining: self.length,
        }
    }

    /// Visits every key, each node after its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
    /// ```
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            arena: &self.arena,
            next: self.root.map(|root| self.arena.post_order_first(root)),
            remaining: self.length,
        }
    }

    /// Removes every node, children before parents, leaving an empty tree.
    ///
    /// Keys are dropped in post-order. Every handle issued before the call
    /// becomes stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = (0..100).collect();
    /// let handle = tree.search(&50).unwrap();
    /// tree.destroy();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.root(), None);
    /// assert_eq!(tree.get(handle), None);
    /// ```
    pub fn destroy(&mut self) {
        let mut cursor = self.root.map(|root| self.arena.post_order_first(root));
        let mut released = 0_usize;
        while let Some(index) = cursor {
            cursor = self.arena.post_order_next(index);
            drop(self.arena.release(index));
            released += 1;
        }
        self.root = None;
        self.length = 0;
        debug!(target: "rbtree", released, "destroyed tree");
    }

    /// Alias for [`destroy`](Self::destroy).
    #[inline]
    pub fn clear(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scenario() -> RedBlackTree<i32> {
        [10, 40, 30, 60, 90, 70, 20, 50, 80].into_iter().collect()
    }

    #[rstest]
    fn test_scenario_orders() {
        let tree = scenario();
        assert_eq!(
            tree.pre_order().copied().collect::<Vec<_>>(),
            vec![30, 10, 20, 60, 40, 50, 80, 70, 90]
        );
        assert_eq!(
            tree.in_order().copied().collect::<Vec<_>>(),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
        assert_eq!(
            tree.post_order().copied().collect::<Vec<_>>(),
            vec![20, 10, 50, 40, 70, 90, 80, 60, 30]
        );
    }

    #[rstest]
    fn test_empty_traversals() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.pre_order().next(), None);
        assert_eq!(tree.in_order().next(), None);
        assert_eq!(tree.post_order().next(), None);
    }

    #[rstest]
    fn test_exact_size() {
        let tree = scenario();
        let mut iterator = tree.post_order();
        assert_eq!(iterator.len(), 9);
        iterator.next();
        assert_eq!(iterator.len(), 8);
        assert_eq!(iterator.size_hint(), (8, Some(8)));
    }

    #[rstest]
    fn test_into_iterator_for_reference_is_in_order() {
        let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
        let mut keys = Vec::new();
        for key in &tree {
            keys.push(*key);
        }
        assert_eq!(keys, vec![1, 2, 3]);
    }

    struct DropRecorder {
        key: i32,
        log: Rc<RefCell<Vec<i32>>>,
    }

    impl Drop for DropRecorder {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.key);
        }
    }

    #[rstest]
    fn test_destroy_drops_each_key_once_in_post_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = RedBlackTree::with_comparator(|left: &DropRecorder, right: &DropRecorder| {
            left.key.cmp(&right.key)
        });
        for key in [10, 40, 30, 60, 90, 70, 20, 50, 80] {
            tree.insert(DropRecorder {
                key,
                log: Rc::clone(&log),
            });
        }
        let expected: Vec<i32> = tree.post_order().map(|recorder| recorder.key).collect();

        tree.destroy();

        assert_eq!(*log.borrow(), expected);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[rstest]
    fn test_tree_is_reusable_after_destroy() {
        let mut tree = scenario();
        let stale = tree.search(&40).unwrap();
        tree.clear();

        tree.insert(1);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(stale), None);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1]);
    }
}
