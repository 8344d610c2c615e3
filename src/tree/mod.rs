//! Mutable red-black tree backed by a node arena.
//!
//! This module provides [`RedBlackTree`], an ordered container that keeps
//! itself balanced with the classic red-black rules.
//!
//! # Overview
//!
//! - O(log N) insert, remove and search
//! - O(log N) minimum/maximum
//! - amortised O(1) successor/predecessor steps
//! - O(1) `len` and `is_empty`
//!
//! Duplicate keys are allowed. A key equal to an existing one is placed in
//! that node's right subtree, so equal keys come out of an in-order walk in
//! insertion order.
//!
//! # Examples
//!
//! ```rust
//! use rbtree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 40, 30, 60, 90, 70, 20, 50, 80] {
//!     tree.insert(key);
//! }
//!
//! let keys: Vec<i32> = tree.in_order().copied().collect();
//! assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
//! assert_eq!(tree.minimum(), Some(&10));
//! assert_eq!(tree.maximum(), Some(&90));
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in an arena and linked by index, with a parent link on
//! every node. The tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaf positions (absent children) are black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a leaf position has the same number of black nodes

mod dump;
mod insert;
mod node;
mod remove;
mod rotation;
mod search;
mod traversal;
mod validate;

use std::fmt;

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::TreeError;

pub use dump::TreeDump;
pub use node::{Color, NodeHandle};
pub use traversal::{InOrder, PostOrder, PreOrder};

use node::Arena;

/// Trees up to this size re-validate themselves after every mutation in
/// debug builds.
const DEBUG_VALIDATION_LIMIT: usize = 512;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered container implemented as a red-black tree.
///
/// Keys are ordered by a [`Comparator`], [`NaturalOrder`] by default.
///
/// # Time Complexity
///
/// | Operation                   | Complexity        |
/// |-----------------------------|-------------------|
/// | `new`                       | O(1)              |
/// | `insert`                    | O(log N)          |
/// | `remove`                    | O(log N)          |
/// | `search`                    | O(log N)          |
/// | `minimum`/`maximum`         | O(log N)          |
/// | `successor`/`predecessor`   | O(log N)          |
/// | `pre_order`/`in_order`/`post_order` | O(N) total |
/// | `destroy`                   | O(N)              |
/// | `len`/`is_empty`            | O(1)              |
///
/// # Examples
///
/// ```rust
/// use rbtree::RedBlackTree;
///
/// let mut tree: RedBlackTree<i32> = (1..=7).collect();
/// assert_eq!(tree.len(), 7);
///
/// let handle = tree.search(&4).expect("4 was inserted");
/// let next = tree.successor(handle).unwrap().unwrap();
/// assert_eq!(tree.get(next), Some(&5));
///
/// assert_eq!(tree.remove(&4), Some(4));
/// assert!(!tree.contains(&4));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, C = NaturalOrder> {
    arena: Arena<K>,
    root: Option<u32>,
    length: usize,
    comparator: C,
}

impl<K> RedBlackTree<K, NaturalOrder> {
    /// Creates a new empty tree ordered by `K`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, C> RedBlackTree<K, C> {
    /// Creates a new empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::{RedBlackTree, ReverseOrder};
    ///
    /// let mut tree = RedBlackTree::with_comparator(ReverseOrder);
    /// tree.extend([1, 3, 2]);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the comparator ordering this tree.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns a handle to the root node, or `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeHandle> {
        self.root.map(|index| self.arena.handle(index))
    }

    /// Returns the key stored behind `handle`, or `None` if it is stale.
    #[must_use]
    pub fn get(&self, handle: NodeHandle) -> Option<&K> {
        self.arena
            .resolve(handle)
            .map(|index| &self.arena.node(index).key)
    }

    /// Returns the color of the node behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node no longer exists.
    pub fn color(&self, handle: NodeHandle) -> Result<Color, TreeError> {
        self.resolve(handle).map(|index| self.arena.color(index))
    }

    /// Returns the parent of the node behind `handle`; `Ok(None)` for the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::StaleHandle`] if the node no longer exists.
    pub fn parent(&self, handle: NodeHandle) -> Result<Option<NodeHandle>, TreeError> {
        let index = self.resolve(handle)?;
        Ok(self.handle_of(self.arena.parent(index)))
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// Red-black balancing keeps this below `2 * log2(len + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        fn height_of<K>(arena: &Arena<K>, link: Option<u32>) -> usize {
            link.map_or(0, |index| {
                1 + height_of(arena, arena.left(index)).max(height_of(arena, arena.right(index)))
            })
        }
        height_of(&self.arena, self.root)
    }

    /// Returns the number of black nodes on any path from the root down to a
    /// leaf position, counting the root. An empty tree has black-height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=7).collect();
    /// assert_eq!(tree.black_height(), 2);
    /// ```
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.root;
        while let Some(index) = cursor {
            if self.arena.color(index) == Color::Black {
                count += 1;
            }
            cursor = self.arena.left(index);
        }
        count
    }

    fn resolve(&self, handle: NodeHandle) -> Result<u32, TreeError> {
        self.arena
            .resolve(handle)
            .ok_or(TreeError::StaleHandle(handle))
    }

    fn handle_of(&self, link: Option<u32>) -> Option<NodeHandle> {
        link.map(|index| self.arena.handle(index))
    }
}

impl<K, C: Comparator<K>> RedBlackTree<K, C> {
    /// Panics when a small tree fails validation in a debug build.
    #[inline]
    fn debug_validate(&self) {
        if cfg!(debug_assertions) && self.length <= DEBUG_VALIDATION_LIMIT {
            let result = self.validate();
            debug_assert!(
                result.is_ok(),
                "red-black invariant violated: {:?}",
                result.err()
            );
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, C: Default> Default for RedBlackTree<K, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Comparator<K> + Default> FromIterator<K> for RedBlackTree<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, C: Comparator<K>> Extend<K> for RedBlackTree<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> IntoIterator for &'a RedBlackTree<K, C> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K: PartialEq, C> PartialEq for RedBlackTree<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.in_order().eq(other.in_order())
    }
}

impl<K: Eq, C> Eq for RedBlackTree<K, C> {}

impl<K: fmt::Debug, C> fmt::Debug for RedBlackTree<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.in_order()).finish()
    }
}

impl<K: fmt::Display, C> fmt::Display for RedBlackTree<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(NodeHandle: Send, Sync, Copy);
static_assertions::assert_eq_size!(NodeHandle, u64);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, C> serde::Serialize for RedBlackTree<K, C>
where
    K: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            sequence.serialize_element(key)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<K, C> {
    marker: std::marker::PhantomData<(K, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::de::Visitor<'de> for RedBlackTreeVisitor<K, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = RedBlackTree<K, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::default();
        while let Some(key) = access.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C> serde::Deserialize<'de> for RedBlackTree<K, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
