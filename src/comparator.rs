//! Pluggable key ordering.
//!
//! A [`RedBlackTree`](crate::RedBlackTree) never calls `<` on its keys
//! directly. Every comparison goes through a [`Comparator`], so keys that are
//! not `Ord`, or that need a non-default order, can still be stored.
//!
//! The comparator must describe a total order: consistent, antisymmetric and
//! transitive. A comparator that is not will not cause memory unsafety, but
//! [`validate`](crate::RedBlackTree::validate) will start reporting
//! violations.

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implemented for [`NaturalOrder`], [`ReverseOrder`] and every closure or
/// function of type `Fn(&K, &K) -> Ordering`.
///
/// # Examples
///
/// ```rust
/// use rbtree::RedBlackTree;
///
/// // Order strings by length, then lexically.
/// let mut tree = RedBlackTree::with_comparator(|a: &String, b: &String| {
///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
/// });
/// tree.insert("ccc".to_string());
/// tree.insert("a".to_string());
/// tree.insert("bb".to_string());
///
/// let keys: Vec<&String> = tree.in_order().collect();
/// assert_eq!(keys, ["a", "bb", "ccc"]);
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}
