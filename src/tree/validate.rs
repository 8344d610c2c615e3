//! Structural self-check.

use std::cmp::Ordering;

use super::RedBlackTree;
use super::node::{Arena, Color};
use crate::comparator::Comparator;
use crate::error::InvariantViolation;

impl<K, C: Comparator<K>> RedBlackTree<K, C> {
    /// Checks every red-black and binary-search-tree invariant.
    ///
    /// Runs in O(N). Debug builds call this after each mutation on small
    /// trees; it is public so that callers with custom comparators can check
    /// that their ordering is consistent.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..100).rev().collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            return match self.length {
                0 => Ok(()),
                recorded => Err(InvariantViolation::LengthMismatch {
                    counted: 0,
                    recorded,
                }),
            };
        };

        if self.arena.parent(root).is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if self.arena.color(root) != Color::Black {
            return Err(InvariantViolation::RootNotBlack);
        }

        let mut counted = 0;
        check_subtree(&self.arena, root, &mut counted)?;
        if counted != self.length {
            return Err(InvariantViolation::LengthMismatch {
                counted,
                recorded: self.length,
            });
        }

        let mut keys = self.in_order();
        if let Some(mut previous) = keys.next() {
            for key in keys {
                if self.comparator.compare(previous, key) == Ordering::Greater {
                    return Err(InvariantViolation::OrderViolation);
                }
                previous = key;
            }
        }
        Ok(())
    }
}

/// Checks links and colors below `index` and returns its black-height,
/// counting `index` itself.
fn check_subtree<K>(
    arena: &Arena<K>,
    index: u32,
    counted: &mut usize,
) -> Result<usize, InvariantViolation> {
    *counted += 1;
    let is_red = arena.color(index) == Color::Red;

    let mut heights = [0; 2];
    for (height, child) in heights
        .iter_mut()
        .zip([arena.left(index), arena.right(index)])
    {
        let Some(child) = child else {
            continue;
        };
        if arena.parent(child) != Some(index) {
            return Err(InvariantViolation::BrokenParentLink {
                parent: index,
                child,
            });
        }
        if is_red && arena.color(child) == Color::Red {
            return Err(InvariantViolation::RedRedEdge { node: index });
        }
        *height = check_subtree(arena, child, counted)?;
    }

    let [left, right] = heights;
    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { left, right });
    }
    Ok(left + usize::from(!is_red))
}
