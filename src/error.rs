//! Error types for tree operations.
//!
//! Absence is usually reported through `Option` (`search`, `remove`,
//! `minimum`). The `try_*` variants and handle-based operations report it
//! through [`TreeError`] instead. [`InvariantViolation`] is produced by
//! [`RedBlackTree::validate`](crate::RedBlackTree::validate).

use std::fmt;

use crate::tree::NodeHandle;

/// Represents errors that can occur when using a [`RedBlackTree`](crate::RedBlackTree).
///
/// # Examples
///
/// ```rust
/// use rbtree::{RedBlackTree, TreeError};
///
/// let mut tree: RedBlackTree<i32> = RedBlackTree::new();
/// assert_eq!(tree.try_minimum(), Err(TreeError::EmptyTree));
/// assert_eq!(tree.try_remove(&7), Err(TreeError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested key is not present in the tree.
    NotFound,
    /// The operation needs at least one node but the tree is empty.
    EmptyTree,
    /// The handle refers to a node that has been removed or destroyed.
    StaleHandle(NodeHandle),
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "key not found"),
            Self::EmptyTree => write!(formatter, "tree is empty"),
            Self::StaleHandle(handle) => {
                write!(formatter, "stale node handle: {handle}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// A broken red-black or binary-search-tree property.
///
/// Returned by [`RedBlackTree::validate`](crate::RedBlackTree::validate). A
/// correct tree never produces one; seeing one means the comparator is not a
/// total order or the structure has been corrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RootNotBlack,
    /// The root node has a parent link.
    RootHasParent,
    /// A child's parent link does not point back at its parent.
    BrokenParentLink {
        /// Arena index of the parent.
        parent: u32,
        /// Arena index of the child.
        child: u32,
    },
    /// A red node has a red child.
    RedRedEdge {
        /// Arena index of the red parent.
        node: u32,
    },
    /// Two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// In-order traversal produced a key smaller than its predecessor.
    OrderViolation,
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch {
        /// Nodes reachable from the root.
        counted: usize,
        /// Length recorded by the tree.
        recorded: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotBlack => write!(formatter, "root is not black"),
            Self::RootHasParent => write!(formatter, "root has a parent"),
            Self::BrokenParentLink { parent, child } => write!(
                formatter,
                "broken parent link: node {child} is a child of {parent} but points elsewhere"
            ),
            Self::RedRedEdge { node } => {
                write!(formatter, "red node {node} has a red child")
            }
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black height mismatch: left subtree {left}, right subtree {right}"
            ),
            Self::OrderViolation => write!(formatter, "in-order keys are not sorted"),
            Self::LengthMismatch { counted, recorded } => write!(
                formatter,
                "length mismatch: {counted} reachable nodes, {recorded} recorded"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
