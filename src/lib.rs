//! # rbtree
//!
//! An arena-backed red-black tree with pluggable ordering.
//!
//! ## Overview
//!
//! [`RedBlackTree`] is a mutable, ordered container with O(log N) insert,
//! remove and search. Nodes live in a growable arena and refer to each other
//! by index, so parent links need no reference counting and no `unsafe`.
//!
//! - **Ordering**: any [`Comparator`]; [`NaturalOrder`] by default
//! - **Handles**: [`NodeHandle`]s address individual nodes for
//!   successor/predecessor walks and detect removal
//! - **Traversal**: pre-order, in-order and post-order iterators
//! - **Diagnostics**: [`RedBlackTree::validate`] and [`RedBlackTree::dump`]
//!
//! ## Feature Flags
//!
//! - `serde`: serialize a tree as the sequence of its keys in order
//! - `cli`: build the `rbtree-demo` binary
//!
//! ## Example
//!
//! ```rust
//! use rbtree::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 40, 30, 60, 90, 70, 20, 50, 80] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.minimum(), Some(&10));
//! assert_eq!(tree.maximum(), Some(&90));
//!
//! let forty = tree.search(&40).unwrap();
//! let fifty = tree.successor(forty).unwrap().unwrap();
//! assert_eq!(tree.get(fifty), Some(&50));
//! assert_eq!(tree.predecessor(fifty), Ok(Some(forty)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use rbtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::*;
    pub use crate::tree::*;
}

pub mod comparator;
pub mod error;
pub mod tree;

pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use error::{InvariantViolation, TreeError};
pub use tree::{Color, InOrder, NodeHandle, PostOrder, PreOrder, RedBlackTree, TreeDump};
