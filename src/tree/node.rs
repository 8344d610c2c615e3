//! Node storage.
//!
//! Nodes live in an [`Arena`] and refer to each other by `u32` index.
//! `None` stands for an absent child or parent, and absent children are
//! treated as black everywhere.
//!
//! Each slot carries a generation counter that is bumped when its node is
//! released. A [`NodeHandle`] remembers the generation it was issued with,
//! so a handle to a removed node is detected instead of silently aliasing
//! whatever node reuses the slot.

use std::fmt;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// Red node. Never the root, never the parent of another red node.
    Red,
    /// Black node. Absent children also count as black.
    Black,
}

impl Color {
    /// Single-letter tag used by the tree dump: `R` or `B`.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(formatter, "red"),
            Self::Black => write!(formatter, "black"),
        }
    }
}

// =============================================================================
// Side Definition
// =============================================================================

/// Which child of a parent a position is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Handle
// =============================================================================

/// A copyable reference to one node of a [`RedBlackTree`](crate::RedBlackTree).
///
/// Handles are returned by `insert`, `search`, `successor` and friends, and
/// are only meaningful for the tree that issued them. Once the node is
/// removed (or the tree destroyed) the handle becomes stale and operations
/// taking it return [`TreeError::StaleHandle`](crate::TreeError::StaleHandle).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

impl NodeHandle {
    /// Arena slot of the node.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when the handle was issued.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}@{}", self.index, self.generation)
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the red-black tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<u32>,
    pub(crate) left: Option<u32>,
    pub(crate) right: Option<u32>,
}

impl<K> Node<K> {
    /// Creates a new red node with no children.
    pub(crate) const fn new_red(key: K, parent: Option<u32>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) const fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: Option<u32>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

// =============================================================================
// Arena
// =============================================================================

#[derive(Clone, Debug)]
struct Slot<K> {
    generation: u32,
    node: Option<Node<K>>,
}

/// Growable node storage with slot reuse.
#[derive(Clone, Debug)]
pub(crate) struct Arena<K> {
    slots: Vec<Slot<K>>,
    free: Vec<u32>,
}

impl<K> Arena<K> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its index, reusing a released slot if any.
    pub(crate) fn allocate(&mut self, node: Node<K>) -> u32 {
        if let Some(index) = self.free.pop() {
            self.slots[index as usize].node = Some(node);
            return index;
        }
        let index = u32::try_from(self.slots.len()).expect("arena holds at most u32::MAX nodes");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        index
    }

    /// Takes the node out of its slot and invalidates outstanding handles.
    pub(crate) fn release(&mut self, index: u32) -> Node<K> {
        let slot = &mut self.slots[index as usize];
        let node = slot.node.take().expect("released slot holds a live node");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        node
    }

    /// Number of slots ever allocated, live or free.
    #[cfg(test)]
    pub(crate) const fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn node(&self, index: u32) -> &Node<K> {
        self.slots[index as usize]
            .node
            .as_ref()
            .expect("link points at a live node")
    }

    pub(crate) fn node_mut(&mut self, index: u32) -> &mut Node<K> {
        self.slots[index as usize]
            .node
            .as_mut()
            .expect("link points at a live node")
    }

    pub(crate) fn handle(&self, index: u32) -> NodeHandle {
        NodeHandle {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Maps a handle back to its index if the node is still live.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<u32> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.node.is_some())
            .map(|_| handle.index)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub(crate) fn parent(&self, index: u32) -> Option<u32> {
        self.node(index).parent
    }

    pub(crate) fn left(&self, index: u32) -> Option<u32> {
        self.node(index).left
    }

    pub(crate) fn right(&self, index: u32) -> Option<u32> {
        self.node(index).right
    }

    pub(crate) fn child(&self, index: u32, side: Side) -> Option<u32> {
        self.node(index).child(side)
    }

    pub(crate) fn color(&self, index: u32) -> Color {
        self.node(index).color
    }

    pub(crate) fn set_color(&mut self, index: u32, color: Color) {
        self.node_mut(index).color = color;
    }

    /// Absent positions are black.
    pub(crate) fn is_black(&self, link: Option<u32>) -> bool {
        !self.is_red(link)
    }

    pub(crate) fn is_red(&self, link: Option<u32>) -> bool {
        link.is_some_and(|index| self.color(index) == Color::Red)
    }

    /// Which side of its parent `index` hangs on. The root reports `Left`.
    pub(crate) fn side_of(&self, index: u32) -> Side {
        match self.parent(index) {
            Some(parent) if self.right(parent) == Some(index) => Side::Right,
            _ => Side::Left,
        }
    }

    /// Leftmost node of the subtree rooted at `index`.
    pub(crate) fn subtree_minimum(&self, mut index: u32) -> u32 {
        while let Some(left) = self.left(index) {
            index = left;
        }
        index
    }

    /// Rightmost node of the subtree rooted at `index`.
    pub(crate) fn subtree_maximum(&self, mut index: u32) -> u32 {
        while let Some(right) = self.right(index) {
            index = right;
        }
        index
    }

    /// Next node in key order.
    pub(crate) fn successor(&self, index: u32) -> Option<u32> {
        if let Some(right) = self.right(index) {
            return Some(self.subtree_minimum(right));
        }
        let mut current = index;
        let mut parent = self.parent(current);
        while let Some(ancestor) = parent {
            if self.right(ancestor) != Some(current) {
                break;
            }
            current = ancestor;
            parent = self.parent(ancestor);
        }
        parent
    }

    /// Previous node in key order.
    pub(crate) fn predecessor(&self, index: u32) -> Option<u32> {
        if let Some(left) = self.left(index) {
            return Some(self.subtree_maximum(left));
        }
        let mut current = index;
        let mut parent = self.parent(current);
        while let Some(ancestor) = parent {
            if self.left(ancestor) != Some(current) {
                break;
            }
            current = ancestor;
            parent = self.parent(ancestor);
        }
        parent
    }
}
