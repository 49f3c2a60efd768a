//! Chain Nodes
//!
//! A node holds one byte plus its forward and backward links. Nodes are stored
//! in the owning sequence's arena and refer to each other by [`NodeId`], so a
//! link is a relation between slots and never decides a node's lifetime.

use core::fmt;

/// Dense index of a node inside its sequence's arena.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Slot index in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One byte in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) byte: u8,
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
}

impl Node {
    #[inline]
    pub(crate) fn new(byte: u8, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self { byte, next, prev }
    }

    #[inline]
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// Following node, `None` at the tail.
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Preceding node, `None` at the head.
    #[inline]
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }
}
