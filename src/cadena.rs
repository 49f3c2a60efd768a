//! Doubly-Linked Byte Sequence
//!
//! **Layout**: nodes live in a single arena (`Vec<Node>`) owned by the
//! sequence; `next`/`prev` are [`NodeId`] relations between slots.
//!
//! **Index convention**:
//! - Indices are 0-based from the head.
//! - A negative index `i` is normalized to `i + len + 1` (`-1` is the end).
//! - After normalization the index is clamped to the front or the back.
//!
//! | Operation | Time |
//! |-----------|------|
//! | `prepend` / `append` | O(K) for K inserted bytes |
//! | `insert` (middle) | O(min(i, len - i) + K) |
//! | `get` / `get_mut` | O(min(i, len - i)) |
//! | `iter` | O(len) |

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Result, SequenceError};
use crate::node::{Node, NodeId};

/// Leading byte that turns an insertion into a no-op.
pub const SENTINEL: u8 = 0;

/// Ordered, mutable sequence of single-byte characters.
#[derive(Clone, Default)]
pub struct CharSequence {
    /// Node storage. Slot order is allocation order, not sequence order.
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl CharSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Sequence holding a single byte.
    pub fn from_byte(byte: u8) -> Self {
        let mut seq = Self::new();
        seq.insert([byte], 0);
        seq
    }

    /// Sequence holding `data`, inserted at index 0.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        let mut seq = Self::new();
        seq.insert(data, 0);
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First byte, if any.
    pub fn front(&self) -> Option<u8> {
        self.head().map(Node::byte)
    }

    /// Last byte, if any.
    pub fn back(&self) -> Option<u8> {
        self.tail().map(Node::byte)
    }

    /// Head node. Its `prev` is always `None`.
    pub fn head(&self) -> Option<&Node> {
        self.head.and_then(|id| self.node(id))
    }

    /// Tail node. Its `next` is always `None`.
    pub fn tail(&self) -> Option<&Node> {
        self.tail.and_then(|id| self.node(id))
    }

    /// Node behind a link, for walking the chain by hand.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn prepend(&mut self, data: impl AsRef<[u8]>) {
        self.insert(data, 0);
    }

    pub fn prepend_byte(&mut self, byte: u8) {
        self.insert([byte], 0);
    }

    pub fn append(&mut self, data: impl AsRef<[u8]>) {
        let end = self.len as isize;
        self.insert(data, end);
    }

    pub fn append_byte(&mut self, byte: u8) {
        let end = self.len as isize;
        self.insert([byte], end);
    }

    /// Insert `data` so that its first byte lands at `index`.
    ///
    /// Empty `data`, or `data` starting with [`SENTINEL`], leaves the
    /// sequence untouched. See the module docs for index normalization.
    pub fn insert(&mut self, data: impl AsRef<[u8]>, index: isize) {
        let data = data.as_ref();
        match data.first() {
            None | Some(&SENTINEL) => return,
            Some(_) => {}
        }

        let pos = self.insert_position(index);
        let (first, last) = self.generate_chain(data);

        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                if pos == 0 {
                    self.link(last, head);
                    self.head = Some(first);
                } else if pos >= self.len {
                    self.link(tail, first);
                    self.tail = Some(last);
                } else {
                    // Splice after the node that currently precedes `pos`.
                    let before = self.walk(head, tail, pos - 1);
                    let after = self.nodes[before.index()].next;
                    self.link(before, first);
                    match after {
                        Some(after) => self.link(last, after),
                        None => self.tail = Some(last),
                    }
                }
            }
            _ => {
                self.head = Some(first);
                self.tail = Some(last);
            }
        }

        self.len += data.len();
    }

    /// Byte at `index` (negative indices normalized, then clamped).
    pub fn get(&self, index: isize) -> Result<u8> {
        let id = self.access(index)?;
        Ok(self.nodes[id.index()].byte)
    }

    /// Mutable handle to the byte at `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut u8> {
        let id = self.access(index)?;
        Ok(&mut self.nodes[id.index()].byte)
    }

    /// Forward iterator over the bytes, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Bytes in forward order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Forward rendering, one `char` per byte.
    pub fn render(&self) -> String {
        self.iter().map(char::from).collect()
    }

    /// Normalize an insertion index into `0..=len`.
    fn insert_position(&self, index: isize) -> usize {
        let index = if index < 0 {
            index.saturating_add(self.len as isize + 1)
        } else {
            index
        };
        if index <= 0 {
            0
        } else {
            (index as usize).min(self.len)
        }
    }

    /// Resolve a public access index to a node.
    fn access(&self, index: isize) -> Result<NodeId> {
        if self.is_empty() {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let pos = self.insert_position(index).min(self.len - 1);
        self.node_at(pos)
    }

    /// Node at position `pos` (clamped to the tail).
    pub(crate) fn node_at(&self, pos: usize) -> Result<NodeId> {
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => Ok(self.walk(head, tail, pos)),
            _ => Err(SequenceError::NullChain),
        }
    }

    /// Walk from whichever end is closer to `pos`.
    ///
    /// Traversal stops at a chain boundary, so an out-of-range `pos` yields
    /// the head or tail.
    fn walk(&self, head: NodeId, tail: NodeId, pos: usize) -> NodeId {
        if pos > self.len / 2 {
            let mut current = tail;
            let mut i = self.len - 1;
            while i > pos {
                match self.nodes[current.index()].prev {
                    Some(prev) => current = prev,
                    None => break,
                }
                i -= 1;
            }
            current
        } else {
            let mut current = head;
            for _ in 0..pos {
                match self.nodes[current.index()].next {
                    Some(next) => current = next,
                    None => break,
                }
            }
            current
        }
    }

    /// Allocate `data` as a fresh linked run, returning its ends.
    ///
    /// `data` must be non-empty.
    fn generate_chain(&mut self, data: &[u8]) -> (NodeId, NodeId) {
        let start = self.nodes.len();
        self.nodes.reserve(data.len());

        for (offset, &byte) in data.iter().enumerate() {
            let idx = start + offset;
            let prev = (offset > 0).then(|| NodeId::from_index(idx - 1));
            let next = (offset + 1 < data.len()).then(|| NodeId::from_index(idx + 1));
            self.nodes.push(Node::new(byte, prev, next));
        }

        (
            NodeId::from_index(start),
            NodeId::from_index(start + data.len() - 1),
        )
    }

    /// `a.next = b` and `b.prev = a`.
    #[inline]
    fn link(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a.index()].next = Some(b);
        self.nodes[b.index()].prev = Some(a);
    }

    /// Panic unless every structural invariant of the chain holds.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());
        assert_eq!(self.len, self.nodes.len());

        let Some(head) = self.head else { return };
        assert_eq!(self.nodes[head.index()].prev, None, "head has a prev link");

        let mut current = head;
        let mut steps = 1;
        while let Some(next) = self.nodes[current.index()].next {
            assert_eq!(
                self.nodes[next.index()].prev,
                Some(current),
                "broken back link at {}",
                next
            );
            current = next;
            steps += 1;
            assert!(steps <= self.len, "cycle or overrun in chain");
        }
        assert_eq!(steps, self.len);
        assert_eq!(Some(current), self.tail);
    }
}

impl PartialEq for CharSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for CharSequence {}

impl fmt::Debug for CharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharSequence")
            .field("len", &self.len)
            .field("text", &self.render())
            .finish()
    }
}

impl fmt::Display for CharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;
        for byte in self.iter() {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

impl From<&str> for CharSequence {
    fn from(data: &str) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for CharSequence {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<u8> for CharSequence {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

/// Appends byte by byte, so NUL bytes are absorbed like `append_byte(0)`.
impl Extend<u8> for CharSequence {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.append_byte(byte);
        }
    }
}

impl FromIterator<u8> for CharSequence {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a> IntoIterator for &'a CharSequence {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a sequence's bytes, following the links.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?.index()];
        self.front = node.next;
        self.remaining -= 1;
        Some(node.byte)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?.index()];
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.byte)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}
