//! Node storage and link bookkeeping.
//!
//! The chain is a singly-linked list whose nodes live in an index arena:
//! every node names its successor by slot index, the chain tracks `head`,
//! a non-owning `tail` alias and its length, and vacated slots are recycled.
//! There are no back-pointers, so unlinking a node requires its predecessor.
//!
//! ```text
//! slots: [ 0: (3, next 2) | 1: vacant | 2: (5, next -) | 3: (1, next 0) ]
//! head = 3, tail = 2, len = 3          chain: 1 -> 3 -> 5
//! ```

use crate::value::Value;

/// Slot index of a node inside its chain.
pub(crate) type NodeIndex = usize;

/// One linked unit: a value and the index of the next node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: Value,
    pub(crate) next: Option<NodeIndex>,
}

/// An arena-backed singly-linked chain with O(1) head, tail and length.
#[derive(Debug, Clone, Default)]
pub(crate) struct Chain {
    slots: Vec<Option<Node>>,
    vacant: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    length: usize,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub(crate) const fn head(&self) -> Option<NodeIndex> {
        self.head
    }

    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn next_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).and_then(|node| node.next)
    }

    pub(crate) fn first(&self) -> Option<&Value> {
        self.head.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    pub(crate) fn last(&self) -> Option<&Value> {
        self.tail.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    fn allocate(&mut self, value: Value, next: Option<NodeIndex>) -> NodeIndex {
        let node = Some(Node { value, next });
        if let Some(index) = self.vacant.pop() {
            self.slots[index] = node;
            index
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    fn release(&mut self, index: NodeIndex) -> Option<Node> {
        let node = self.slots.get_mut(index).and_then(Option::take)?;
        self.vacant.push(index);
        Some(node)
    }

    pub(crate) fn push_front(&mut self, value: Value) {
        let index = self.allocate(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.length += 1;
    }

    pub(crate) fn push_back(&mut self, value: Value) {
        let index = self.allocate(value, None);
        match self.tail.and_then(|tail| self.slots.get_mut(tail)).and_then(Option::as_mut) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Links a new node directly after `previous`.
    pub(crate) fn insert_after(&mut self, previous: NodeIndex, value: Value) {
        let next = self.next_of(previous);
        let index = self.allocate(value, next);
        if let Some(node) = self.slots.get_mut(previous).and_then(Option::as_mut) {
            node.next = Some(index);
        }
        if self.tail == Some(previous) {
            self.tail = Some(index);
        }
        self.length += 1;
    }

    /// Unlinks the node after `previous`, or the head when `previous` is
    /// `None`, and returns its value.
    pub(crate) fn remove_after(&mut self, previous: Option<NodeIndex>) -> Option<Value> {
        let target = match previous {
            Some(previous) => self.next_of(previous)?,
            None => self.head?,
        };
        let removed = self.release(target)?;
        match previous {
            Some(previous) => {
                if let Some(node) = self.slots.get_mut(previous).and_then(Option::as_mut) {
                    node.next = removed.next;
                }
            }
            None => self.head = removed.next,
        }
        if self.tail == Some(target) {
            self.tail = previous;
        }
        self.length -= 1;
        Some(removed.value)
    }

    pub(crate) fn pop_front(&mut self) -> Option<Value> {
        self.remove_after(None)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Number of nodes reachable from `head`, and whether the last of them
    /// is the cached `tail`.
    #[cfg(any(debug_assertions, test))]
    pub(crate) fn walk_is_consistent(&self) -> bool {
        let mut reached = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            reached += 1;
            last = Some(index);
            cursor = self.next_of(index);
        }
        reached == self.length
            && last == self.tail
            && (self.head.is_none() == self.tail.is_none())
    }
}
