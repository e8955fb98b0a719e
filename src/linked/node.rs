//! Node storage for [`LinkedList`](super::LinkedList).
//!
//! Nodes live in an arena owned by a single list. A node refers to its
//! neighbours by [`NodeId`], an index into the arena, so the links never own
//! anything: the arena's slot vector is the only owner, and releasing a node
//! simply vacates its slot for reuse.
//!
//! The arena does not know about list order. Keeping `previous`/`next`
//! consistent is the list's job; the arena only guarantees that a live id
//! always addresses the node it was allocated for.

use std::ops::{Index, IndexMut};

/// Handle of a live node inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A single link in the chain.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// The element stored in this node.
    pub(crate) element: T,
    /// The node before this one, if any.
    pub(crate) previous: Option<NodeId>,
    /// The node after this one, if any.
    pub(crate) next: Option<NodeId>,
}

/// Slot-vector arena with a free list of vacant slots.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<usize>,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    /// Stores `element` in a fresh, unlinked node.
    ///
    /// Vacant slots are reused before the slot vector grows.
    pub(crate) fn allocate(&mut self, element: T) -> NodeId {
        let node = Node {
            element,
            previous: None,
            next: None,
        };
        if let Some(slot) = self.vacant.pop() {
            self.slots[slot] = Some(node);
            NodeId(slot)
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Vacates the slot of `id` and returns its element.
    ///
    /// The caller must have detached the node from its neighbours first.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let Some(node) = self.slots[id.0].take() else {
            unreachable!("released a vacant node slot")
        };
        debug_assert!(
            node.previous.is_none() && node.next.is_none(),
            "released a node that is still linked"
        );
        if id.0 + 1 == self.slots.len() {
            self.slots.pop();
        } else {
            self.vacant.push(id.0);
        }
        node.element
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Mutable references to the elements of `order`, in that order.
    ///
    /// Each id in `order` must be live and appear at most once.
    pub(crate) fn elements_mut(&mut self, order: &[NodeId]) -> Vec<&mut T> {
        let mut elements: Vec<Option<&mut T>> = self
            .slots
            .iter_mut()
            .map(|slot| slot.as_mut().map(|node| &mut node.element))
            .collect();
        order
            .iter()
            .filter_map(|id| elements[id.0].take())
            .collect()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match &self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("node id refers to a vacant slot"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("node id refers to a vacant slot"),
        }
    }
}
