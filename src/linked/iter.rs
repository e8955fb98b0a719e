//! Iterators over [`LinkedList`].

use std::iter::FusedIterator;

use super::list::LinkedList;
use super::node::{NodeArena, NodeId};

/// An iterator over references to the elements of a [`LinkedList`].
///
/// Walks the `next` links from the front and the `previous` links from the
/// back; the two ends never cross because the remaining count is tracked.
pub struct LinkedListIterator<'a, T> {
    pub(super) nodes: &'a NodeArena<T>,
    pub(super) front: Option<NodeId>,
    pub(super) back: Option<NodeId>,
    pub(super) remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for LinkedListIterator<'_, T> {}

impl<T> Clone for LinkedListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedList`].
pub struct LinkedListIteratorMut<'a, T> {
    pub(super) elements: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> Iterator for LinkedListIteratorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for LinkedListIteratorMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for LinkedListIteratorMut<'_, T> {}

impl<T> FusedIterator for LinkedListIteratorMut<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    pub(super) list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for LinkedListIntoIterator<T> {}
