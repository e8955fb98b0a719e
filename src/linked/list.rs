//! Doubly-linked list with index-based access.
//!
//! This module provides [`LinkedList`], a mutable doubly-linked list that
//! implements the [`Slicer`] contract.
//!
//! # Overview
//!
//! - O(1) push/pop at both ends
//! - O(1) insertion and removal once a position has been reached
//! - O(min(i, n - i)) positional access: lookups walk from the nearer end
//! - O(n) search, reverse, deduplication and sort
//!
//! # Invariants
//!
//! After every operation returns:
//!
//! - `head`, `tail` and `length` are all empty together, or all set
//! - walking `next` from `head` visits exactly `length` nodes and ends at `tail`
//! - for every node, `next.previous` and `previous.next` lead back to it
//!
//! Operations that take an index validate it before touching any link, so a
//! failed call leaves the list exactly as it was.
//!
//! # Examples
//!
//! ```rust
//! use slicelib::prelude::*;
//!
//! let mut list = LinkedList::from([1, 2, 3, 4, 5, 6, 7, 8]);
//! list.delete(1, 5).unwrap();
//! assert!(list.equal(&[1, 6, 7, 8]));
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "[ 8, 7, 6, 1 ]");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::iter::{LinkedListIntoIterator, LinkedListIterator, LinkedListIteratorMut};
use super::node::{NodeArena, NodeId};
use crate::error::SlicerError;
use crate::slicer::render::write_bracketed;
use crate::slicer::{Slicer, SlicerIter, bounds};

/// A doubly-linked list.
///
/// Nodes are owned by an arena inside the list; `previous`/`next` links are
/// plain handles into that arena and never own anything.
///
/// # Time Complexity
///
/// | Operation                  | Complexity        |
/// |----------------------------|-------------------|
/// | `push_front` / `push_back` | O(1)              |
/// | `pop_front` / `pop_back`   | O(1)              |
/// | `at` / `set` / `pop`       | O(min(i, n - i))  |
/// | `insert(i, k items)`       | O(min(i, n - i) + k) |
/// | `delete(i, j)`             | O(min(i, n - i) + (j - i)) |
/// | `index` / `contains`       | O(n)              |
/// | `reverse`                  | O(n)              |
/// | `sort_by`                  | O(n log n)        |
///
/// # Examples
///
/// ```rust
/// use slicelib::prelude::*;
///
/// let mut list = LinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.append(vec![3, 4]);
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.at(2), Ok(&3));
/// assert_eq!(list[3], 4);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicelib::linked::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if `index` addresses an element of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicelib::linked::LinkedList;
    ///
    /// let list = LinkedList::from([1, 2, 3]);
    /// assert!(list.in_range(2));
    /// assert!(!list.in_range(3));
    /// ```
    #[inline]
    #[must_use]
    pub const fn in_range(&self, index: usize) -> bool {
        index < self.length
    }

    /// Returns a reference to the first element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].element)
    }

    /// Returns a reference to the last element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].element)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.head?;
        Some(&mut self.nodes[id].element)
    }

    /// Returns a mutable reference to the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.tail?;
        Some(&mut self.nodes[id].element)
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    ///
    /// The walk starts from whichever end of the list is closer to `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicelib::linked::LinkedList;
    ///
    /// let list = LinkedList::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.locate(index).map(|id| &self.nodes[id].element)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let id = self.locate(index)?;
        Some(&mut self.nodes[id].element)
    }

    /// Adds an element at the front of the list.
    pub fn push_front(&mut self, element: T) {
        let id = self.nodes.allocate(element);
        self.link_after(None, id);
    }

    /// Adds an element at the back of the list.
    pub fn push_back(&mut self, element: T) {
        let id = self.nodes.allocate(element);
        self.link_after(self.tail, id);
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|id| self.unlink(id))
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|id| self.unlink(id))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// The iterator is double-ended: `.rev()` walks from the tail.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    /// Returns an iterator over mutable references to the elements, front
    /// to back.
    pub fn iter_mut(&mut self) -> LinkedListIteratorMut<'_, T> {
        let order = self.node_ids();
        LinkedListIteratorMut {
            elements: self.nodes.elements_mut(&order).into_iter(),
        }
    }

    // =========================================================================
    // Link Maintenance
    // =========================================================================

    /// Finds the node at `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Option<NodeId> {
        if index >= self.length {
            return None;
        }
        if index <= self.length / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.nodes[current].next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in index + 1..self.length {
                current = self.nodes[current].previous?;
            }
            Some(current)
        }
    }

    /// Like [`locate`](Self::locate), reporting a miss as an error.
    fn node_at(&self, index: usize) -> Result<NodeId, SlicerError> {
        self.locate(index).ok_or(SlicerError::IndexOutOfRange {
            index,
            length: self.length,
        })
    }

    /// Node handles in list order.
    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.length);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes[id].next;
        }
        ids
    }

    /// Links the detached node `id` right after `anchor`, or at the front
    /// when `anchor` is `None`.
    fn link_after(&mut self, anchor: Option<NodeId>, id: NodeId) {
        let next = match anchor {
            Some(anchor) => self.nodes[anchor].next,
            None => self.head,
        };

        let node = &mut self.nodes[id];
        node.previous = anchor;
        node.next = next;

        match anchor {
            Some(anchor) => self.nodes[anchor].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(next) => self.nodes[next].previous = Some(id),
            None => self.tail = Some(id),
        }
        self.length += 1;
    }

    /// Detaches `id` from its neighbours, releases it and returns its element.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = &mut self.nodes[id];
        let previous = node.previous.take();
        let next = node.next.take();

        match previous {
            Some(previous) => self.nodes[previous].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].previous = previous,
            None => self.tail = previous,
        }
        self.length -= 1;
        self.nodes.release(id)
    }

    /// Rewires every link so the list follows `order`.
    ///
    /// `order` must contain each live node exactly once.
    fn relink(&mut self, order: &[NodeId]) {
        self.head = order.first().copied();
        self.tail = order.last().copied();
        for (position, &id) in order.iter().enumerate() {
            let node = &mut self.nodes[id];
            node.previous = position.checked_sub(1).map(|before| order[before]);
            node.next = order.get(position + 1).copied();
        }
    }

    /// Checks every structural invariant; used by the tests.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        assert_eq!(self.head.is_none(), self.length == 0);
        assert_eq!(self.tail.is_none(), self.length == 0);
        assert_eq!(self.nodes.live(), self.length);

        let mut visited = 0;
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert_eq!(self.nodes[id].previous, previous);
            previous = Some(id);
            current = self.nodes[id].next;
            visited += 1;
        }
        assert_eq!(visited, self.length);
        assert_eq!(previous, self.tail);
    }
}

// =============================================================================
// Slicer Implementation
// =============================================================================

impl<T> Slicer<T> for LinkedList<T> {
    fn at(&self, index: usize) -> Result<&T, SlicerError> {
        let id = self.node_at(index)?;
        Ok(&self.nodes[id].element)
    }

    fn at_mut(&mut self, index: usize) -> Result<&mut T, SlicerError> {
        let id = self.node_at(index)?;
        Ok(&mut self.nodes[id].element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    fn iter(&self) -> SlicerIter<'_, T> {
        Box::new(Self::iter(self))
    }

    fn append(&mut self, elements: Vec<T>) {
        for element in elements {
            self.push_back(element);
        }
    }

    fn insert(&mut self, index: usize, elements: Vec<T>) -> Result<(), SlicerError> {
        bounds::check_position(index, self.length)?;
        let mut anchor = match index {
            0 => None,
            _ => Some(self.node_at(index - 1)?),
        };
        for element in elements {
            let id = self.nodes.allocate(element);
            self.link_after(anchor, id);
            anchor = Some(id);
        }
        Ok(())
    }

    fn pop(&mut self, index: usize) -> Result<T, SlicerError> {
        let id = self.node_at(index)?;
        Ok(self.unlink(id))
    }

    fn delete(&mut self, start: usize, end: usize) -> Result<(), SlicerError> {
        bounds::check_range(start, end, self.length)?;
        let mut current = self.locate(start);
        for _ in start..end {
            let Some(id) = current else {
                break;
            };
            current = self.nodes[id].next;
            self.unlink(id);
        }
        Ok(())
    }

    fn truncate(&mut self, length: usize) {
        if length == 0 {
            Self::clear(self);
            return;
        }
        while self.length > length {
            self.pop_back();
        }
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            std::mem::swap(&mut node.previous, &mut node.next);
            current = node.previous;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    fn sort_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering) {
        let mut order = self.node_ids();
        let nodes = &self.nodes;
        order.sort_by(|&left, &right| compare(&nodes[left].element, &nodes[right].element));
        self.relink(&order);
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&T) -> bool) {
        let mut current = self.head;
        while let Some(id) = current {
            current = self.nodes[id].next;
            if !keep(&self.nodes[id].element) {
                self.unlink(id);
            }
        }
    }

    fn rposition_by(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<usize> {
        let mut index = self.length;
        let mut current = self.tail;
        while let Some(id) = current {
            index -= 1;
            if predicate(&self.nodes[id].element) {
                return Some(index);
            }
            current = self.nodes[id].previous;
        }
        None
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(elements: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(elements);
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut list = Self::with_capacity(elements.len());
        list.extend(elements);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = LinkedListIteratorMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Panics with [`SlicerError::IndexOutOfRange`]'s message when `index` is out
/// of bounds. Use [`Slicer::at`] for the fallible form.
impl<T> std::ops::Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// Hashes the length, then each element in order, so equal lists hash
/// equally.
impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(formatter, self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn list_of(elements: &[i32]) -> LinkedList<i32> {
        elements.iter().copied().collect()
    }

    fn contents(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    #[case(&[])]
    #[case(&[1])]
    #[case(&[1, 2])]
    #[case(&[1, 2, 3, 4, 5])]
    fn test_construction_links_every_node(#[case] elements: &[i32]) {
        let list = list_of(elements);
        list.assert_links();
        assert_eq!(contents(&list), elements);
    }

    #[rstest]
    fn test_single_element_head_is_tail() {
        let list = LinkedList::from([7]);
        assert_eq!(list.head, list.tail);
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    #[rstest]
    #[case(0, 10)]
    #[case(1, 20)]
    #[case(2, 30)]
    #[case(3, 40)]
    #[case(4, 50)]
    fn test_at_from_either_end(#[case] index: usize, #[case] expected: i32) {
        let list = list_of(&[10, 20, 30, 40, 50]);
        assert_eq!(list.at(index), Ok(&expected));
    }

    #[rstest]
    fn test_at_out_of_range() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(
            list.at(3),
            Err(SlicerError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
    }

    #[rstest]
    fn test_set_returns_previous() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.set(2, 2), Ok(3));
        assert_eq!(contents(&list), vec![1, 2, 2]);
    }

    #[rstest]
    #[should_panic(expected = "index out of range [5] with length 2")]
    fn test_index_operator_panics() {
        let list = list_of(&[1, 2]);
        let _element = list[5];
    }

    #[rstest]
    fn test_index_mut_operator() {
        let mut list = list_of(&[1, 2]);
        list[1] = 9;
        assert_eq!(contents(&list), vec![1, 9]);
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    #[rstest]
    fn test_append_empty_is_noop() {
        let mut list = list_of(&[1]);
        list.append(Vec::new());
        assert_eq!(contents(&list), vec![1]);
        list.assert_links();
    }

    #[rstest]
    #[case(0, &[0, 0, 1, 2, 3])]
    #[case(1, &[1, 0, 0, 2, 3])]
    #[case(3, &[1, 2, 3, 0, 0])]
    fn test_insert_splices_before_index(#[case] index: usize, #[case] expected: &[i32]) {
        let mut list = list_of(&[1, 2, 3]);
        list.insert(index, vec![0, 0]).unwrap();
        assert_eq!(contents(&list), expected);
        list.assert_links();
    }

    #[rstest]
    fn test_insert_into_empty() {
        let mut list = LinkedList::new();
        list.insert(0, vec![1, 2]).unwrap();
        assert_eq!(contents(&list), vec![1, 2]);
        list.assert_links();
    }

    #[rstest]
    fn test_insert_out_of_range_leaves_list_untouched() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.insert(4, vec![9]).is_err());
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, &[2, 3])]
    #[case(1, &[1, 3])]
    #[case(2, &[1, 2])]
    fn test_pop_relinks_neighbours(#[case] index: usize, #[case] expected: &[i32]) {
        let mut list = list_of(&[1, 2, 3]);
        list.pop(index).unwrap();
        assert_eq!(contents(&list), expected);
        list.assert_links();
    }

    #[rstest]
    fn test_pop_last_element_empties_list() {
        let mut list = list_of(&[1]);
        assert_eq!(list.pop(0), Ok(1));
        assert!(list.is_empty());
        assert!(list.head.is_none() && list.tail.is_none());
    }

    #[rstest]
    fn test_pop_out_of_range() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert!(list.pop(0).is_err());
    }

    #[rstest]
    #[case(1, 5, &[1, 6, 7, 8])]
    #[case(0, 8, &[])]
    #[case(0, 1, &[2, 3, 4, 5, 6, 7, 8])]
    #[case(7, 8, &[1, 2, 3, 4, 5, 6, 7])]
    #[case(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8])]
    fn test_delete_range(#[case] start: usize, #[case] end: usize, #[case] expected: &[i32]) {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6, 7, 8]);
        list.delete(start, end).unwrap();
        assert_eq!(contents(&list), expected);
        list.assert_links();
    }

    #[rstest]
    #[case(2, 9)]
    #[case(9, 9)]
    #[case(3, 1)]
    fn test_delete_invalid_range_is_rejected(#[case] start: usize, #[case] end: usize) {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete(start, end).is_err());
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_clear() {
        let mut list = list_of(&[1, 2, 3]);
        Slicer::clear(&mut list);
        assert_eq!(list.len(), 0);
        list.assert_links();
    }

    #[rstest]
    fn test_reverse_swaps_head_and_tail() {
        let mut list = list_of(&[1, 2, 3]);
        list.reverse();
        assert_eq!(contents(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        list.assert_links();
    }

    #[rstest]
    fn test_reverse_empty() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.reverse();
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_sort_by_is_stable() {
        let mut list: LinkedList<(i32, char)> =
            LinkedList::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        list.sort_by(&mut |left, right| left.0.cmp(&right.0));
        let collected: Vec<(i32, char)> = list.iter().copied().collect();
        assert_eq!(collected, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_retain() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        list.retain(&mut |element| element % 2 == 0);
        assert_eq!(contents(&list), vec![2, 4, 6]);
        list.assert_links();
    }

    #[rstest]
    fn test_remove_duplicates() {
        let mut list = list_of(&[1, 1, 2, 2, 3, 3, 4, 4]);
        list.remove_duplicates();
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);
        list.assert_links();
    }

    #[rstest]
    fn test_truncate_to_zero_clears() {
        let mut list = list_of(&[1, 2, 3]);
        list.truncate(0);
        assert!(list.is_empty());
        list.assert_links();
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[rstest]
    fn test_index_and_last_index() {
        let list = list_of(&[1, 2, 3, 2, 1]);
        assert_eq!(list.index(&2), Some(1));
        assert_eq!(list.last_index(&2), Some(3));
        assert_eq!(list.index(&9), None);
        assert_eq!(list.last_index(&9), None);
    }

    #[rstest]
    fn test_remove_and_remove_last() {
        let mut list = list_of(&[1, 2, 3, 2, 1]);
        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(contents(&list), vec![1, 3, 2, 1]);
        assert_eq!(list.remove_last(&1), Some(1));
        assert_eq!(contents(&list), vec![1, 3, 2]);
        list.assert_links();
    }

    #[rstest]
    fn test_remove_missing_is_noop() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove(&7), None);
        assert_eq!(list.remove_last(&7), None);
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    // =========================================================================
    // Standard Traits
    // =========================================================================

    #[rstest]
    fn test_display() {
        assert_eq!(list_of(&[1, 2, 3]).to_string(), "[ 1, 2, 3 ]");
        assert_eq!(list_of(&[]).to_string(), "[ ]");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }

    #[rstest]
    fn test_eq_and_clone() {
        let list = list_of(&[1, 2, 3]);
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_ne!(list, list_of(&[1, 2]));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let list = list_of(&[1, 2, 3]);
        let mut copy = list.clone();
        copy.push_back(4);
        copy.assert_links();
        assert_eq!(list.len(), 3);
        assert_eq!(copy.len(), 4);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    #[derive(Debug, Clone)]
    enum Operation {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
        Insert(usize, Vec<i32>),
        Pop(usize),
        Delete(usize, usize),
        Reverse,
        Sort,
        RemoveDuplicates,
        CutUntil(usize),
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            any::<i32>().prop_map(Operation::PushFront),
            any::<i32>().prop_map(Operation::PushBack),
            Just(Operation::PopFront),
            Just(Operation::PopBack),
            (0..12usize, prop::collection::vec(-5i32..5, 0..4))
                .prop_map(|(index, elements)| Operation::Insert(index, elements)),
            (0..12usize).prop_map(Operation::Pop),
            (0..12usize, 0..12usize).prop_map(|(start, end)| Operation::Delete(start, end)),
            Just(Operation::Reverse),
            Just(Operation::Sort),
            Just(Operation::RemoveDuplicates),
            (0..12usize).prop_map(Operation::CutUntil),
        ]
    }

    /// Applies `operation` to the list and to a `Vec` model.
    fn apply(list: &mut LinkedList<i32>, model: &mut Vec<i32>, operation: Operation) {
        match operation {
            Operation::PushFront(element) => {
                list.push_front(element);
                model.insert(0, element);
            }
            Operation::PushBack(element) => {
                list.push_back(element);
                model.push(element);
            }
            Operation::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(list.pop_front(), expected);
            }
            Operation::PopBack => assert_eq!(list.pop_back(), model.pop()),
            Operation::Insert(index, elements) => {
                let result = list.insert(index, elements.clone());
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.splice(index..index, elements);
                } else {
                    assert!(result.is_err());
                }
            }
            Operation::Pop(index) => {
                let result = list.pop(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            Operation::Delete(start, end) => {
                let result = list.delete(start, end);
                if start <= end && end <= model.len() {
                    assert!(result.is_ok());
                    model.drain(start..end);
                } else {
                    assert!(result.is_err());
                }
            }
            Operation::Reverse => {
                list.reverse();
                model.reverse();
            }
            Operation::Sort => {
                list.sort_by(&mut |left, right| left.cmp(right));
                model.sort_unstable();
            }
            Operation::RemoveDuplicates => {
                list.remove_duplicates();
                let mut seen = Vec::new();
                model.retain(|element| {
                    let first = !seen.contains(element);
                    seen.push(*element);
                    first
                });
            }
            Operation::CutUntil(end) => {
                list.cut_until(end);
                model.truncate(end);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_operations_match_vec_model(
            initial in prop::collection::vec(-5i32..5, 0..10),
            operations in prop::collection::vec(operation(), 0..30)
        ) {
            let mut list: LinkedList<i32> = initial.iter().copied().collect();
            let mut model = initial;
            for operation in operations {
                apply(&mut list, &mut model, operation);
                list.assert_links();
                prop_assert_eq!(contents(&list), model.clone());
            }
        }

        #[test]
        fn prop_at_matches_model(elements in prop::collection::vec(any::<i32>(), 0..20)) {
            let list: LinkedList<i32> = elements.iter().copied().collect();
            for (index, element) in elements.iter().enumerate() {
                prop_assert_eq!(list.at(index), Ok(element));
            }
            prop_assert!(list.at(elements.len()).is_err());
        }
    }
}
