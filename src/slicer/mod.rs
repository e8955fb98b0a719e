//! The container capability contract.
//!
//! This module provides the [`Slicer`] trait, the operation set shared by
//! every container in this crate, together with the stateless helpers the
//! implementations are built from:
//!
//! - [`bounds`]: index and range validation
//! - [`equality`]: cross-container equality, written once for all containers
//! - [`render`]: the bracketed `[ e1, e2 ]` text form
//!
//! # Equality Policy
//!
//! Operations that compare elements come in two flavours. The plain form
//! (`index`, `contains`, `remove`, `equal`, ...) requires `T: PartialEq`. The
//! `_by` form takes an explicit comparison closure and works for element types
//! with no natural equality.
//!
//! # Dynamic Dispatch
//!
//! `Slicer<T>` is object safe: callbacks are passed as `&mut dyn FnMut`, so
//! heterogeneous containers can be handled as `Box<dyn Slicer<T>>`.
//!
//! # Examples
//!
//! ```rust
//! use slicelib::prelude::*;
//!
//! let containers: Vec<Box<dyn Slicer<i32>>> = vec![
//!     Box::new(LinkedList::from([3, 1, 2])),
//!     Box::new(ArraySlice::from(vec![3, 1, 2])),
//! ];
//!
//! for mut container in containers {
//!     container.sort_by(&mut |left, right| left.cmp(right));
//!     assert!(container.equal(&[1, 2, 3]));
//!     assert_eq!(container.render(), "[ 1, 2, 3 ]");
//! }
//! ```

pub mod bounds;
pub mod equality;
pub mod render;

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::ControlFlow;

use crate::error::SlicerError;

/// Boxed double-ended iterator over the elements of a [`Slicer`].
pub type SlicerIter<'a, T> = Box<dyn DoubleEndedIterator<Item = &'a T> + 'a>;

/// A container with uniform, index-based access.
///
/// # Required Methods
///
/// Positional access (`at`, `at_mut`), `len`, `iter`, and the structural
/// mutations (`append`, `insert`, `pop`, `delete`, `truncate`, `clear`,
/// `reverse`, `sort_by`, `retain`).
///
/// # Provided Methods
///
/// Everything else (search, removal by value, deduplication, slicing,
/// equality, traversal and rendering) is derived from the required methods.
/// Implementors may override any of them with a faster version as long as
/// the observable behaviour is the same.
///
/// # Index Contract
///
/// Indices are zero-based. Element positions must lie in `[0, len)`,
/// insertion points and range bounds in `[0, len]`. Violations are reported
/// as [`SlicerError`] before anything is modified.
pub trait Slicer<T> {
    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `index >= len()`.
    fn at(&self, index: usize) -> Result<&T, SlicerError>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `index >= len()`.
    fn at_mut(&mut self, index: usize) -> Result<&mut T, SlicerError>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns an iterator over the elements, front to back.
    fn iter(&self) -> SlicerIter<'_, T>;

    /// Appends `elements` after the last element, in order.
    fn append(&mut self, elements: Vec<T>);

    /// Inserts `elements` immediately before position `index`.
    ///
    /// `index == len()` appends. Elements previously at `index` and after are
    /// shifted back by `elements.len()` positions.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `index > len()`.
    fn insert(&mut self, index: usize, elements: Vec<T>) -> Result<(), SlicerError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `index >= len()`.
    fn pop(&mut self, index: usize) -> Result<T, SlicerError>;

    /// Removes the elements in the half-open range `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if a bound exceeds `len()`,
    /// or [`SlicerError::InvertedRange`] if `start > end`.
    fn delete(&mut self, start: usize, end: usize) -> Result<(), SlicerError>;

    /// Keeps the first `length` elements and drops the rest.
    ///
    /// Does nothing if `length >= len()`.
    fn truncate(&mut self, length: usize);

    /// Removes every element.
    fn clear(&mut self);

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Sorts the elements with `compare`. The sort is stable.
    fn sort_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering);

    /// Keeps only the elements for which `keep` returns `true`.
    ///
    /// `keep` is called exactly once per element, front to back.
    fn retain(&mut self, keep: &mut dyn FnMut(&T) -> bool);

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `index >= len()`.
    fn set(&mut self, index: usize, element: T) -> Result<T, SlicerError> {
        let slot = self.at_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Copies the elements into a `Vec`.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the position of the first element matching `predicate`.
    fn position_by(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(|element| predicate(element))
    }

    /// Returns the position of the last element matching `predicate`.
    ///
    /// The search starts from the back.
    fn rposition_by(&self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<usize> {
        let length = self.len();
        self.iter()
            .rev()
            .position(|element| predicate(element))
            .map(|offset| length - 1 - offset)
    }

    /// Returns the position of the first element equal to `value`.
    fn index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position_by(&mut |element| element == value)
    }

    /// Returns the position of the last element equal to `value`.
    fn last_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.rposition_by(&mut |element| element == value)
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index(value).is_some()
    }

    /// Removes and returns the first element matching `predicate`.
    ///
    /// Returns `None`, leaving the container unchanged, if nothing matches.
    fn remove_by(&mut self, predicate: &mut dyn FnMut(&T) -> bool) -> Option<T> {
        let index = self.position_by(predicate)?;
        self.pop(index).ok()
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// Returns `None`, leaving the container unchanged, if there is none.
    fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index(value)?;
        self.pop(index).ok()
    }

    /// Removes and returns the last element equal to `value`.
    ///
    /// Returns `None`, leaving the container unchanged, if there is none.
    fn remove_last(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.last_index(value)?;
        self.pop(index).ok()
    }

    /// Keeps the first occurrence of each distinct element according to
    /// `same`, preserving relative order.
    fn remove_duplicates_by(&mut self, same: &mut dyn FnMut(&T, &T) -> bool) {
        let duplicates: Vec<bool> = {
            let elements: Vec<&T> = self.iter().collect();
            let mut duplicates = vec![false; elements.len()];
            for (index, element) in elements.iter().enumerate() {
                let duplicate = elements[..index]
                    .iter()
                    .zip(&duplicates[..index])
                    .any(|(earlier, seen_before)| !*seen_before && same(*earlier, *element));
                duplicates[index] = duplicate;
            }
            duplicates
        };
        let mut flags = duplicates.into_iter();
        self.retain(&mut |_| !flags.next().unwrap_or(false));
    }

    /// Keeps the first occurrence of each distinct element, preserving
    /// relative order.
    fn remove_duplicates(&mut self)
    where
        T: PartialEq,
    {
        self.remove_duplicates_by(&mut |left, right| left == right);
    }

    /// Drops the first `start` elements, keeping `[start, len)`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `start > len()`.
    fn slice_left(&mut self, start: usize) -> Result<(), SlicerError> {
        bounds::check_position(start, self.len())?;
        self.delete(0, start)
    }

    /// Keeps `[0, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if `end > len()`.
    fn slice_right(&mut self, end: usize) -> Result<(), SlicerError> {
        bounds::check_position(end, self.len())?;
        self.truncate(end);
        Ok(())
    }

    /// Keeps `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::IndexOutOfRange`] if a bound exceeds `len()`,
    /// or [`SlicerError::InvertedRange`] if `start > end`.
    fn slice_range(&mut self, start: usize, end: usize) -> Result<(), SlicerError> {
        bounds::check_range(start, end, self.len())?;
        self.truncate(end);
        self.delete(0, start)
    }

    /// Keeps the first `end` elements.
    ///
    /// Unlike [`slice_right`](Self::slice_right) this never fails: `0` clears
    /// the container and anything at or past `len()` leaves it unchanged.
    fn cut_until(&mut self, end: usize) {
        self.truncate(end);
    }

    /// Compares with `other` element-wise using `PartialEq`.
    fn equal(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        equality::equal_slice_by(self, other, &mut |left, right| left == right)
    }

    /// Compares with `other` element-wise using `equal`.
    fn equal_by(&self, other: &[T], equal: &mut dyn FnMut(&T, &T) -> bool) -> bool {
        equality::equal_slice_by(self, other, equal)
    }

    /// Compares with another container element-wise using `PartialEq`.
    fn equal_slicer(&self, other: &dyn Slicer<T>) -> bool
    where
        T: PartialEq,
    {
        equality::equal_slicers_by(self, other, &mut |left, right| left == right)
    }

    /// Compares with another container element-wise using `equal`.
    fn equal_slicer_by(
        &self,
        other: &dyn Slicer<T>,
        equal: &mut dyn FnMut(&T, &T) -> bool,
    ) -> bool {
        equality::equal_slicers_by(self, other, equal)
    }

    /// Visits `(index, element)` pairs front to back until `visitor` breaks.
    fn range(&self, visitor: &mut dyn FnMut(usize, &T) -> ControlFlow<()>) {
        for (index, element) in self.iter().enumerate() {
            if visitor(index, element).is_break() {
                break;
            }
        }
    }

    /// Visits `(index, element)` pairs back to front until `visitor` breaks.
    ///
    /// Indices are the elements' positions, so the first visit sees
    /// `len() - 1`.
    fn reverse_range(&self, visitor: &mut dyn FnMut(usize, &T) -> ControlFlow<()>) {
        let length = self.len();
        for (offset, element) in self.iter().rev().enumerate() {
            if visitor(length - 1 - offset, element).is_break() {
                break;
            }
        }
    }

    /// Renders the elements as `[ e1, e2, ..., en ]`.
    fn render(&self) -> String
    where
        T: Display,
    {
        render::render(self.iter())
    }
}
