//! Array-backed containers.
//!
//! - [`ArraySlice`]: a `Vec<T>` wrapper implementing [`Slicer`](crate::slicer::Slicer)
//! - [`OrderedSlice`]: the same, plus natural-order sorting and binary search
//!   for `Ord` elements
//!
//! Both are thin adapters over `Vec` and the standard slice primitives; they
//! share the index contract and the text form of
//! [`LinkedList`](crate::linked::LinkedList), so any of them can stand in for
//! another behind `dyn Slicer<T>`.
//!
//! # Examples
//!
//! ```rust
//! use slicelib::prelude::*;
//!
//! let mut array = ArraySlice::from(vec![1, 2, 3]);
//! array.append(vec![4]);
//! assert_eq!(array.to_string(), "[ 1, 2, 3, 4 ]");
//!
//! let mut ordered = OrderedSlice::from(vec![3, 1, 2]);
//! ordered.sort();
//! assert_eq!(ordered.binary_search(&2), Ok(1));
//! ```

/// Implements [`Slicer`](crate::slicer::Slicer) and the standard collection
/// traits for a `Vec`-backed container with an `elements: Vec<T>` field.
macro_rules! array_slicer {
    ($container:ident) => {
        impl<T> $container<T> {
            /// Creates a new empty container.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    elements: Vec::new(),
                }
            }

            /// Creates an empty container with room for `capacity` elements.
            #[inline]
            #[must_use]
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    elements: Vec::with_capacity(capacity),
                }
            }

            /// Returns the number of elements.
            #[inline]
            #[must_use]
            pub fn len(&self) -> usize {
                self.elements.len()
            }

            /// Returns `true` if the container has no elements.
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.elements.is_empty()
            }

            /// Returns the elements as a slice.
            #[inline]
            #[must_use]
            pub fn as_slice(&self) -> &[T] {
                &self.elements
            }

            /// Returns the elements as a mutable slice.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.elements
            }

            /// Consumes the container, returning the underlying `Vec`.
            #[inline]
            #[must_use]
            pub fn into_vec(self) -> Vec<T> {
                self.elements
            }

            /// Returns an iterator over references to the elements.
            #[inline]
            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.elements.iter()
            }

            /// Returns an iterator over mutable references to the elements.
            #[inline]
            pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
                self.elements.iter_mut()
            }
        }

        impl<T> $crate::slicer::Slicer<T> for $container<T> {
            fn at(&self, index: usize) -> Result<&T, $crate::SlicerError> {
                self.elements
                    .get(index)
                    .ok_or($crate::SlicerError::IndexOutOfRange {
                        index,
                        length: self.elements.len(),
                    })
            }

            fn at_mut(&mut self, index: usize) -> Result<&mut T, $crate::SlicerError> {
                let length = self.elements.len();
                self.elements
                    .get_mut(index)
                    .ok_or($crate::SlicerError::IndexOutOfRange { index, length })
            }

            #[inline]
            fn len(&self) -> usize {
                self.elements.len()
            }

            fn iter(&self) -> $crate::slicer::SlicerIter<'_, T> {
                Box::new(self.elements.iter())
            }

            fn append(&mut self, elements: Vec<T>) {
                self.elements.extend(elements);
            }

            fn insert(&mut self, index: usize, elements: Vec<T>) -> Result<(), $crate::SlicerError> {
                $crate::slicer::bounds::check_position(index, self.elements.len())?;
                let tail = self.elements.split_off(index);
                self.elements.extend(elements);
                self.elements.extend(tail);
                Ok(())
            }

            fn pop(&mut self, index: usize) -> Result<T, $crate::SlicerError> {
                $crate::slicer::bounds::check_element(index, self.elements.len())?;
                Ok(self.elements.remove(index))
            }

            fn delete(&mut self, start: usize, end: usize) -> Result<(), $crate::SlicerError> {
                $crate::slicer::bounds::check_range(start, end, self.elements.len())?;
                self.elements.drain(start..end);
                Ok(())
            }

            fn truncate(&mut self, length: usize) {
                self.elements.truncate(length);
            }

            fn clear(&mut self) {
                self.elements.clear();
            }

            fn reverse(&mut self) {
                self.elements.reverse();
            }

            fn sort_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> std::cmp::Ordering) {
                self.elements.sort_by(|left, right| compare(left, right));
            }

            fn retain(&mut self, keep: &mut dyn FnMut(&T) -> bool) {
                self.elements.retain(|element| keep(element));
            }

            fn to_vec(&self) -> Vec<T>
            where
                T: Clone,
            {
                self.elements.clone()
            }
        }

        impl<T> Default for $container<T> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> From<Vec<T>> for $container<T> {
            #[inline]
            fn from(elements: Vec<T>) -> Self {
                Self { elements }
            }
        }

        impl<T, const N: usize> From<[T; N]> for $container<T> {
            #[inline]
            fn from(elements: [T; N]) -> Self {
                Self {
                    elements: Vec::from(elements),
                }
            }
        }

        impl<T> From<$container<T>> for Vec<T> {
            #[inline]
            fn from(container: $container<T>) -> Self {
                container.elements
            }
        }

        impl<T> AsRef<[T]> for $container<T> {
            #[inline]
            fn as_ref(&self) -> &[T] {
                &self.elements
            }
        }

        impl<T> FromIterator<T> for $container<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self {
                    elements: iter.into_iter().collect(),
                }
            }
        }

        impl<T> Extend<T> for $container<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                self.elements.extend(iter);
            }
        }

        impl<T> IntoIterator for $container<T> {
            type Item = T;
            type IntoIter = std::vec::IntoIter<T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.elements.into_iter()
            }
        }

        impl<'a, T> IntoIterator for &'a $container<T> {
            type Item = &'a T;
            type IntoIter = std::slice::Iter<'a, T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.elements.iter()
            }
        }

        /// Panics with [`SlicerError::IndexOutOfRange`]'s message when
        /// `index` is out of bounds.
        ///
        /// [`SlicerError::IndexOutOfRange`]: crate::SlicerError::IndexOutOfRange
        impl<T> std::ops::Index<usize> for $container<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                match $crate::slicer::Slicer::at(self, index) {
                    Ok(element) => element,
                    Err(error) => panic!("{error}"),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $container<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match $crate::slicer::Slicer::at_mut(self, index) {
                    Ok(element) => element,
                    Err(error) => panic!("{error}"),
                }
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $container<T> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.debug_list().entries(self.elements.iter()).finish()
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $container<T> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::slicer::render::write_bracketed(formatter, self.elements.iter())
            }
        }
    };
}

mod ordered;
mod slice;

pub use ordered::OrderedSlice;
pub use slice::ArraySlice;
