//! `Vec`-backed container with natural-order operations.

/// A growable array whose elements can be sorted and binary-searched by
/// their natural order.
///
/// Implements [`Slicer`](crate::slicer::Slicer) like
/// [`ArraySlice`](super::ArraySlice); the extra operations require
/// `T: Ord`.
///
/// # Examples
///
/// ```rust
/// use slicelib::array::OrderedSlice;
///
/// let mut ordered = OrderedSlice::from(vec![5, 3, 9, 1]);
/// ordered.sort();
/// assert_eq!(ordered.as_slice(), &[1, 3, 5, 9]);
/// assert_eq!(ordered.binary_search(&5), Ok(2));
/// assert_eq!(ordered.binary_search(&4), Err(2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedSlice<T> {
    elements: Vec<T>,
}

array_slicer!(OrderedSlice);

impl<T: Ord> OrderedSlice<T> {
    /// Sorts the elements in ascending order. The sort is stable.
    pub fn sort(&mut self) {
        self.elements.sort();
    }

    /// Searches the sorted elements for `value`.
    ///
    /// Returns `Ok(index)` of a matching element, or `Err(index)` where
    /// `value` could be inserted to keep the order. The result is
    /// meaningless if the elements are not sorted.
    pub fn binary_search(&self, value: &T) -> Result<usize, usize> {
        self.elements.binary_search(value)
    }

    /// Returns `true` if the elements are in ascending order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements.is_sorted()
    }
}
