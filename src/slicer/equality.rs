//! Element-wise equality between containers.
//!
//! These functions are written once against [`Slicer`] and reused by every
//! implementor, so a linked list can be compared with an array-backed
//! container (or a plain slice) without either knowing the other's layout.
//!
//! All of them fail fast: a length mismatch returns `false` before any
//! element is compared.

use super::Slicer;

/// Compares a container with a slice using `equal`.
///
/// `equal` receives the container's element first and the slice's element
/// second.
///
/// # Examples
///
/// ```rust
/// use slicelib::linked::LinkedList;
/// use slicelib::slicer::equality::equal_slice_by;
///
/// let list = LinkedList::from([1, 2, 3]);
/// assert!(equal_slice_by(&list, &[1, 2, 3], &mut |left, right| left == right));
/// assert!(!equal_slice_by(&list, &[1, 2], &mut |_, _| true));
/// ```
pub fn equal_slice_by<T, S>(slicer: &S, other: &[T], equal: &mut dyn FnMut(&T, &T) -> bool) -> bool
where
    S: Slicer<T> + ?Sized,
{
    if slicer.len() != other.len() {
        return false;
    }
    slicer
        .iter()
        .zip(other)
        .all(|(left, right)| equal(left, right))
}

/// Compares two containers using `equal`, each walked with its own iterator.
///
/// # Examples
///
/// ```rust
/// use slicelib::array::ArraySlice;
/// use slicelib::linked::LinkedList;
/// use slicelib::slicer::equality::equal_slicers_by;
///
/// let list = LinkedList::from([1, 2, 3]);
/// let array = ArraySlice::from(vec![1, 2, 3]);
/// assert!(equal_slicers_by(&list, &array, &mut |left, right| left == right));
/// ```
pub fn equal_slicers_by<T, L, R>(left: &L, right: &R, equal: &mut dyn FnMut(&T, &T) -> bool) -> bool
where
    L: Slicer<T> + ?Sized,
    R: Slicer<T> + ?Sized,
{
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right.iter())
        .all(|(left, right)| equal(left, right))
}

/// Compares two containers with `PartialEq`.
pub fn equal_slicers<T, L, R>(left: &L, right: &R) -> bool
where
    T: PartialEq,
    L: Slicer<T> + ?Sized,
    R: Slicer<T> + ?Sized,
{
    equal_slicers_by(left, right, &mut |left, right| left == right)
}
