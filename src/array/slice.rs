//! `Vec`-backed container.

/// A growable array implementing [`Slicer`](crate::slicer::Slicer).
///
/// Positional operations are the usual `Vec` costs: O(1) access, O(n)
/// insertion and removal away from the end.
///
/// # Examples
///
/// ```rust
/// use slicelib::prelude::*;
///
/// let mut array = ArraySlice::from(vec![1, 1, 2, 2, 3, 3]);
/// array.remove_duplicates();
/// assert!(array.equal(&[1, 2, 3]));
///
/// let copy = array.clone();
/// array.clear();
/// assert_eq!(copy.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArraySlice<T> {
    elements: Vec<T>,
}

array_slicer!(ArraySlice);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlicerError;
    use crate::slicer::Slicer;
    use rstest::rstest;

    #[rstest]
    fn test_at_out_of_range() {
        let array = ArraySlice::from([1, 2, 3]);
        assert_eq!(
            array.at(3),
            Err(SlicerError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
    }

    #[rstest]
    #[case(0, &[7, 8, 1, 2])]
    #[case(1, &[1, 7, 8, 2])]
    #[case(2, &[1, 2, 7, 8])]
    fn test_insert(#[case] index: usize, #[case] expected: &[i32]) {
        let mut array = ArraySlice::from([1, 2]);
        array.insert(index, vec![7, 8]).unwrap();
        assert_eq!(array.as_slice(), expected);
    }

    #[rstest]
    fn test_insert_out_of_range() {
        let mut array = ArraySlice::from([1, 2]);
        assert!(array.insert(3, vec![7]).is_err());
        assert_eq!(array.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_delete_inverted_range() {
        let mut array = ArraySlice::from([1, 2, 3]);
        assert_eq!(
            array.delete(2, 1),
            Err(SlicerError::InvertedRange { start: 2, end: 1 })
        );
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_pop_returns_element() {
        let mut array = ArraySlice::from([1, 2, 3]);
        assert_eq!(array.pop(1), Ok(2));
        assert_eq!(array.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_retain() {
        let mut array: ArraySlice<i32> = (1..=6).collect();
        array.retain(&mut |element| element % 3 == 0);
        assert_eq!(array.into_vec(), vec![3, 6]);
    }

    #[rstest]
    fn test_display_and_debug() {
        let array = ArraySlice::from([1, 2, 3]);
        assert_eq!(array.to_string(), "[ 1, 2, 3 ]");
        assert_eq!(format!("{array:?}"), "[1, 2, 3]");
        assert_eq!(ArraySlice::<i32>::new().to_string(), "[ ]");
    }

    #[rstest]
    #[should_panic(expected = "index out of range [4] with length 1")]
    fn test_index_operator_panics() {
        let array = ArraySlice::from([1]);
        let _element = array[4];
    }
}
