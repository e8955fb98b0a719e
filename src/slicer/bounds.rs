//! Bounds checks shared by every container.
//!
//! Each function validates an index (or range) against a container length
//! and returns the matching [`SlicerError`] on failure. Containers call these
//! before mutating anything, so a failed operation leaves them untouched.

use crate::error::SlicerError;

/// Checks that `index` addresses an existing element, i.e. `index < length`.
///
/// # Errors
///
/// Returns [`SlicerError::IndexOutOfRange`] when `index >= length`.
///
/// # Examples
///
/// ```rust
/// use slicelib::slicer::bounds::check_element;
///
/// assert!(check_element(2, 3).is_ok());
/// assert!(check_element(3, 3).is_err());
/// ```
#[inline]
pub const fn check_element(index: usize, length: usize) -> Result<(), SlicerError> {
    if index < length {
        Ok(())
    } else {
        Err(SlicerError::IndexOutOfRange { index, length })
    }
}

/// Checks that `index` is a valid insertion point, i.e. `index <= length`.
///
/// # Errors
///
/// Returns [`SlicerError::IndexOutOfRange`] when `index > length`.
#[inline]
pub const fn check_position(index: usize, length: usize) -> Result<(), SlicerError> {
    if index <= length {
        Ok(())
    } else {
        Err(SlicerError::IndexOutOfRange { index, length })
    }
}

/// Checks that `[start, end)` is a valid half-open range over `length`
/// elements.
///
/// # Errors
///
/// Returns [`SlicerError::IndexOutOfRange`] when either bound exceeds
/// `length`, and [`SlicerError::InvertedRange`] when `start > end`.
///
/// # Examples
///
/// ```rust
/// use slicelib::SlicerError;
/// use slicelib::slicer::bounds::check_range;
///
/// assert!(check_range(1, 5, 8).is_ok());
/// assert_eq!(
///     check_range(5, 1, 8),
///     Err(SlicerError::InvertedRange { start: 5, end: 1 })
/// );
/// ```
#[inline]
pub const fn check_range(start: usize, end: usize, length: usize) -> Result<(), SlicerError> {
    if start > length {
        return Err(SlicerError::IndexOutOfRange {
            index: start,
            length,
        });
    }
    if end > length {
        return Err(SlicerError::IndexOutOfRange { index: end, length });
    }
    if start > end {
        return Err(SlicerError::InvertedRange { start, end });
    }
    Ok(())
}
