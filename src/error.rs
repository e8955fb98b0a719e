//! Error types for container operations.
//!
//! Every index-taking operation of [`Slicer`](crate::slicer::Slicer) validates
//! its arguments before touching the container, and reports a violation with
//! a [`SlicerError`]. A failed call never leaves the container partially
//! modified.

use std::fmt;

/// Represents an invalid index or range passed to a container operation.
///
/// # Examples
///
/// ```rust
/// use slicelib::SlicerError;
///
/// let error = SlicerError::IndexOutOfRange { index: 5, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "index out of range [5] with length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlicerError {
    /// The index lies outside the bounds accepted by the operation.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the container at the time of the call.
        length: usize,
    },
    /// A half-open range whose start lies past its end.
    InvertedRange {
        /// The start of the range.
        start: usize,
        /// The end of the range.
        end: usize,
    },
}

impl fmt::Display for SlicerError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => {
                write!(formatter, "index out of range [{index}] with length {length}")
            }
            Self::InvertedRange { start, end } => {
                write!(formatter, "slice bounds out of range [{start}:{end}]")
            }
        }
    }
}

impl std::error::Error for SlicerError {}
