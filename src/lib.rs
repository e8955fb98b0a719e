//! # slicelib
//!
//! Generic containers with one uniform, index-based operation set.
//!
//! ## Overview
//!
//! Every container in this crate implements the [`Slicer`](slicer::Slicer)
//! capability trait: positional access, append/insert/pop/delete, search,
//! removal by value, deduplication, sorting, range slicing, equality against
//! slices or other containers, and a bracketed text form. Code written
//! against `Slicer<T>` (or `dyn Slicer<T>`) works with any of them.
//!
//! - **Linked**: [`LinkedList`](linked::LinkedList), a doubly-linked list
//!   whose positional lookups walk from the nearer end
//! - **Array**: [`ArraySlice`](array::ArraySlice) and
//!   [`OrderedSlice`](array::OrderedSlice), thin `Vec` adapters
//! - **Sync**: [`SharedSlicer`](sync::SharedSlicer), one exclusive lock per
//!   container for cross-thread sharing
//!
//! ## Feature Flags
//!
//! - `linked`: the linked list (default)
//! - `array`: the array-backed containers (default)
//! - `sync`: the locked handle (pulls in `parking_lot`)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use slicelib::prelude::*;
//!
//! let mut list = LinkedList::from([1, 2, 3]);
//! assert_eq!(list.index(&3), Some(2));
//!
//! list.reverse();
//! assert_eq!(list.render(), "[ 3, 2, 1 ]");
//!
//! let array = ArraySlice::from(vec![3, 2, 1]);
//! assert!(list.equal_slicer(&array));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability trait, the error type and every enabled
/// container.
///
/// # Usage
///
/// ```rust
/// use slicelib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SlicerError;
    pub use crate::slicer::Slicer;

    #[cfg(feature = "linked")]
    pub use crate::linked::LinkedList;

    #[cfg(feature = "array")]
    pub use crate::array::{ArraySlice, OrderedSlice};

    #[cfg(feature = "sync")]
    pub use crate::sync::SharedSlicer;
}

mod error;
pub mod slicer;

#[cfg(feature = "linked")]
pub mod linked;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "sync")]
pub mod sync;

pub use error::SlicerError;

// Object safety of the contract, and the containers that satisfy it.
static_assertions::assert_obj_safe!(slicer::Slicer<i32>);

#[cfg(feature = "linked")]
static_assertions::assert_impl_all!(
    linked::LinkedList<i32>: slicer::Slicer<i32>,
    Send,
    Sync,
    Clone,
    Default
);

#[cfg(feature = "array")]
static_assertions::assert_impl_all!(
    array::ArraySlice<i32>: slicer::Slicer<i32>,
    Send,
    Sync,
    Clone,
    Default
);

#[cfg(feature = "array")]
static_assertions::assert_impl_all!(
    array::OrderedSlice<i32>: slicer::Slicer<i32>,
    Send,
    Sync,
    Clone,
    Default
);

#[cfg(feature = "sync")]
static_assertions::assert_impl_all!(
    sync::SharedSlicer<std::cell::Cell<i32>>: Send,
    Sync
);
