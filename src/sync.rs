//! Externally locked access to a container.
//!
//! Containers in this crate are plain single-owner values. When several
//! threads need to mutate the same container, wrap it in a [`SharedSlicer`]
//! and share that behind an `Arc`: every access goes through one exclusive
//! lock per container, so each operation still runs to completion without
//! interleaving.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//!
//! use slicelib::prelude::*;
//! use slicelib::sync::SharedSlicer;
//!
//! let shared = Arc::new(SharedSlicer::new(LinkedList::new()));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || shared.with_mut(|list| list.append(vec![worker; 10])))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(shared.with(|list| list.len()), 40);
//! ```

use parking_lot::{Mutex, MutexGuard};

/// A container guarded by an exclusive lock.
#[derive(Debug, Default)]
pub struct SharedSlicer<S> {
    inner: Mutex<S>,
}

impl<S> SharedSlicer<S> {
    /// Wraps `container`.
    #[must_use]
    pub const fn new(container: S) -> Self {
        Self {
            inner: Mutex::new(container),
        }
    }

    /// Runs `function` with shared access to the container.
    pub fn with<R>(&self, function: impl FnOnce(&S) -> R) -> R {
        function(&self.inner.lock())
    }

    /// Runs `function` with exclusive access to the container.
    pub fn with_mut<R>(&self, function: impl FnOnce(&mut S) -> R) -> R {
        function(&mut self.inner.lock())
    }

    /// Locks the container until the returned guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }

    /// Consumes the handle, returning the container.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S> From<S> for SharedSlicer<S> {
    fn from(container: S) -> Self {
        Self::new(container)
    }
}
