//! Node-based containers.
//!
//! - [`LinkedList`]: doubly-linked list with index-based access
//!
//! # Examples
//!
//! ```rust
//! use slicelib::prelude::*;
//!
//! let mut list = LinkedList::from([1, 2, 3]);
//! list.pop(2).unwrap();
//! assert!(list.equal(&[1, 2]));
//!
//! list.insert(1, vec![9, 9]).unwrap();
//! assert_eq!(list.to_string(), "[ 1, 9, 9, 2 ]");
//! ```

mod iter;
mod list;
mod node;

pub use iter::LinkedListIntoIterator;
pub use iter::LinkedListIterator;
pub use iter::LinkedListIteratorMut;
pub use list::LinkedList;
