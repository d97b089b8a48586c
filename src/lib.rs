//! A Fenwick tree (binary indexed tree) over numeric weights.
//!
//! [`Fenwick`] keeps a fixed number of values and supports:
//! - point updates (`add`, `set`) in `O(log n)`
//! - inclusive prefix sums (`get`) in `O(log n)`
//! - binary searches over the prefix sums (`lower_bound`, `upper_bound`, `find_index`, ..)
//!   in `O(log n)`, by descending the implicit tree instead of scanning
//!
//! Reads outside the tree return `None`; updates outside the tree return
//! [`Error::IndexOutOfRange`].
//!
//! ```
//! use bitree::Fenwick;
//!
//! let mut t = Fenwick::<i64>::from_slice(&[0, 1, 2, 3]);
//! assert_eq!(t.to_vec(), [0, 1, 3, 6]);
//! assert_eq!(t.lower_bound(3), 2);
//! assert_eq!(t.upper_bound(3), 3);
//!
//! t.add(0, 4).unwrap();
//! assert_eq!(t.get(3), Some(10));
//! assert_eq!(t.get(4), None);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fenwick;
#[cfg(feature = "serde")]
mod serde_impl;
mod weight;


pub use error::{Error, Result};
pub use fenwick::Fenwick;
pub use weight::Weight;
