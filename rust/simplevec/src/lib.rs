//! A growable, randomly indexable sequence backed by a single contiguous heap
//! allocation.
//!
//! [`SimpleVector`] keeps an explicit logical length and physical capacity over
//! an exclusively owned [`ArrayPtr`] block. Appends are amortized O(1) through
//! capacity doubling; positional insert and erase shift the occupied prefix in
//! place.
//!
//! ```
//! use simplevec::simple_vector;
//!
//! let mut v = simple_vector![10, 20, 30];
//! v.insert(1, 15);
//! assert_eq!(v, [10, 15, 20, 30]);
//! assert!(v.at(4).is_err());
//! ```

pub mod macros;
pub mod simple_vector;

#[cfg(feature = "serde")]
mod serde;


pub use simple_vector::SimpleVector;
pub use simplevec_array_ptr::ArrayPtr;
pub use simplevec_common::error::{Error, ErrorKind};
pub use simplevec_common::Result;
