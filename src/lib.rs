//! # sorted-chain
//!
//! A self-sorting singly-linked container for integers or text.
//!
//! ## Overview
//!
//! [`SortedList`] stores a homogeneous sequence of either integers or text
//! and keeps it sorted after every operation. It provides:
//!
//! - **Configurable ordering**: ascending or descending, custom comparators,
//!   and case-insensitive and natural (digit-aware) text orders
//! - **Duplicate control**: reject duplicates, or place new duplicates
//!   before or after the existing equal run
//! - **Kind locking**: the first value fixes whether the list holds integers
//!   or text
//! - **Derived lists**: `slice`, `filter`, `map` and `merge` return new,
//!   independent lists with the same configuration
//! - **Factories**: from unsorted values, from pre-sorted values, or from a
//!   numeric range
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for lists and values, `Deserialize` for values and
//!   [`SortedListOptions`]
//!
//! ## Example
//!
//! ```rust
//! use sorted_chain::prelude::*;
//!
//! let mut list = SortedList::for_ints(SortedListOptions::new().allow_duplicates(false));
//! list.add_all([5, 2, 7]).unwrap();
//! assert!(list.insert(5).unwrap_err().is_duplicate_rejected());
//! assert_eq!(list.to_string(), "[2, 5, 7]");
//! ```
//!
//! ## Threading
//!
//! Lists are single-threaded. Nothing is synchronised internally and the
//! stored comparator is reference counted, so a list is neither `Send` nor
//! `Sync`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_chain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::Comparator;
    pub use crate::error::{Result, SortedListError};
    pub use crate::list::SortedList;
    pub use crate::options::{Direction, DuplicatesPolicy, SortedListOptions, TextOptions};
    pub use crate::value::{Value, ValueKind};
}

pub mod comparator;
mod construction;
pub mod error;
pub mod iter;
pub mod list;
mod node;
pub mod options;
pub mod value;

pub use comparator::Comparator;
pub use error::{Result, SortedListError};
pub use iter::{SortedListIntoIterator, SortedListIterator};
pub use list::SortedList;
pub use options::{Direction, DuplicatesPolicy, SortedListOptions, TextOptions};
pub use value::{Value, ValueKind};
