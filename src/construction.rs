//! Factories for building a [`SortedList`] in one call.
//!
//! | Factory              | Cost                         | Ordering            |
//! |----------------------|------------------------------|---------------------|
//! | `for_ints`           | O(1)                         | empty, kind bound   |
//! | `for_strings`        | O(1)                         | empty, kind bound   |
//! | `from_array`         | O(n²) worst case             | sorted on insertion |
//! | `from_sorted_array`  | O(n), O(n²) without dups     | trusted from caller |
//! | `from_range`         | O(n)                         | generated           |
//!
//! `from_sorted_array` appends at the tail without searching for positions.
//! Feeding it unsorted input is a contract violation that is not detected;
//! the resulting order is unspecified.

use crate::error::{Result, SortedListError};
use crate::list::SortedList;
use crate::options::SortedListOptions;
use crate::value::{Value, ValueKind};

impl SortedList {
    /// Creates an empty list locked to integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{SortedList, ValueKind};
    ///
    /// let list = SortedList::for_ints(Default::default());
    /// assert_eq!(list.kind(), Some(ValueKind::Integer));
    /// ```
    #[must_use]
    pub fn for_ints(options: SortedListOptions) -> Self {
        Self::bound(options, ValueKind::Integer)
    }

    /// Creates an empty list locked to text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{SortedList, SortedListOptions};
    ///
    /// let options = SortedListOptions::new()
    ///     .natural_order(true)
    ///     .case_insensitive(true);
    /// let mut list = SortedList::for_strings(options);
    /// list.add_all(["file9", "File10", "file2"]).unwrap();
    /// assert_eq!(list.to_string(), "[file2, file9, File10]");
    /// ```
    #[must_use]
    pub fn for_strings(options: SortedListOptions) -> Self {
        Self::bound(options, ValueKind::Text)
    }

    /// Builds a list from values in any order.
    ///
    /// # Errors
    ///
    /// The first error returned by [`SortedList::insert`].
    pub fn from_array<I, V>(values: I, options: SortedListOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut list = Self::with_options(options);
        list.add_all(values)?;
        Ok(list)
    }

    /// Builds a list from values the caller guarantees are already in the
    /// configured order, appending each at the tail.
    ///
    /// # Errors
    ///
    /// - [`SortedListError::TypeMismatch`] if the values mix kinds.
    /// - [`SortedListError::DuplicateRejected`] if duplicates are disallowed
    ///   and two values compare equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::SortedList;
    ///
    /// let list = SortedList::from_sorted_array(["a", "b", "c"], Default::default()).unwrap();
    /// assert_eq!(list.last().unwrap().as_text(), Some("c"));
    /// ```
    pub fn from_sorted_array<I, V>(values: I, options: SortedListOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut list = Self::with_options(options);
        for value in values {
            list.append_presorted(value.into())?;
        }
        Ok(list)
    }

    /// Builds an ascending integer list over `start..=end`, stepping by
    /// `step`. A negative step walks down from `start` to `end`.
    ///
    /// # Errors
    ///
    /// [`SortedListError::InvalidConfiguration`] if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::SortedList;
    ///
    /// let evens = SortedList::from_range(0, 10, 2).unwrap();
    /// assert_eq!(evens.to_string(), "[0, 2, 4, 6, 8, 10]");
    ///
    /// let down = SortedList::from_range(9, 0, -3).unwrap();
    /// assert_eq!(down.to_string(), "[0, 3, 6, 9]");
    ///
    /// assert!(SortedList::from_range(1, 5, 0).is_err());
    /// ```
    pub fn from_range(start: i64, end: i64, step: i64) -> Result<Self> {
        Self::from_range_with_options(start, end, step, SortedListOptions::new())
    }

    /// [`SortedList::from_range`] with explicit options, for example to keep
    /// the generated values in descending order.
    ///
    /// # Errors
    ///
    /// [`SortedListError::InvalidConfiguration`] if `step` is zero, or the
    /// first error returned by [`SortedList::insert`].
    pub fn from_range_with_options(
        start: i64,
        end: i64,
        step: i64,
        options: SortedListOptions,
    ) -> Result<Self> {
        if step == 0 {
            tracing::debug!(start, end, "rejected range with zero step");
            return Err(SortedListError::invalid_configuration(
                "range step must not be zero",
            ));
        }

        let mut list = Self::for_ints(options);
        let mut current = Some(start);
        while let Some(value) = current {
            let finished = if step > 0 { value > end } else { value < end };
            if finished {
                break;
            }
            list.insert(value)?;
            current = value.checked_add(step);
        }
        tracing::trace!(start, end, step, length = list.len(), "generated range");
        Ok(list)
    }
}
