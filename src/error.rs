//! Error types for sorted list operations.
//!
//! Every hard failure of a [`SortedList`](crate::list::SortedList) operation is
//! reported through [`SortedListError`]. A failed operation leaves the list in
//! the state it had before the call.
//!
//! Queries (`contains`, `index_of`, `remove`) never fail on a value of the
//! wrong kind; they simply report that nothing matched.

use thiserror::Error;

use crate::value::{Value, ValueKind};

/// Errors that can occur when configuring or mutating a sorted list.
///
/// # Examples
///
/// ```rust
/// use sorted_chain::SortedList;
///
/// let mut list = SortedList::for_ints(Default::default());
/// let error = list.insert("five").unwrap_err();
/// assert!(error.is_type_mismatch());
/// assert_eq!(error.to_string(), "type mismatch: expected integer, found text");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortedListError {
    /// Bad construction arguments (unknown token, zero range step).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A value, or a whole other list, conflicts with the established kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind the list is locked to.
        expected: ValueKind,
        /// The kind that was offered.
        found: ValueKind,
    },

    /// An equal value is already stored and duplicates are disallowed.
    #[error("duplicate value rejected: {value}")]
    DuplicateRejected {
        /// The rejected value.
        value: Value,
    },

    /// `first`/`last` on a list with no elements.
    #[error("the list is empty")]
    EmptyContainer,

    /// `get` with an index outside `[0, length)`.
    #[error("index {index} out of range for list of length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
}

impl SortedListError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`SortedListError::InvalidConfiguration`].
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns `true` for [`SortedListError::TypeMismatch`].
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` for [`SortedListError::DuplicateRejected`].
    pub const fn is_duplicate_rejected(&self) -> bool {
        matches!(self, Self::DuplicateRejected { .. })
    }

    /// Returns `true` for [`SortedListError::EmptyContainer`].
    pub const fn is_empty_container(&self) -> bool {
        matches!(self, Self::EmptyContainer)
    }

    /// Returns `true` for [`SortedListError::IndexOutOfRange`].
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortedListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_configuration_display() {
        let error = SortedListError::invalid_configuration("range step must not be zero");
        assert_eq!(
            error.to_string(),
            "invalid configuration: range step must not be zero"
        );
        assert!(error.is_invalid_configuration());
    }

    #[rstest]
    fn test_type_mismatch_display() {
        let error = SortedListError::TypeMismatch {
            expected: ValueKind::Text,
            found: ValueKind::Integer,
        };
        assert_eq!(
            error.to_string(),
            "type mismatch: expected text, found integer"
        );
    }

    #[rstest]
    fn test_duplicate_rejected_display() {
        let error = SortedListError::DuplicateRejected {
            value: Value::from(5),
        };
        assert_eq!(error.to_string(), "duplicate value rejected: 5");
        assert!(error.is_duplicate_rejected());
        assert!(!error.is_type_mismatch());
    }

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = SortedListError::IndexOutOfRange {
            index: 4,
            length: 2,
        };
        assert_eq!(
            error.to_string(),
            "index 4 out of range for list of length 2"
        );
        assert!(error.is_index_out_of_range());
    }

    #[rstest]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = SortedListError::EmptyContainer;
        assert!(error.source().is_none());
        assert!(error.is_empty_container());
    }
}
