//! Traversal and export of a [`SortedList`].
//!
//! Every call to [`SortedList::iter`] starts a fresh pass from the head, so
//! traversals are restartable. [`SortedList::to_vec`] materialises the same
//! sequence eagerly, and with the `serde` feature a list serializes as
//! exactly that sequence with no surrounding metadata.
//!
//! A [`SortedListIterator`] holds a shared borrow of the list, so the list
//! cannot be mutated while a pass is in progress.
//!
//! # Examples
//!
//! ```rust
//! use sorted_chain::{SortedList, Value};
//!
//! let list = SortedList::from_array([3, 1, 2], Default::default()).unwrap();
//! let doubled: Vec<i64> = list
//!     .iter()
//!     .filter_map(Value::as_integer)
//!     .map(|number| number * 2)
//!     .collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! assert_eq!(list.to_vec(), vec![Value::from(1), Value::from(2), Value::from(3)]);
//! ```

use std::iter::FusedIterator;

use crate::list::SortedList;
use crate::node::{Chain, NodeIndex};
use crate::value::Value;

/// An iterator over references to the values of a [`SortedList`], in order.
pub struct SortedListIterator<'a> {
    chain: &'a Chain,
    cursor: Option<NodeIndex>,
    remaining: usize,
}

impl<'a> Iterator for SortedListIterator<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SortedListIterator<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for SortedListIterator<'_> {}

/// An owning iterator over the values of a [`SortedList`], in order.
pub struct SortedListIntoIterator {
    chain: Chain,
}

impl Iterator for SortedListIntoIterator {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl ExactSizeIterator for SortedListIntoIterator {
    fn len(&self) -> usize {
        self.chain.len()
    }
}

impl FusedIterator for SortedListIntoIterator {}

impl SortedList {
    /// Returns an iterator over the values from first to last.
    #[inline]
    pub fn iter(&self) -> SortedListIterator<'_> {
        let chain = self.chain();
        SortedListIterator {
            chain,
            cursor: chain.head(),
            remaining: chain.len(),
        }
    }

    /// Copies the values, in order, into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }
}

impl IntoIterator for SortedList {
    type Item = Value;
    type IntoIter = SortedListIntoIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedListIntoIterator {
            chain: self.into_chain(),
        }
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Value;
    type IntoIter = SortedListIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<SortedList> for Vec<Value> {
    fn from(list: SortedList) -> Self {
        list.into_iter().collect()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for SortedList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::SortedList;
    use crate::options::SortedListOptions;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    fn test_iter_is_restartable() {
        let list = SortedList::from_array([2, 1], SortedListOptions::new()).unwrap();
        let first_pass: Vec<&Value> = list.iter().collect();
        let second_pass: Vec<&Value> = list.iter().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass, vec![&Value::from(1), &Value::from(2)]);
    }

    #[rstest]
    fn test_iter_reports_exact_length() {
        let list = SortedList::from_array([5, 6, 7], SortedListOptions::new()).unwrap();
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 3);
        iterator.next();
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.by_ref().count(), 2);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_into_iter_yields_owned_values_in_order() {
        let list = SortedList::from_array(["b", "c", "a"], SortedListOptions::new()).unwrap();
        let owned: Vec<Value> = list.into_iter().collect();
        assert_eq!(
            owned,
            vec![Value::from("a"), Value::from("b"), Value::from("c")]
        );
    }

    #[rstest]
    fn test_snapshot_matches_traversal() {
        let list = SortedList::from_array([9, -1, 4, 4], SortedListOptions::new()).unwrap();
        let traversed: Vec<Value> = list.iter().cloned().collect();
        assert_eq!(list.to_vec(), traversed);
        assert_eq!(Vec::from(list), traversed);
    }

    #[rstest]
    fn test_empty_iteration() {
        let list = SortedList::new();
        assert_eq!(list.iter().next(), None);
        assert!(list.to_vec().is_empty());
    }
}
