//! The self-sorting linked list.
//!
//! [`SortedList`] keeps a homogeneous sequence of integers or text in order
//! under a configurable [`Comparator`]. Every mutation finds the value's
//! position by walking the chain, so the list is sorted at every observation
//! point.
//!
//! # Kind Locking
//!
//! A list starts with no kind (unless built by a typed factory). The first
//! accepted value fixes the kind and the comparator for the lifetime of the
//! list; a later value of the other kind fails with
//! [`SortedListError::TypeMismatch`]. `clear` keeps the kind.
//!
//! # Duplicate Placement
//!
//! With [`DuplicatesPolicy::Tail`] a new value lands after the run of values
//! comparing equal to it; with [`DuplicatesPolicy::Head`] it lands before.
//!
//! ```text
//! insert 'a' into [a1, a2, b]
//!   Tail: [a1, a2, a, b]
//!   Head: [a, a1, a2, b]
//! ```
//!
//! # Equality and Ordering
//!
//! `contains` and `index_of` match by the comparator, while `remove` and
//! `remove_all` match by structural equality (`==`). Under a custom or
//! case-insensitive comparator these can disagree: `contains("A")` may be
//! true on a list holding `"a"` while `remove("A")` removes nothing.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity               |
//! |----------------------------|--------------------------|
//! | `insert`                   | O(n), O(1) at either end |
//! | `remove`, `remove_all`     | O(n)                     |
//! | `contains`, `index_of`     | O(n), stops early        |
//! | `first`, `last`, `len`     | O(1)                     |
//! | `get`                      | O(n)                     |
//! | `slice`, `filter`          | O(n), O(n²) under Head   |
//! | `merge`                    | O((n + m)²) worst case   |
//! | `map`                      | O(n²) worst case         |
//!
//! # Examples
//!
//! ```rust
//! use sorted_chain::{SortedList, SortedListOptions};
//!
//! let mut list = SortedList::for_ints(SortedListOptions::new());
//! list.add_all([5, 2, 7, 3, 3, 1]).unwrap();
//! assert_eq!(list.to_string(), "[1, 2, 3, 3, 5, 7]");
//! assert_eq!(list.first().unwrap().as_integer(), Some(1));
//! assert_eq!(list.index_of(5), Some(4));
//!
//! assert!(!list.remove("2"));
//! assert!(list.remove(2));
//! assert_eq!(list.len(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::Comparator;
use crate::error::{Result, SortedListError};
use crate::node::{Chain, NodeIndex};
use crate::options::{DuplicatesPolicy, SortedListOptions};
use crate::value::{Value, ValueKind};

/// The established kind of a list together with the comparator built for it.
#[derive(Debug, Clone)]
struct Binding {
    kind: ValueKind,
    comparator: Comparator,
}

/// Where a new node is linked.
enum Placement {
    Front,
    Back,
    After(NodeIndex),
}

/// A singly-linked list that keeps its integers or text values sorted.
///
/// The list is single-threaded: it is neither `Send` nor `Sync` because the
/// comparator is reference counted. Derived lists (`slice`, `filter`, `map`,
/// `merge`, `clone`) own independent chains.
///
/// # Examples
///
/// ```rust
/// use sorted_chain::{Direction, SortedList, SortedListOptions};
///
/// let options = SortedListOptions::new().direction(Direction::Descending);
/// let list = SortedList::from_array(["pear", "apple", "fig"], options).unwrap();
/// assert_eq!(list.to_string(), "[pear, fig, apple]");
/// ```
#[derive(Clone)]
pub struct SortedList {
    chain: Chain,
    binding: Option<Binding>,
    options: SortedListOptions,
}

impl SortedList {
    /// Creates an empty list with default options and no kind.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_options(SortedListOptions::new())
    }

    /// Creates an empty list with the given options and no kind.
    #[inline]
    #[must_use]
    pub const fn with_options(options: SortedListOptions) -> Self {
        Self {
            chain: Chain::new(),
            binding: None,
            options,
        }
    }

    /// Creates an empty list already locked to `kind`.
    pub(crate) fn bound(options: SortedListOptions, kind: ValueKind) -> Self {
        let mut list = Self::with_options(options);
        list.bind(kind);
        list
    }

    /// Creates an empty list sharing this list's options and kind.
    fn empty_like(&self) -> Self {
        Self {
            chain: Chain::new(),
            binding: self.binding.clone(),
            options: self.options.clone(),
        }
    }

    /// Returns the established kind, or `None` before the first value.
    #[inline]
    pub fn kind(&self) -> Option<ValueKind> {
        self.binding.as_ref().map(|binding| binding.kind)
    }

    /// Returns the options this list was configured with.
    #[inline]
    pub const fn options(&self) -> &SortedListOptions {
        &self.options
    }

    /// Returns the number of stored values.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if no values are stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub(crate) const fn chain(&self) -> &Chain {
        &self.chain
    }

    pub(crate) fn into_chain(self) -> Chain {
        self.chain
    }

    fn bind(&mut self, kind: ValueKind) -> Comparator {
        let comparator = Comparator::build(
            kind,
            self.options.direction,
            self.options.text,
            self.options.custom_comparator(),
        );
        tracing::trace!(
            %kind,
            direction = ?self.options.direction,
            custom = self.options.custom_comparator().is_some(),
            "established value kind"
        );
        self.binding = Some(Binding {
            kind,
            comparator: comparator.clone(),
        });
        comparator
    }

    /// Validates `value` against the established kind, establishing it if
    /// this is the first value, and returns the comparator.
    fn accept(&mut self, value: &Value) -> Result<Comparator> {
        let found = value.kind();
        match &self.binding {
            Some(binding) if binding.kind == found => Ok(binding.comparator.clone()),
            Some(binding) => {
                tracing::debug!(expected = %binding.kind, %found, "rejected value of the wrong kind");
                Err(SortedListError::TypeMismatch {
                    expected: binding.kind,
                    found,
                })
            }
            None => Ok(self.bind(found)),
        }
    }

    /// Comparator for a query value, or `None` when the value cannot match.
    fn query_comparator(&self, value: &Value) -> Option<&Comparator> {
        self.binding
            .as_ref()
            .filter(|binding| binding.kind == value.kind())
            .map(|binding| &binding.comparator)
    }

    fn reject_duplicate(&self, comparator: &Comparator, value: Value) -> Result<Value> {
        if !self.options.allow_duplicates && self.position_of(comparator, &value).is_some() {
            tracing::debug!(%value, "rejected duplicate value");
            return Err(SortedListError::DuplicateRejected { value });
        }
        Ok(value)
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `value` at its sorted position.
    ///
    /// # Errors
    ///
    /// - [`SortedListError::TypeMismatch`] if `value` is of the other kind.
    /// - [`SortedListError::DuplicateRejected`] if duplicates are disallowed
    ///   and an equal value is stored.
    ///
    /// The list is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{DuplicatesPolicy, SortedList, SortedListOptions};
    ///
    /// let options = SortedListOptions::new()
    ///     .case_insensitive(true)
    ///     .duplicates_policy(DuplicatesPolicy::Head);
    /// let mut list = SortedList::for_strings(options);
    /// list.add_all(["b", "a"]).unwrap();
    /// list.insert("A").unwrap();
    /// assert_eq!(list.to_string(), "[A, a, b]");
    /// ```
    pub fn insert(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let comparator = self.accept(&value)?;
        let value = self.reject_duplicate(&comparator, value)?;
        match self.placement(&comparator, &value) {
            Placement::Front => self.chain.push_front(value),
            Placement::Back => self.chain.push_back(value),
            Placement::After(previous) => self.chain.insert_after(previous, value),
        }
        self.debug_assert_structure();
        Ok(())
    }

    /// Finds where `value` belongs under the duplicates policy.
    fn placement(&self, comparator: &Comparator, value: &Value) -> Placement {
        let policy = self.options.duplicates_policy;
        let precedes = |stored: &Value| {
            let ordering = comparator.compare(value, stored);
            match policy {
                DuplicatesPolicy::Tail => ordering == Ordering::Less,
                DuplicatesPolicy::Head => ordering != Ordering::Greater,
            }
        };

        let (Some(first), Some(last), Some(head)) =
            (self.chain.first(), self.chain.last(), self.chain.head())
        else {
            return Placement::Back;
        };
        if precedes(first) {
            return Placement::Front;
        }
        if !precedes(last) {
            return Placement::Back;
        }

        let mut previous = head;
        while let Some(next) = self.chain.next_of(previous) {
            match self.chain.node(next) {
                Some(node) if !precedes(&node.value) => previous = next,
                _ => break,
            }
        }
        Placement::After(previous)
    }

    /// Inserts every value in order. Not atomic: values inserted before a
    /// failing one stay in the list.
    ///
    /// # Errors
    ///
    /// The first error returned by [`SortedList::insert`].
    pub fn add_all<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Links `value` at the tail without searching for its position.
    ///
    /// Kind and duplicate checks still apply; ordering is the caller's
    /// responsibility.
    pub(crate) fn append_presorted(&mut self, value: Value) -> Result<()> {
        let comparator = self.accept(&value)?;
        let value = self.reject_duplicate(&comparator, value)?;
        self.chain.push_back(value);
        self.debug_assert_links();
        Ok(())
    }

    /// Inserts a value taken from a list with the same kind and options.
    ///
    /// The source already passed the kind and duplicate checks, so an error
    /// here means the source was corrupted.
    fn reinsert(&mut self, value: &Value) {
        if let Err(error) = self.insert(value.clone()) {
            tracing::warn!(%error, "dropped value while deriving a list");
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes the first value structurally equal to `value`.
    ///
    /// Returns `false` if nothing matched, including when `value` is of the
    /// other kind.
    pub fn remove(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.query_comparator(&value).is_none() {
            return false;
        }

        let mut previous = None;
        let mut cursor = self.chain.head();
        while let Some(index) = cursor {
            let Some(node) = self.chain.node(index) else {
                break;
            };
            if node.value == value {
                self.chain.remove_after(previous);
                self.debug_assert_structure();
                return true;
            }
            previous = Some(index);
            cursor = node.next;
        }
        false
    }

    /// Removes every value structurally equal to `value` and returns how
    /// many were removed.
    pub fn remove_all(&mut self, value: impl Into<Value>) -> usize {
        let value = value.into();
        if self.query_comparator(&value).is_none() {
            return 0;
        }

        let mut removed = 0;
        while self.chain.first() == Some(&value) {
            self.chain.pop_front();
            removed += 1;
        }

        let mut cursor = self.chain.head();
        while let Some(previous) = cursor {
            let Some(next) = self.chain.next_of(previous) else {
                break;
            };
            if self.chain.node(next).is_some_and(|node| node.value == value) {
                self.chain.remove_after(Some(previous));
                removed += 1;
            } else {
                cursor = Some(next);
            }
        }

        if removed > 0 {
            tracing::trace!(%value, removed, "removed all matching values");
        }
        self.debug_assert_structure();
        removed
    }

    /// Removes and returns the first value, or `None` if the list is empty.
    pub fn pop_first(&mut self) -> Option<Value> {
        let value = self.chain.pop_front();
        self.debug_assert_structure();
        value
    }

    /// Removes every value. The established kind is kept.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.debug_assert_structure();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Comparator-equality scan that stops once the sorted position of
    /// `value` has been passed.
    fn position_of(&self, comparator: &Comparator, value: &Value) -> Option<usize> {
        for (position, stored) in self.iter().enumerate() {
            match comparator.compare(stored, value) {
                Ordering::Less => {}
                Ordering::Equal => return Some(position),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Returns `true` if a value comparing equal to `value` is stored.
    ///
    /// A value of the other kind is never contained.
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first value comparing equal to `value`.
    pub fn index_of(&self, value: impl Into<Value>) -> Option<usize> {
        let value = value.into();
        let comparator = self.query_comparator(&value)?;
        self.position_of(comparator, &value)
    }

    /// Returns the first (smallest under the comparator) value.
    ///
    /// # Errors
    ///
    /// [`SortedListError::EmptyContainer`] if the list is empty.
    pub fn first(&self) -> Result<&Value> {
        self.chain.first().ok_or(SortedListError::EmptyContainer)
    }

    /// Returns the last (largest under the comparator) value.
    ///
    /// # Errors
    ///
    /// [`SortedListError::EmptyContainer`] if the list is empty.
    pub fn last(&self) -> Result<&Value> {
        self.chain.last().ok_or(SortedListError::EmptyContainer)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`SortedListError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        let out_of_range = SortedListError::IndexOutOfRange {
            index,
            length: self.len(),
        };
        if index >= self.len() {
            return Err(out_of_range);
        }
        self.iter().nth(index).ok_or(out_of_range)
    }

    // =========================================================================
    // Derived Lists
    // =========================================================================

    /// Copies a range of values into a new list with the same configuration.
    ///
    /// The copied values are inserted one by one, so the duplicates policy
    /// decides the order of equal runs in the result.
    ///
    /// A negative `start` counts from the end (`-1` is the last value) and is
    /// clamped to `0`. A `start` at or past the end, or a non-positive
    /// `length`, gives an empty list. `None` takes the rest of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::SortedList;
    ///
    /// let list = SortedList::from_range(1, 6, 1).unwrap();
    /// assert_eq!(list.slice(1, Some(2)).to_string(), "[2, 3]");
    /// assert_eq!(list.slice(-2, None).to_string(), "[5, 6]");
    /// assert!(list.slice(10, None).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, start: isize, length: Option<isize>) -> Self {
        let mut sliced = self.empty_like();
        let size = isize::try_from(self.len()).unwrap_or(isize::MAX);
        let start = if start < 0 {
            (size + start).max(0)
        } else {
            start
        };
        if start >= size {
            return sliced;
        }
        let available = size - start;
        let length = length.unwrap_or(available).min(available);
        let (Ok(skip), Ok(take)) = (usize::try_from(start), usize::try_from(length)) else {
            return sliced;
        };

        for value in self.iter().skip(skip).take(take) {
            sliced.reinsert(value);
        }
        tracing::trace!(start, taken = sliced.len(), "sliced list");
        sliced
    }

    /// Returns a new list with the values for which `predicate` holds,
    /// inserted in traversal order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Value) -> bool,
    {
        let mut filtered = self.empty_like();
        for value in self {
            if predicate(value) {
                filtered.reinsert(value);
            }
        }
        filtered
    }

    /// Returns a new list holding `transform(value)` for every value.
    ///
    /// The result shares this list's options but establishes its own kind
    /// from the first transformed value, so a transform may change kind.
    /// Every result is inserted afresh because the transform need not
    /// preserve order, which costs O(n²) in the worst case.
    ///
    /// # Errors
    ///
    /// - [`SortedListError::TypeMismatch`] if the transform yields both kinds.
    /// - [`SortedListError::DuplicateRejected`] if duplicates are disallowed
    ///   and two results compare equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{SortedList, Value};
    ///
    /// let list = SortedList::from_array([1, 2, 3], Default::default()).unwrap();
    /// let negated = list.map(|value| -value.as_integer().unwrap_or(0)).unwrap();
    /// assert_eq!(negated.to_string(), "[-3, -2, -1]");
    ///
    /// let labels = list.map(|value| format!("n{value}")).unwrap();
    /// assert_eq!(labels.first().unwrap(), &Value::from("n1"));
    /// ```
    pub fn map<F, R>(&self, mut transform: F) -> Result<Self>
    where
        F: FnMut(&Value) -> R,
        R: Into<Value>,
    {
        let mut mapped = Self::with_options(self.options.clone());
        for value in self {
            mapped.insert(transform(value))?;
        }
        tracing::trace!(length = mapped.len(), "mapped list");
        Ok(mapped)
    }

    /// Returns a new list with every value of `self` and then every value of
    /// `other`, each inserted under this list's configuration.
    ///
    /// # Errors
    ///
    /// - [`SortedListError::TypeMismatch`] if both lists have established,
    ///   different kinds.
    /// - [`SortedListError::DuplicateRejected`] if duplicates are disallowed
    ///   and a value of `other` compares equal to one already merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{SortedList, SortedListOptions};
    ///
    /// let left = SortedList::from_array([1, 4], SortedListOptions::new()).unwrap();
    /// let right = SortedList::from_array([2, 4], SortedListOptions::new()).unwrap();
    /// assert_eq!(left.merge(&right).unwrap().to_string(), "[1, 2, 4, 4]");
    ///
    /// let unique = SortedListOptions::new().allow_duplicates(false);
    /// let left = SortedList::from_array([1, 2], unique.clone()).unwrap();
    /// let right = SortedList::from_array([2, 3], unique).unwrap();
    /// assert!(left.merge(&right).unwrap_err().is_duplicate_rejected());
    /// ```
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if let (Some(expected), Some(found)) = (self.kind(), other.kind())
            && expected != found
        {
            tracing::debug!(%expected, %found, "refused to merge lists of different kinds");
            return Err(SortedListError::TypeMismatch { expected, found });
        }

        let mut merged = self.empty_like();
        if merged.binding.is_none()
            && let Some(kind) = other.kind()
        {
            merged.bind(kind);
        }
        for value in self.iter().chain(other) {
            merged.insert(value.clone())?;
        }
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            merged = merged.len(),
            "merged lists"
        );
        Ok(merged)
    }

    /// Checks ordering, the linked structure and kind uniformity in debug
    /// builds.
    #[inline]
    fn debug_assert_structure(&self) {
        #[cfg(debug_assertions)]
        {
            if let Some(binding) = &self.binding {
                debug_assert!(
                    self.iter()
                        .zip(self.iter().skip(1))
                        .all(|(left, right)| binding.comparator.compare(left, right)
                            != Ordering::Greater),
                    "list is out of order"
                );
            }
        }
        self.debug_assert_links();
    }

    /// Checks the linked structure and kind uniformity in debug builds.
    ///
    /// Used on its own after unchecked appends, whose order is trusted.
    #[inline]
    fn debug_assert_links(&self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(
                self.chain.walk_is_consistent(),
                "linked structure out of sync with head, tail or length"
            );
            if let Some(binding) = &self.binding {
                debug_assert!(
                    self.iter().all(|value| value.kind() == binding.kind),
                    "list holds a value of the wrong kind"
                );
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for SortedList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Two lists are equal when they hold equal values in the same order;
/// configuration is not compared.
impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SortedList {}

impl fmt::Debug for SortedList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for SortedList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}
