//! Configuration for sorted lists.
//!
//! [`SortedListOptions`] fixes everything about a list except its value kind:
//! the sort [`Direction`], whether duplicates are accepted, where new
//! duplicates land ([`DuplicatesPolicy`]), how text compares
//! ([`TextOptions`]), and an optional custom [`Comparator`].
//!
//! Options are validated when they are built, before any value is accepted.
//! Direction and policy can also be given as string tokens; unknown tokens
//! fail with [`SortedListError::InvalidConfiguration`].
//!
//! # Examples
//!
//! ```rust
//! use sorted_chain::{Direction, DuplicatesPolicy, SortedListOptions};
//!
//! let options = SortedListOptions::new()
//!     .direction(Direction::Descending)
//!     .duplicates_policy(DuplicatesPolicy::Head);
//! assert_eq!(options.direction, Direction::Descending);
//!
//! let parsed = SortedListOptions::new().direction_token("desc").unwrap();
//! assert_eq!(parsed.direction, Direction::Descending);
//! assert!(SortedListOptions::new().direction_token("sideways").is_err());
//! ```
//!
//! With the `serde` feature the options load from structured configuration
//! (the custom comparator is code, not data, and is always skipped):
//!
//! ```rust,ignore
//! let options: SortedListOptions = serde_json::from_str(
//!     r#"{ "direction": "desc", "allow_duplicates": false }"#,
//! )?;
//! ```

use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::{Result, SortedListError};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Smallest value first.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Ascending,
    /// Largest value first.
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Descending,
}

impl FromStr for Direction {
    type Err = SortedListError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => {
                tracing::debug!(token = other, "rejected unknown sort direction");
                Err(SortedListError::invalid_configuration(format!(
                    "unknown direction '{other}', expected 'asc' or 'desc'"
                )))
            }
        }
    }
}

/// Where a newly inserted value goes relative to values that compare equal
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DuplicatesPolicy {
    /// Before the existing equal run.
    Head,
    /// After the existing equal run.
    #[default]
    Tail,
}

impl FromStr for DuplicatesPolicy {
    type Err = SortedListError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "head" => Ok(Self::Head),
            "tail" => Ok(Self::Tail),
            other => {
                tracing::debug!(token = other, "rejected unknown duplicates policy");
                Err(SortedListError::invalid_configuration(format!(
                    "unknown duplicates policy '{other}', expected 'head' or 'tail'"
                )))
            }
        }
    }
}

/// How text values compare when no custom comparator is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextOptions {
    /// Fold case before comparing.
    pub case_insensitive: bool,
    /// Compare embedded digit runs by numeric value.
    pub natural_order: bool,
}

impl TextOptions {
    /// Plain, case-sensitive lexicographic order.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_insensitive: false,
            natural_order: false,
        }
    }

    /// Sets case folding.
    #[inline]
    #[must_use]
    pub const fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets natural (digit-run aware) ordering.
    #[inline]
    #[must_use]
    pub const fn natural_order(mut self, natural_order: bool) -> Self {
        self.natural_order = natural_order;
        self
    }
}

/// Construction-time settings of a [`SortedList`](crate::list::SortedList).
///
/// Defaults: ascending, duplicates allowed, tail placement, plain text order,
/// no custom comparator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortedListOptions {
    /// Sort direction.
    pub direction: Direction,
    /// Whether values comparing equal to a stored value are accepted.
    pub allow_duplicates: bool,
    /// Placement of new duplicates; irrelevant when duplicates are disallowed.
    pub duplicates_policy: DuplicatesPolicy,
    /// Text comparison settings; ignored for integers and custom comparators.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub text: TextOptions,
    #[cfg_attr(feature = "serde", serde(skip))]
    comparator: Option<Comparator>,
}

impl Default for SortedListOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedListOptions {
    /// Creates the default options.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            direction: Direction::Ascending,
            allow_duplicates: true,
            duplicates_policy: DuplicatesPolicy::Tail,
            text: TextOptions::new(),
            comparator: None,
        }
    }

    /// Sets the sort direction.
    #[inline]
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the sort direction from a token (`asc`, `ascending`, `desc`,
    /// `descending`).
    ///
    /// # Errors
    ///
    /// [`SortedListError::InvalidConfiguration`] for any other token.
    pub fn direction_token(self, token: &str) -> Result<Self> {
        Ok(self.direction(token.parse()?))
    }

    /// Sets whether duplicates are accepted.
    #[inline]
    #[must_use]
    pub const fn allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }

    /// Sets the duplicate placement policy.
    #[inline]
    #[must_use]
    pub const fn duplicates_policy(mut self, policy: DuplicatesPolicy) -> Self {
        self.duplicates_policy = policy;
        self
    }

    /// Sets the duplicate placement policy from a token (`head`, `tail`).
    ///
    /// # Errors
    ///
    /// [`SortedListError::InvalidConfiguration`] for any other token.
    pub fn duplicates_policy_token(self, token: &str) -> Result<Self> {
        Ok(self.duplicates_policy(token.parse()?))
    }

    /// Sets the text comparison settings.
    #[inline]
    #[must_use]
    pub const fn text(mut self, text: TextOptions) -> Self {
        self.text = text;
        self
    }

    /// Shorthand for `text(self.text.case_insensitive(..))`.
    #[inline]
    #[must_use]
    pub const fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.text = self.text.case_insensitive(case_insensitive);
        self
    }

    /// Shorthand for `text(self.text.natural_order(..))`.
    #[inline]
    #[must_use]
    pub const fn natural_order(mut self, natural_order: bool) -> Self {
        self.text = self.text.natural_order(natural_order);
        self
    }

    /// Uses `comparator` as the base ordering instead of the kind default.
    /// The configured direction still applies on top of it.
    #[must_use]
    pub fn comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Returns the custom comparator, if any.
    #[inline]
    pub const fn custom_comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref()
    }
}
