//! Comparator construction.
//!
//! A [`Comparator`] is the single three-way ordering function a list uses for
//! every placement and lookup decision. It is built once, when the list's
//! [`ValueKind`] becomes known, from:
//!
//! - a base ordering: either a user-supplied function or the kind's default
//!   (numeric order for integers, one of four text orders for text), and
//! - a [`Direction`], which reverses the base order when descending.
//!
//! # Text Orders
//!
//! | `case_insensitive` | `natural_order` | Order                          |
//! |--------------------|-----------------|--------------------------------|
//! | `false`            | `false`         | Plain lexicographic            |
//! | `true`             | `false`         | Lexicographic, case folded     |
//! | `false`            | `true`          | Natural (digit runs by value)  |
//! | `true`             | `true`          | Natural, case folded           |
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sorted_chain::{Comparator, Direction, TextOptions, Value, ValueKind};
//!
//! let natural = TextOptions::new().natural_order(true);
//! let comparator = Comparator::build(ValueKind::Text, Direction::Ascending, natural, None);
//! assert_eq!(
//!     comparator.compare(&Value::from("file9"), &Value::from("file10")),
//!     Ordering::Less
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::rc::Rc;
use std::str::Chars;

use crate::options::{Direction, TextOptions};
use crate::value::{Value, ValueKind};

type CompareFunction = dyn Fn(&Value, &Value) -> Ordering;

/// A stored three-way comparison over two values of the same kind.
///
/// Cloning a comparator is cheap; clones share the same function.
#[derive(Clone)]
pub struct Comparator {
    function: Rc<CompareFunction>,
}

impl Comparator {
    /// Wraps an ordering function.
    ///
    /// The function receives two values of the list's kind and must describe
    /// a total order over them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_chain::{Comparator, Value};
    ///
    /// // Order text by length only.
    /// let by_length = Comparator::new(|left: &Value, right: &Value| {
    ///     let length = |value: &Value| value.as_text().map_or(0, str::len);
    ///     length(left).cmp(&length(right))
    /// });
    /// assert!(by_length.compare(&Value::from("zz"), &Value::from("aaa")).is_lt());
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Builds the comparator for a list of `kind`.
    ///
    /// A `user` comparator replaces the kind's default base ordering;
    /// `text` is consulted only when there is no user comparator and the
    /// kind is [`ValueKind::Text`].
    #[must_use]
    pub fn build(
        kind: ValueKind,
        direction: Direction,
        text: TextOptions,
        user: Option<&Self>,
    ) -> Self {
        let base = user.cloned().unwrap_or_else(|| Self::default_for(kind, text));
        match direction {
            Direction::Ascending => base,
            Direction::Descending => {
                Self::new(move |left: &Value, right: &Value| base.compare(left, right).reverse())
            }
        }
    }

    fn default_for(kind: ValueKind, text: TextOptions) -> Self {
        match kind {
            ValueKind::Integer => Self::new(Value::cmp),
            ValueKind::Text => match (text.case_insensitive, text.natural_order) {
                (false, false) => Self::new(Value::cmp),
                (true, false) => Self::new(|left: &Value, right: &Value| {
                    compare_text(left, right, compare_case_insensitive)
                }),
                (false, true) => Self::new(|left: &Value, right: &Value| {
                    compare_text(left, right, |left, right| compare_natural(left, right, false))
                }),
                (true, true) => Self::new(|left: &Value, right: &Value| {
                    compare_text(left, right, |left, right| compare_natural(left, right, true))
                }),
            },
        }
    }

    /// Compares two values.
    #[inline]
    pub fn compare(&self, left: &Value, right: &Value) -> Ordering {
        (self.function)(left, right)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Comparator").finish_non_exhaustive()
    }
}

/// Applies a text ordering, falling back to the derived order for non-text.
fn compare_text(left: &Value, right: &Value, order: impl Fn(&str, &str) -> Ordering) -> Ordering {
    match (left, right) {
        (Value::Text(left), Value::Text(right)) => order(left, right),
        _ => left.cmp(right),
    }
}

/// Lexicographic comparison after lowercasing every character.
pub(crate) fn compare_case_insensitive(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Natural comparison: runs of ASCII digits compare by numeric value, all
/// other characters compare one by one.
pub(crate) fn compare_natural(left: &str, right: &str, fold_case: bool) -> Ordering {
    let mut left = left.chars().peekable();
    let mut right = right.chars().peekable();
    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left_char), Some(right_char))
                if left_char.is_ascii_digit() && right_char.is_ascii_digit() =>
            {
                compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right))
            }
            (Some(left_char), Some(right_char)) => {
                left.next();
                right.next();
                if fold_case {
                    left_char.to_lowercase().cmp(right_char.to_lowercase())
                } else {
                    left_char.cmp(&right_char)
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digits(characters: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(digit) = characters.next_if(char::is_ascii_digit) {
        digits.push(digit);
    }
    digits
}

/// Compares two digit strings by value without parsing, so arbitrarily long
/// runs never overflow.
fn compare_digit_runs(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(options: TextOptions, direction: Direction) -> Comparator {
        Comparator::build(ValueKind::Text, direction, options, None)
    }

    #[rstest]
    #[case("a", "b", Ordering::Less)]
    #[case("B", "a", Ordering::Less)]
    #[case("file10", "file9", Ordering::Less)]
    #[case("same", "same", Ordering::Equal)]
    fn test_plain_lexicographic(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        let comparator = text(TextOptions::new(), Direction::Ascending);
        assert_eq!(
            comparator.compare(&Value::from(left), &Value::from(right)),
            expected
        );
    }

    #[rstest]
    #[case("B", "a", Ordering::Greater)]
    #[case("Apple", "apple", Ordering::Equal)]
    #[case("abc", "ABD", Ordering::Less)]
    fn test_case_insensitive(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(compare_case_insensitive(left, right), expected);
    }

    #[rstest]
    #[case("file9", "file10", Ordering::Less)]
    #[case("file2", "file02", Ordering::Equal)]
    #[case("a1b2", "a1b10", Ordering::Less)]
    #[case("x100", "x99y", Ordering::Greater)]
    #[case("10", "9a", Ordering::Greater)]
    #[case("abc", "abc1", Ordering::Less)]
    #[case("File10", "file9", Ordering::Less)]
    fn test_natural_case_sensitive(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_natural(left, right, false), expected);
    }

    #[rstest]
    #[case("File10", "file9", Ordering::Greater)]
    #[case("FILE2", "file2", Ordering::Equal)]
    #[case("img12.png", "IMG3.png", Ordering::Greater)]
    fn test_natural_case_insensitive(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_natural(left, right, true), expected);
    }

    #[rstest]
    fn test_natural_handles_digit_runs_longer_than_u64() {
        let small = "n99999999999999999999999";
        let large = "n100000000000000000000000";
        assert_eq!(compare_natural(small, large, false), Ordering::Less);
    }

    #[rstest]
    fn test_integer_default_and_descending() {
        let ascending = Comparator::build(
            ValueKind::Integer,
            Direction::Ascending,
            TextOptions::new(),
            None,
        );
        let descending = Comparator::build(
            ValueKind::Integer,
            Direction::Descending,
            TextOptions::new(),
            None,
        );
        let (two, ten) = (Value::from(2), Value::from(10));
        assert_eq!(ascending.compare(&two, &ten), Ordering::Less);
        assert_eq!(descending.compare(&two, &ten), Ordering::Greater);
        assert_eq!(descending.compare(&two, &two), Ordering::Equal);
    }

    #[rstest]
    fn test_user_comparator_replaces_text_options() {
        let by_length = Comparator::new(|left: &Value, right: &Value| {
            let length = |value: &Value| value.as_text().map_or(0, str::len);
            length(left).cmp(&length(right))
        });
        let comparator = Comparator::build(
            ValueKind::Text,
            Direction::Descending,
            TextOptions::new().natural_order(true),
            Some(&by_length),
        );
        assert_eq!(
            comparator.compare(&Value::from("a"), &Value::from("bbb")),
            Ordering::Greater
        );
        assert_eq!(
            comparator.compare(&Value::from("ab"), &Value::from("zz")),
            Ordering::Equal
        );
    }
}
