//! The closed two-kind value model.
//!
//! A [`SortedList`](crate::list::SortedList) stores either integers or text,
//! never both. [`Value`] is the tagged union of the two and [`ValueKind`]
//! names which one a list is locked to.

use std::fmt;

/// A single stored item: a signed integer or a text string.
///
/// With the `serde` feature, values serialize untagged, so a list of
/// integers exports as `[1, 2, 3]` and a list of text as `["a", "b"]`.
///
/// # Examples
///
/// ```rust
/// use sorted_chain::{Value, ValueKind};
///
/// let number = Value::from(42);
/// let word = Value::from("hello");
/// assert_eq!(number.kind(), ValueKind::Integer);
/// assert_eq!(word.as_text(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A signed integer.
    Integer(i64),
    /// A text string.
    Text(String),
}

/// The kind of a [`Value`], fixed per list once the first value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed integers.
    Integer,
    /// Text strings.
    Text,
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the integer, if this is [`Value::Integer`].
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Returns the text, if this is [`Value::Text`].
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "{text}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => formatter.write_str("integer"),
            Self::Text => formatter.write_str("text"),
        }
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(7), ValueKind::Integer)]
    #[case(Value::from(-3_i64), ValueKind::Integer)]
    #[case(Value::from("seven"), ValueKind::Text)]
    #[case(Value::from(String::from("x")), ValueKind::Text)]
    fn test_kind(#[case] value: Value, #[case] expected: ValueKind) {
        assert_eq!(value.kind(), expected);
    }

    #[rstest]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_integer(), Some(3));
        assert_eq!(Value::from(3).as_text(), None);
        assert_eq!(Value::from("a").as_text(), Some("a"));
        assert_eq!(Value::from("a").as_integer(), None);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Value::from(-12).to_string(), "-12");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(ValueKind::Integer.to_string(), "integer");
        assert_eq!(ValueKind::Text.to_string(), "text");
    }
}
