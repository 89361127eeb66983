//! Equality and ordering between values.
//!
//! Each comparison is defined by its left-hand variant and coerces the
//! right-hand operand once. Nothing here is symmetric by construction:
//! `a.is_equal_to(b)` and `b.is_equal_to(a)` are separate rules, and no total
//! order exists across kinds.
//!
//! | left \ coerced right | Number | String | Array |
//! |---|---|---|---|
//! | Number `=` | `==` | left rendered vs text | false |
//! | Number `<` `>` | f64 order | false | false |
//! | Array (any) | false | false | false |
//!
//! A string on the left that itself coerces behaves as that number. A
//! string that does not coerce compares by text against other strings and
//! is unordered against numbers and arrays.

use std::cmp::Ordering;

use crate::value::{format_number, Value};

impl Value {
    /// Language equality (`=`).
    pub fn is_equal_to(&self, other: &Value) -> bool {
        match self {
            Value::Number(n) => number_equals(*n, other),
            Value::Str(text) => match self.try_convert_to_number() {
                Value::Number(n) => number_equals(n, other),
                Value::Str(_) | Value::Array(_) => match other.try_convert_to_number() {
                    Value::Str(other_text) => text.as_str() == other_text.as_str(),
                    Value::Number(m) => text.as_str() == format_number(m),
                    Value::Array(_) => false,
                },
            },
            Value::Array(_) => false,
        }
    }

    /// Language `<`.
    pub fn is_less_than(&self, other: &Value) -> bool {
        self.is_ordered(other, Ordering::Less)
    }

    /// Language `>`.
    pub fn is_greater_than(&self, other: &Value) -> bool {
        self.is_ordered(other, Ordering::Greater)
    }

    fn is_ordered(&self, other: &Value, wanted: Ordering) -> bool {
        match self {
            Value::Number(n) => number_ordered(*n, other, wanted),
            Value::Str(text) => match self.try_convert_to_number() {
                Value::Number(n) => number_ordered(n, other, wanted),
                Value::Str(_) | Value::Array(_) => match other.try_convert_to_number() {
                    Value::Str(other_text) => text.as_str().cmp(other_text.as_str()) == wanted,
                    Value::Number(_) | Value::Array(_) => false,
                },
            },
            Value::Array(_) => false,
        }
    }
}

/// Number on the left of `=`.
fn number_equals(n: f64, other: &Value) -> bool {
    match other.try_convert_to_number() {
        // Fallback for text with no numeric prefix.
        Value::Str(text) => format_number(n) == *text,
        Value::Number(m) => n == m,
        Value::Array(_) => false,
    }
}

/// Number on the left of `<` / `>`.
fn number_ordered(n: f64, other: &Value, wanted: Ordering) -> bool {
    match other.try_convert_to_number() {
        // NaN compares as unordered.
        Value::Number(m) => n.partial_cmp(&m) == Some(wanted),
        Value::Str(_) | Value::Array(_) => false,
    }
}
