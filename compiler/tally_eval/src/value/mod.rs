//! Runtime values for the Tally engine.
//!
//! The variant set is closed: `Number`, `Str`, `Array`. Every value is
//! immutable; operations that "change" a value build a new one.
//!
//! Heap payloads go through [`Heap`], whose constructor is private to this
//! module, so the factory methods below are the only way to build them:
//!
//! ```text
//! let n = Value::number(5.0);
//! let s = Value::string("hello");
//! let a = Value::array(vec![n, s]);
//! ```
//!
//! `PartialEq` on `Value` is structural and exists for tests and hosts.
//! Language equality is [`Value::is_equal_to`], which coerces.

mod heap;
mod number;

use std::fmt;

pub use heap::Heap;
pub use number::{format_number, parse_numeric_prefix};

/// Text of the language's boolean `true`.
pub const TRUE_TEXT: &str = "True";
/// Text of the language's boolean `false`.
pub const FALSE_TEXT: &str = "False";

/// Runtime value.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// IEEE 754 double.
    Number(f64),
    /// Text.
    Str(Heap<String>),
    /// Ordered sequence. Never coerces, never takes part in arithmetic.
    Array(Heap<Vec<Value>>),
}

/// Discriminant of a [`Value`], for callers that only need the kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Number,
    String,
    Array,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory methods

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// The language's boolean: the string `"True"` or `"False"`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::string(if b { TRUE_TEXT } else { FALSE_TEXT })
    }
}

// Inspection

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(_) | Value::Array(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            Value::Number(_) | Value::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            Value::Number(_) | Value::Str(_) => None,
        }
    }

    /// Truthiness as the language defines it.
    ///
    /// Numbers are never truthy, zero or not. A string is truthy when it
    /// spells `true` in any ASCII case. Arrays are never truthy.
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Number(_) | Value::Array(_) => false,
            Value::Str(s) => s.eq_ignore_ascii_case(TRUE_TEXT),
        }
    }

    /// The text a program sees when it prints this value.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Best-effort numeric coercion. Total: never fails.
    ///
    /// A string with a numeric prefix becomes a `Number`; anything else is
    /// returned unchanged, so callers detect failure by the kind of the
    /// result.
    #[must_use]
    pub fn try_convert_to_number(&self) -> Value {
        match self {
            Value::Number(_) | Value::Array(_) => self.clone(),
            Value::Str(s) => match parse_numeric_prefix(s) {
                Some(n) => Value::Number(n),
                None => self.clone(),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", format_number(*n)),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Array(items) => f.debug_tuple("Array").field(&items.as_slice()).finish(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}
