use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single attribute value or label.
///
/// Numbers feed ordered attributes (split by `<=`), tokens feed categorical
/// attributes (split by equality). Both kinds can also serve as class labels.
///
/// # Variants
///
/// - `Number` - A numeric value
/// - `Token` - An opaque textual value
///
/// # Ordering
///
/// `Value` has a total order: every number sorts before every token, numbers
/// compare with [`f64::total_cmp`] after folding `-0.0` into `0.0`, and tokens
/// compare lexicographically. Equality and hashing agree with that order, so
/// `Number(0.0)` and `Number(-0.0)` are the same value.
///
/// # Example
/// ```rust
/// use huntree::value::Value;
///
/// assert!(Value::from(10.0) > Value::from(9.0));
/// assert!(Value::from(1e9) < Value::from("a"));
/// assert_eq!(Value::parse("3.5"), Value::Number(3.5));
/// assert_eq!(Value::parse("red"), Value::from("red"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Token(String),
}

impl Value {
    /// Coerces raw text into a value.
    ///
    /// Text that reads as a finite number (surrounding whitespace ignored) becomes
    /// a `Number`, and so does an empty or whitespace-only cell, which reads as `0`.
    /// Anything else is kept verbatim as a `Token`.
    ///
    /// # Parameters
    ///
    /// * `text` - Raw cell text, e.g. one field of a CSV record
    ///
    /// # Returns
    ///
    /// * `Value` - The coerced value
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Value::Number(0.0);
        }
        match parse_number(text) {
            Some(number) => Value::Number(number),
            None => Value::Token(text.to_string()),
        }
    }

    /// Returns the numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Token(_) => None,
        }
    }

    /// Returns the token payload, if any.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Token(token) => Some(token),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

/// Reads non-empty `text` as a finite number, the same way [`Value::parse`] does.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(unsigned_zero)
}

// -0.0 becomes 0.0, every other number is unchanged
#[inline]
fn unsigned_zero(number: f64) -> f64 {
    number + 0.0
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => unsigned_zero(*a).total_cmp(&unsigned_zero(*b)),
            (Value::Number(_), Value::Token(_)) => Ordering::Less,
            (Value::Token(_), Value::Number(_)) => Ordering::Greater,
            (Value::Token(a), Value::Token(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Number(number) => {
                0u8.hash(state);
                unsigned_zero(*number).to_bits().hash(state);
            }
            Value::Token(token) => {
                1u8.hash(state);
                token.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Token(token) => f.write_str(token),
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(unsigned_zero(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(token: &str) -> Self {
        Value::Token(token.to_string())
    }
}

impl From<String> for Value {
    fn from(token: String) -> Self {
        Value::Token(token)
    }
}
