//! [`ScalarValue`] — the tagged value produced by a successful parse.

/// Type tag of a JSON value.
///
/// Only the scalar kinds are produced by this crate. `String`, `Array` and
/// `Object` are reserved for the container decoders and have no payload
/// contract yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON scalar.
///
/// `Number` always holds a finite `f64`: literals whose magnitude overflows
/// the double range are rejected during decoding and never constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    False,
    True,
    Number(f64),
}

impl ScalarValue {
    /// Returns the type tag of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Null => ScalarKind::Null,
            ScalarValue::False => ScalarKind::False,
            ScalarValue::True => ScalarKind::True,
            ScalarValue::Number(_) => ScalarKind::Number,
        }
    }

    /// Returns the numeric payload, or `None` for a non-number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
