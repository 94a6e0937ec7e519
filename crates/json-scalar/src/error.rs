//! Scalar decoder error type.

use thiserror::Error;

/// Everything that can go wrong while decoding a scalar document.
///
/// Positions are byte offsets into the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or contained only whitespace before any value.
    #[error("expected a value")]
    ExpectValue,
    /// The next token matches no literal keyword and no number grammar.
    #[error("invalid value at byte {0}")]
    InvalidValue(usize),
    /// A valid value was parsed but non-whitespace content follows it.
    #[error("trailing content after root value at byte {0}")]
    RootNotSingular(usize),
    /// A grammatically valid number whose magnitude overflows the f64 range.
    #[error("number at byte {0} is out of f64 range")]
    NumberTooBig(usize),
}
