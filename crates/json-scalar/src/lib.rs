//! Recursive-descent parser for JSON scalar documents.
//!
//! Parses a text buffer holding a single JSON scalar (`null`, `true`,
//! `false`, or a number) into a [`ScalarValue`]. The number grammar is
//! validated byte by byte before any float conversion runs, so malformed
//! input gets a precise diagnosis and the conversion itself can only fail
//! by range.
//!
//! # Example
//!
//! ```
//! use json_scalar::{parse, ParseError, ScalarKind, ScalarValue};
//!
//! let value = parse("  -0.5  ").unwrap();
//! assert_eq!(value, ScalarValue::Number(-0.5));
//! assert_eq!(value.kind(), ScalarKind::Number);
//!
//! assert_eq!(parse(""), Err(ParseError::ExpectValue));
//! ```

pub mod decoder;
pub mod error;
pub mod value;

pub use decoder::{parse, ScalarDecoder};
pub use error::ParseError;
pub use value::{ScalarKind, ScalarValue};
