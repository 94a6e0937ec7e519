//! `ScalarDecoder` — byte-cursor decoder for JSON scalar documents.

use crate::error::ParseError;
use crate::value::ScalarValue;

/// Parses a text holding exactly one JSON scalar surrounded by optional
/// whitespace.
pub fn parse(text: &str) -> Result<ScalarValue, ParseError> {
    ScalarDecoder::new(text.as_bytes()).decode()
}

/// Cursor over the input buffer.
///
/// Borrows the input for the duration of one parse call. `x` only moves
/// forward and every advance is checked against the buffer length; there is
/// no terminator byte with special meaning.
pub struct ScalarDecoder<'a> {
    pub data: &'a [u8],
    pub x: usize,
}

impl<'a> ScalarDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Runs the whole document protocol: leading whitespace, one value,
    /// trailing whitespace, end of input.
    pub fn decode(mut self) -> Result<ScalarValue, ParseError> {
        self.skip_whitespace();
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(ParseError::RootNotSingular(self.x));
        }
        Ok(value)
    }

    /// Dispatches on the next byte without consuming it.
    ///
    /// Anything that is not a literal keyword starter or end of input goes
    /// to the number scanner, which rejects bytes that cannot start a
    /// number.
    pub fn read_any(&mut self) -> Result<ScalarValue, ParseError> {
        if self.x >= self.data.len() {
            return Err(ParseError::ExpectValue);
        }
        match self.data[self.x] {
            b't' => self.read_true(),
            b'f' => self.read_false(),
            b'n' => self.read_null(),
            _ => self.read_number(),
        }
    }

    /// Skips the JSON whitespace bytes (space, tab, newline, carriage
    /// return). Any other byte, including other Unicode whitespace, stops
    /// the run.
    pub fn skip_whitespace(&mut self) {
        while self.x < self.data.len() {
            match self.data[self.x] {
                b' ' | b'\t' | b'\n' | b'\r' => self.x += 1,
                _ => break,
            }
        }
    }

    pub fn read_null(&mut self) -> Result<ScalarValue, ParseError> {
        self.read_literal(b"null", ScalarValue::Null)
    }

    pub fn read_true(&mut self) -> Result<ScalarValue, ParseError> {
        self.read_literal(b"true", ScalarValue::True)
    }

    pub fn read_false(&mut self) -> Result<ScalarValue, ParseError> {
        self.read_literal(b"false", ScalarValue::False)
    }

    /// Matches one keyword at the cursor. The caller has already checked
    /// that the first byte equals the keyword's first byte.
    ///
    /// The keyword must end at a token boundary: `truex` is one malformed
    /// token, not `true` followed by a second root value.
    fn read_literal(
        &mut self,
        keyword: &'static [u8],
        value: ScalarValue,
    ) -> Result<ScalarValue, ParseError> {
        let end = self.x + keyword.len();
        if end > self.data.len() || &self.data[self.x..end] != keyword {
            return Err(ParseError::InvalidValue(self.x));
        }
        if end < self.data.len() && self.data[end].is_ascii_alphanumeric() {
            return Err(ParseError::InvalidValue(end));
        }
        self.x = end;
        Ok(value)
    }

    /// Validates the JSON number grammar over the raw bytes, then converts
    /// the consumed span with the standard `f64` parser.
    ///
    /// Grammar: optional `-`, mandatory integer part (a lone `0`, or `1`-`9`
    /// followed by digits), optional `.` plus digits, optional `e`/`E` plus
    /// optional sign plus digits. A leading `+` is invalid. No backtracking:
    /// each part is checked by one byte of lookahead.
    pub fn read_number(&mut self) -> Result<ScalarValue, ParseError> {
        let data = self.data;
        let len = data.len();
        let start = self.x;
        let mut x = self.x;

        if x < len && data[x] == b'-' {
            x += 1;
        }

        if x < len && data[x] == b'0' {
            x += 1;
            // A digit directly after the zero (`0123`) is not a number.
            if x < len && data[x].is_ascii_digit() {
                return Err(ParseError::InvalidValue(x));
            }
        } else if x < len && data[x] >= b'1' && data[x] <= b'9' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        } else {
            return Err(ParseError::InvalidValue(x));
        }

        if x < len && data[x] == b'.' {
            x += 1;
            // At least one digit after the decimal point.
            if x >= len || !data[x].is_ascii_digit() {
                return Err(ParseError::InvalidValue(x));
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }

        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            // At least one digit after the exponent marker and sign.
            if x >= len || !data[x].is_ascii_digit() {
                return Err(ParseError::InvalidValue(x));
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }

        // The span is pre-validated, so the conversion can only fail by
        // range, which `f64` reports as infinity.
        let span =
            std::str::from_utf8(&data[start..x]).map_err(|_| ParseError::InvalidValue(start))?;
        let n: f64 = span.parse().map_err(|_| ParseError::InvalidValue(start))?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig(start));
        }
        self.x = x;
        Ok(ScalarValue::Number(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder(input: &str) -> ScalarDecoder<'_> {
        ScalarDecoder::new(input.as_bytes())
    }

    #[test]
    fn skip_whitespace_is_idempotent() {
        let mut d = decoder(" \t\n\r  null");
        d.skip_whitespace();
        let after_first = d.x;
        d.skip_whitespace();
        d.skip_whitespace();
        assert_eq!(d.x, after_first);
        assert_eq!(d.data[d.x], b'n');
    }

    #[test]
    fn skip_whitespace_stops_at_end_of_input() {
        let mut d = decoder("   ");
        d.skip_whitespace();
        assert_eq!(d.x, 3);
        d.skip_whitespace();
        assert_eq!(d.x, 3);
    }

    #[test]
    fn read_literal_consumes_exact_keyword() {
        let mut d = decoder("false");
        assert_eq!(d.read_false().unwrap(), ScalarValue::False);
        assert_eq!(d.x, 5);
    }

    #[test]
    fn read_literal_rejects_truncated_keyword() {
        let mut d = decoder("nul");
        assert_eq!(d.read_null(), Err(ParseError::InvalidValue(0)));
    }

    #[test]
    fn read_literal_rejects_glued_token_characters() {
        let mut d = decoder("truex");
        assert_eq!(d.read_true(), Err(ParseError::InvalidValue(4)));
        let mut d = decoder("nullo");
        assert_eq!(d.read_null(), Err(ParseError::InvalidValue(4)));
        let mut d = decoder("false9");
        assert_eq!(d.read_false(), Err(ParseError::InvalidValue(5)));
    }

    #[test]
    fn read_number_accepts_the_grammar() {
        for (input, expected) in [
            ("0", 0.0),
            ("-0", -0.0),
            ("1", 1.0),
            ("-1", -1.0),
            ("1.5", 1.5),
            ("-0.5", -0.5),
            ("3.1416", 3.1416),
            ("1E10", 1e10),
            ("1e10", 1e10),
            ("1e+10", 1e10),
            ("1e-10", 1e-10),
            ("-1E10", -1e10),
            ("-1e-10", -1e-10),
            ("1.234E+10", 1.234e10),
            ("1.234E-10", 1.234e-10),
        ] {
            let mut d = decoder(input);
            assert_eq!(
                d.read_number().unwrap(),
                ScalarValue::Number(expected),
                "input {input:?}"
            );
            assert_eq!(d.x, input.len(), "input {input:?} not fully consumed");
        }
    }

    #[test]
    fn read_number_rejects_malformed_grammar() {
        for input in [
            "+0", "+1", ".123", "1.", "-", "-.5", "1e", "1e+", "1e-", "1E.", "INF", "inf", "NAN",
            "nan", "0123", "00",
        ] {
            let mut d = decoder(input);
            assert!(
                matches!(d.read_number(), Err(ParseError::InvalidValue(_))),
                "input {input:?} should be invalid"
            );
        }
    }

    #[test]
    fn read_number_stops_at_first_byte_outside_the_grammar() {
        // The scanner only claims the valid prefix; what follows is the
        // document layer's problem.
        let mut d = decoder("1.5e2]");
        assert_eq!(d.read_number().unwrap(), ScalarValue::Number(150.0));
        assert_eq!(d.x, 5);
    }

    #[test]
    fn read_number_rejects_overflow_without_moving_the_cursor() {
        let mut d = decoder("1e400");
        assert_eq!(d.read_number(), Err(ParseError::NumberTooBig(0)));
        assert_eq!(d.x, 0);
        let mut d = decoder("-1e400");
        assert_eq!(d.read_number(), Err(ParseError::NumberTooBig(0)));
    }

    #[test]
    fn read_any_fails_with_expect_value_at_end_of_input() {
        let mut d = decoder("");
        assert_eq!(d.read_any(), Err(ParseError::ExpectValue));
    }

    #[test]
    fn read_any_routes_unknown_starters_to_the_number_scanner() {
        for input in ["?", "[1]", "\"str\"", "{}"] {
            let mut d = decoder(input);
            assert_eq!(
                d.read_any(),
                Err(ParseError::InvalidValue(0)),
                "input {input:?}"
            );
        }
    }
}
