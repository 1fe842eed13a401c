pub mod segments;
pub mod subdivision;

pub use segments::SegmentSet;

use std::io::BufRead;

use crate::error::ParseError;

/// Line-oriented record reader over a text stream.
///
/// Records are non-blank lines split on ASCII whitespace. The reader
/// tracks the 1-based line number so parse failures can name the
/// offending record.
pub(crate) struct Records<R> {
    input: R,
    line: usize,
}

impl<R: BufRead> Records<R> {
    pub(crate) fn new(input: R) -> Self {
        Self { input, line: 0 }
    }

    /// Reads the next non-blank line and splits it into fields.
    ///
    /// `expected` names the record being read, for the end-of-input
    /// diagnostic.
    pub(crate) fn next_record(
        &mut self,
        expected: &'static str,
    ) -> Result<Vec<String>, ParseError> {
        loop {
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Err(ParseError::UnexpectedEof {
                    line: self.line + 1,
                    expected,
                });
            }
            self.line += 1;
            let fields: Vec<String> = buf.split_whitespace().map(str::to_owned).collect();
            if !fields.is_empty() {
                return Ok(fields);
            }
        }
    }

    /// 1-based number of the last line read.
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}

/// Parses a floating-point field.
pub(crate) fn float_field(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

/// Parses a plain (possibly negative) integer field.
pub(crate) fn int_field(token: &str, line: usize) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

/// Parses an unsigned count field.
pub(crate) fn count_field(token: &str, line: usize) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

/// Parses an id written in float syntax, requiring an integral value.
///
/// The data format historically allows ids like `3.0` in float-typed
/// columns; anything with a fractional part is rejected.
pub(crate) fn id_field(token: &str, line: usize) -> Result<i64, ParseError> {
    let value = float_field(token, line)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ParseError::NonIntegralId {
            line,
            token: token.to_owned(),
        });
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(value as i64)
}
