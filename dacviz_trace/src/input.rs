// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test-case files.
//!
//! Both formats are line oriented. Lines are trimmed and blank lines skipped;
//! the first remaining line is the number of test cases.
//!
//! Point files follow each count with a point count `n` and `n` lines of
//! `x y`:
//!
//! ```text
//! 2
//! 3
//! 0 0
//! 1 1
//! 5 2
//! 2
//! 0 0
//! 4 4
//! ```
//!
//! Multiplication files hold one `a b` pair per line.

use thiserror::Error;

use crate::types::DataPoint;

/// Failure to read a test-case file. Line numbers are 1-based and refer to
/// the original text, blank lines included.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The file holds no non-blank line.
    #[error("input is empty")]
    Empty,
    /// A count was expected but something else was found.
    #[error("line {line}: expected a count, found {found:?}")]
    BadCount {
        /// Line number.
        line: usize,
        /// Offending text.
        found: String,
    },
    /// A line did not hold the expected number of fields.
    #[error("line {line}: expected {expected} fields, found {found:?}")]
    BadFields {
        /// Line number.
        line: usize,
        /// Number of whitespace-separated fields expected.
        expected: usize,
        /// Offending text.
        found: String,
    },
    /// A coordinate did not parse as a number.
    #[error("line {line}: {found:?} is not a number")]
    BadNumber {
        /// Line number.
        line: usize,
        /// Offending text.
        found: String,
    },
    /// The file ended before all announced data was read.
    #[error("expected {expected} more line(s) after the end of input")]
    Truncated {
        /// Number of missing lines.
        expected: usize,
    },
}

/// A pair of decimal operands to multiply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multiplication {
    /// Left operand.
    pub a: String,
    /// Right operand.
    pub b: String,
}

struct Lines<'a> {
    rest: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Result<Self, InputError> {
        let rest: Vec<_> = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        if rest.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self { rest, pos: 0 })
    }

    fn next_line(&mut self, remaining: usize) -> Result<(usize, &'a str), InputError> {
        let line = self
            .rest
            .get(self.pos)
            .copied()
            .ok_or(InputError::Truncated { expected: remaining })?;
        self.pos += 1;
        Ok(line)
    }

    /// Capacity for `count` items of at least one line each; counts come from
    /// the file and may exceed what it holds.
    fn capacity_for(&self, count: usize) -> usize {
        count.min(self.rest.len() - self.pos)
    }

    fn count(&mut self, remaining: usize) -> Result<usize, InputError> {
        let (line, text) = self.next_line(remaining)?;
        text.parse().map_err(|_| InputError::BadCount {
            line,
            found: text.to_owned(),
        })
    }
}

fn fields<'a>(line: usize, text: &'a str, expected: usize) -> Result<Vec<&'a str>, InputError> {
    let parts: Vec<_> = text.split_whitespace().collect();
    if parts.len() != expected {
        return Err(InputError::BadFields {
            line,
            expected,
            found: text.to_owned(),
        });
    }
    Ok(parts)
}

fn number(line: usize, text: &str) -> Result<f64, InputError> {
    text.parse().map_err(|_| InputError::BadNumber {
        line,
        found: text.to_owned(),
    })
}

/// Parse a point file into one point set per test case.
///
/// Ids are assigned per case in input order, starting at 0.
pub fn parse_point_cases(text: &str) -> Result<Vec<Vec<DataPoint>>, InputError> {
    let mut lines = Lines::new(text)?;
    let cases = lines.count(1)?;
    let mut out = Vec::with_capacity(lines.capacity_for(cases));
    for case in 0..cases {
        let n = lines.count(cases - case)?;
        let mut coords = Vec::with_capacity(lines.capacity_for(n));
        for k in 0..n {
            let (line, text) = lines.next_line(n - k)?;
            let parts = fields(line, text, 2)?;
            coords.push((number(line, parts[0])?, number(line, parts[1])?));
        }
        out.push(DataPoint::from_coords(coords));
    }
    Ok(out)
}

/// Parse a multiplication file into operand pairs.
///
/// Operands are kept as text; digit validation happens when multiplying.
pub fn parse_multiplication_cases(text: &str) -> Result<Vec<Multiplication>, InputError> {
    let mut lines = Lines::new(text)?;
    let cases = lines.count(1)?;
    (0..cases)
        .map(|case| {
            let (line, text) = lines.next_line(cases - case)?;
            let parts = fields(line, text, 2)?;
            Ok(Multiplication {
                a: parts[0].to_owned(),
                b: parts[1].to_owned(),
            })
        })
        .collect()
}
