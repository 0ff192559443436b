// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Karatsuba multiplication over decimal-digit strings, recorded as a trace.
//!
//! ## Recursion
//!
//! Operands are stripped of leading zeros. When either has a single digit the
//! product is computed directly. Otherwise both are left-padded with zeros to
//! `n = max(len)` digits and split at `m = n / 2` into `high` (first `n - m`
//! digits) and `low` (last `m` digits). Three sub-products follow, in order:
//!
//! - `z0 = low_x * low_y`
//! - `z1 = (low_x + high_x) * (low_y + high_y)`
//! - `z2 = high_x * high_y`
//!
//! and combine as `z2 * 10^(2m) + (z1 - z2 - z0) * 10^m + z0`.
//! All arithmetic is exact ([`BigUint`]).
//!
//! ## Narration
//!
//! Every call except the `z1` branch announces itself, the top-level one included,
//! with a [`KaratsubaEvent::Call`] carrying its stripped operands. The `z1`
//! branch is announced by its caller instead, with the un-summed halves, so it
//! is never narrated twice. Counting `call` events per branch is therefore
//! asymmetric.

use core::fmt;

use num_bigint::BigUint;
use thiserror::Error;
use tracing::debug;

use crate::types::TraceEvent;

/// Failure to start a multiplication.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KaratsubaError {
    /// An operand was empty or contained a non-digit character.
    #[error("operand {operand:?} is not a non-negative decimal integer")]
    InvalidOperand {
        /// The rejected operand.
        operand: String,
    },
}

/// Which recursive product a call computes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    /// `low_x * low_y`.
    Z0,
    /// `(low_x + high_x) * (low_y + high_y)`.
    Z1,
    /// `high_x * high_y`.
    Z2,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Z0 => "z0",
            Self::Z1 => "z1",
            Self::Z2 => "z2",
        })
    }
}

/// Operand as it appears in a call line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Plain decimal digits.
    Digits(String),
    /// A sum of the two halves of a split operand, not yet added.
    Sum {
        /// Most significant half.
        high: String,
        /// Least significant half.
        low: String,
    },
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits(d) => f.write_str(d),
            Self::Sum { high, low } => write!(f, "{high} + {low}"),
        }
    }
}

/// Kind-specific payload of a Karatsuba trace event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KaratsubaEvent {
    /// A recursive multiplication is about to run.
    Call {
        /// Left operand.
        x: Operand,
        /// Right operand.
        y: Operand,
    },
    /// A single-digit operand was multiplied directly.
    Base {
        /// Left operand.
        x: String,
        /// Right operand.
        y: String,
        /// Exact product.
        product: BigUint,
        /// The branch this leaf computes; `None` for the top-level call.
        branch: Option<Branch>,
    },
    /// Both operands were split into high and low halves.
    Split {
        /// High half of `x`.
        high_x: String,
        /// Low half of `x`.
        low_x: String,
        /// High half of `y`.
        high_y: String,
        /// Low half of `y`.
        low_y: String,
        /// Number of digits in each low half.
        m: usize,
    },
    /// The three sub-products were combined.
    Combine {
        /// `low_x * low_y`.
        z0: BigUint,
        /// `(low_x + high_x) * (low_y + high_y)`.
        z1: BigUint,
        /// `high_x * high_y`.
        z2: BigUint,
        /// Split position.
        m: usize,
        /// `z2 * 10^(2m) + (z1 - z2 - z0) * 10^m + z0`.
        result: BigUint,
    },
}

impl KaratsubaEvent {
    /// Short kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Call { .. } => "call",
            Self::Base { .. } => "base",
            Self::Split { .. } => "split",
            Self::Combine { .. } => "combine",
        }
    }
}

impl fmt::Display for KaratsubaEvent {
    /// Narrative line for the event, without indentation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call { x, y } => write!(f, "karatsuba({x}, {y})"),
            Self::Base {
                x,
                y,
                product,
                branch,
            } => {
                write!(f, "base -> {x} * {y} = {product}")?;
                if let Some(branch) = branch {
                    write!(f, " -> {branch}")?;
                }
                Ok(())
            }
            Self::Split {
                high_x,
                low_x,
                high_y,
                low_y,
                m,
            } => write!(f, "split x={high_x}|{low_x} y={high_y}|{low_y} (m={m})"),
            Self::Combine {
                z0,
                z1,
                z2,
                m,
                result,
            } => write!(
                f,
                "combine -> {z2} * 10^{} + ({z1} - {z2} - {z0}) * 10^{m} + {z0} = {result}",
                2 * m
            ),
        }
    }
}

/// Result of a traced multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Exact product.
    pub value: BigUint,
    /// Every step in the order it was taken.
    pub trace: Vec<TraceEvent<KaratsubaEvent>>,
}

/// Multiply two non-negative decimal integers, recording a trace.
///
/// ```
/// use dacviz_trace::karatsuba;
///
/// let run = karatsuba("1234", "5678").unwrap();
/// assert_eq!(run.value.to_string(), "7006652");
/// ```
pub fn karatsuba(x: &str, y: &str) -> Result<Product, KaratsubaError> {
    let mut trace = Vec::new();
    let value = karatsuba_into(x, y, &mut trace)?;
    Ok(Product { value, trace })
}

/// Like [`karatsuba`], appending events to an existing trace.
pub fn karatsuba_into(
    x: &str,
    y: &str,
    trace: &mut Vec<TraceEvent<KaratsubaEvent>>,
) -> Result<BigUint, KaratsubaError> {
    validate(x)?;
    validate(y)?;
    let start = trace.len();
    let value = recurse(x, y, 0, None, trace);
    debug!(
        x_digits = x.len(),
        y_digits = y.len(),
        events = trace.len() - start,
        "karatsuba traced"
    );
    Ok(value)
}

fn validate(operand: &str) -> Result<(), KaratsubaError> {
    if operand.is_empty() || !operand.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KaratsubaError::InvalidOperand {
            operand: operand.to_owned(),
        });
    }
    Ok(())
}

fn strip_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Value of a validated digit string.
fn value_of(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

fn pow10(exp: usize) -> BigUint {
    // Exponents are digit counts of in-memory strings.
    BigUint::from(10_u32).pow(u32::try_from(exp).unwrap_or(u32::MAX))
}

fn recurse(
    x: &str,
    y: &str,
    depth: usize,
    branch: Option<Branch>,
    trace: &mut Vec<TraceEvent<KaratsubaEvent>>,
) -> BigUint {
    let x = strip_zeros(x);
    let y = strip_zeros(y);

    // The caller announces the z1 sum itself.
    if branch != Some(Branch::Z1) {
        trace.push(TraceEvent::new(
            depth,
            KaratsubaEvent::Call {
                x: Operand::Digits(x.to_owned()),
                y: Operand::Digits(y.to_owned()),
            },
        ));
    }

    if x.len() == 1 || y.len() == 1 {
        let product = value_of(x) * value_of(y);
        trace.push(TraceEvent::new(
            depth,
            KaratsubaEvent::Base {
                x: x.to_owned(),
                y: y.to_owned(),
                product: product.clone(),
                branch,
            },
        ));
        return product;
    }

    let n = x.len().max(y.len());
    let m = n / 2;
    let padded_x = format!("{x:0>n$}");
    let padded_y = format!("{y:0>n$}");
    let (high_x, low_x) = padded_x.split_at(n - m);
    let (high_y, low_y) = padded_y.split_at(n - m);

    trace.push(TraceEvent::new(
        depth,
        KaratsubaEvent::Split {
            high_x: high_x.to_owned(),
            low_x: low_x.to_owned(),
            high_y: high_y.to_owned(),
            low_y: low_y.to_owned(),
            m,
        },
    ));

    let z0 = recurse(low_x, low_y, depth + 1, Some(Branch::Z0), trace);

    trace.push(TraceEvent::new(
        depth + 1,
        KaratsubaEvent::Call {
            x: Operand::Sum {
                high: high_x.to_owned(),
                low: low_x.to_owned(),
            },
            y: Operand::Sum {
                high: high_y.to_owned(),
                low: low_y.to_owned(),
            },
        },
    ));
    let sum_x = (value_of(low_x) + value_of(high_x)).to_string();
    let sum_y = (value_of(low_y) + value_of(high_y)).to_string();
    let z1 = recurse(&sum_x, &sum_y, depth + 1, Some(Branch::Z1), trace);

    let z2 = recurse(high_x, high_y, depth + 1, Some(Branch::Z2), trace);

    // z1 >= z0 + z2 since every digit is non-negative.
    let middle = &z1 - &z2 - &z0;
    let result = &z2 * pow10(2 * m) + middle * pow10(m) + &z0;

    trace.push(TraceEvent::new(
        depth,
        KaratsubaEvent::Combine {
            z0,
            z1,
            z2,
            m,
            result: result.clone(),
        },
    ));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(p: &Product) -> Vec<(usize, &'static str)> {
        p.trace.iter().map(|e| (e.depth, e.kind.name())).collect()
    }

    #[test]
    fn single_digits_are_one_call_and_one_base() {
        let p = karatsuba("7", "8").unwrap();
        assert_eq!(p.value, BigUint::from(56_u32));
        assert_eq!(names(&p), vec![(0, "call"), (0, "base")]);
        assert_eq!(p.trace[0].kind.to_string(), "karatsuba(7, 8)");
        assert_eq!(p.trace[1].kind.to_string(), "base -> 7 * 8 = 56");
    }

    #[test]
    fn leading_zeros_are_stripped() {
        let p = karatsuba("0007", "000").unwrap();
        assert_eq!(p.value, BigUint::from(0_u32));
        assert_eq!(p.trace[0].kind.to_string(), "karatsuba(7, 0)");
        assert_eq!(p.trace[1].kind.to_string(), "base -> 7 * 0 = 0");
    }

    #[test]
    fn textbook_example() {
        let p = karatsuba("1234", "5678").unwrap();
        assert_eq!(p.value.to_string(), "7006652");
        assert_eq!(p.trace[0].depth, 0);
        assert_eq!(p.trace[0].kind.to_string(), "karatsuba(1234, 5678)");

        let splits: Vec<_> = p.trace.iter().filter(|e| e.kind.name() == "split").collect();
        assert_eq!(splits.iter().filter(|e| e.depth == 0).count(), 1);
        assert_eq!(
            splits[0].kind.to_string(),
            "split x=12|34 y=56|78 (m=2)"
        );

        // Three descents from the top-level call, announced at depth 1.
        let first_level_calls: Vec<_> = p
            .trace
            .iter()
            .filter(|e| e.depth == 1 && e.kind.name() == "call")
            .map(|e| e.kind.to_string())
            .collect();
        assert_eq!(
            first_level_calls,
            vec![
                "karatsuba(34, 78)",
                "karatsuba(12 + 34, 56 + 78)",
                "karatsuba(12, 56)",
            ]
        );

        let Some(last) = p.trace.last() else {
            panic!("empty trace");
        };
        assert_eq!(last.depth, 0);
        assert_eq!(
            last.kind.to_string(),
            "combine -> 672 * 10^4 + (6164 - 672 - 2652) * 10^2 + 2652 = 7006652"
        );
    }

    #[test]
    fn z1_branch_is_not_announced_twice() {
        let p = karatsuba("12", "34").unwrap();
        assert_eq!(
            names(&p),
            vec![
                (0, "call"),
                (0, "split"),
                (1, "call"),
                (1, "base"),
                (1, "call"),
                (1, "base"),
                (1, "call"),
                (1, "base"),
                (0, "combine"),
            ]
        );
        let text: Vec<_> = p.trace.iter().map(|e| e.kind.to_string()).collect();
        assert_eq!(text[0], "karatsuba(12, 34)");
        assert_eq!(text[2], "karatsuba(2, 4)");
        assert_eq!(text[3], "base -> 2 * 4 = 8 -> z0");
        assert_eq!(text[4], "karatsuba(1 + 2, 3 + 4)");
        assert_eq!(text[5], "base -> 3 * 7 = 21 -> z1");
        assert_eq!(text[7], "base -> 1 * 3 = 3 -> z2");
        assert_eq!(p.value, BigUint::from(408_u32));
    }

    #[test]
    fn unequal_lengths_are_padded() {
        let p = karatsuba("12", "34567").unwrap();
        assert_eq!(p.value, BigUint::from(12_u32 * 34567));
        assert!(matches!(
            &p.trace[1].kind,
            KaratsubaEvent::Split { high_x, low_x, m: 2, .. } if high_x == "000" && low_x == "12"
        ));
    }

    #[test]
    fn products_are_eq() {
        fn is_eq<T: Eq>(_: &T) {}
        let p = karatsuba("12", "34").unwrap();
        is_eq(&p);
        is_eq(&p.trace[0]);
        assert_eq!(p, karatsuba("0012", "34").unwrap());
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            karatsuba("12a", "3"),
            Err(KaratsubaError::InvalidOperand {
                operand: "12a".into()
            })
        );
        assert!(karatsuba("", "3").is_err());
        assert!(karatsuba("-4", "3").is_err());
    }

    #[test]
    fn appends_to_shared_trace() {
        let mut trace = Vec::new();
        let a = karatsuba_into("9", "9", &mut trace).unwrap();
        let b = karatsuba_into("10", "10", &mut trace).unwrap();
        assert_eq!(a, BigUint::from(81_u32));
        assert_eq!(b, BigUint::from(100_u32));
        let names: Vec<_> = trace.iter().take(4).map(|e| e.kind.name()).collect();
        assert_eq!(names, vec!["call", "base", "call", "split"]);
    }
}
