// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dacviz Trace: divide-and-conquer algorithms that record what they do.
//!
//! Each engine runs synchronously to completion and returns its result
//! together with a trace: the ordered list of decisions it took, detailed
//! enough to replay the run visually without running it again.
//!
//! - [`closest_pair_trace`]: nearest pair of 2D points by recursive halving
//!   on x with a strip scan at each merge.
//! - [`karatsuba`]: exact multiplication of decimal-digit strings by
//!   recursive high/low splitting.
//!
//! Events are [`TraceEvent`]s: a recursion depth plus an engine-specific
//! kind ([`PairEvent`] or [`KaratsubaEvent`]). Order is meaningful; it is the
//! exact order in which decisions were taken.
//!
//! Points carry a stable [`PointId`] assigned at ingestion, so consumers can
//! cross-reference a point after the engine has reordered its copies.
//!
//! # Example
//!
//! ```rust
//! use dacviz_trace::{DataPoint, PairEvent, closest_pair_trace, karatsuba};
//!
//! let pts = DataPoint::from_coords([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (100.0, 100.0)]);
//! let run = closest_pair_trace(&pts);
//! assert!((run.best.d - 2.0_f64.sqrt()).abs() < 1e-12);
//! assert!(matches!(run.trace[0].kind, PairEvent::Enter { .. }));
//!
//! let product = karatsuba("31415926", "27182818").unwrap();
//! assert_eq!(product.value.to_string(), "853973398759468");
//! ```
//!
//! Test-case files in the line-oriented formats of [`input`] can be read
//! with [`parse_point_cases`] and [`parse_multiplication_cases`].
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for points and trace events.

pub mod closest_pair;
pub mod input;
pub mod karatsuba;
pub mod types;

pub use closest_pair::{ClosestPair, PairEvent, closest_pair_trace};
pub use input::{InputError, Multiplication, parse_multiplication_cases, parse_point_cases};
pub use karatsuba::{
    Branch, KaratsubaError, KaratsubaEvent, Operand, Product, karatsuba, karatsuba_into,
};
pub use num_bigint::BigUint;
pub use types::{BestPair, DataPoint, PointId, TraceEvent};
