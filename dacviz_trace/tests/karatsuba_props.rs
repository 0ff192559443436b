// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the Karatsuba trace.
//!
//! 1. The product matches a direct big-integer multiply.
//! 2. Every leaf emits one `base`, every inner call one `split` and one
//!    `combine`, at the depth of the call.
//! 3. Every call is announced exactly once, the top-level one included.

use dacviz_trace::{BigUint, KaratsubaEvent, karatsuba};
use proptest::prelude::*;

fn reference(a: &str, b: &str) -> BigUint {
    let a = BigUint::parse_bytes(a.as_bytes(), 10).unwrap_or_default();
    let b = BigUint::parse_bytes(b.as_bytes(), 10).unwrap_or_default();
    a * b
}

proptest! {
    #[test]
    fn small_operands(a in "[0-9]", b in "[0-9]{1,3}") {
        let p = karatsuba(&a, &b).unwrap();
        prop_assert_eq!(p.value, reference(&a, &b));
    }

    #[test]
    fn large_operands(a in "[0-9]{8,40}", b in "[0-9]{8,40}") {
        let p = karatsuba(&a, &b).unwrap();
        prop_assert_eq!(p.value, reference(&a, &b));
    }

    #[test]
    fn unequal_lengths(a in "[1-9][0-9]{0,4}", b in "[1-9][0-9]{10,30}") {
        prop_assert_eq!(karatsuba(&a, &b).unwrap().value, reference(&a, &b));
        prop_assert_eq!(karatsuba(&b, &a).unwrap().value, reference(&a, &b));
    }

    #[test]
    fn trace_structure_follows_recursion(a in "[0-9]{1,24}", b in "[0-9]{1,24}") {
        let p = karatsuba(&a, &b).unwrap();
        let mut open: Vec<usize> = Vec::new();
        let (mut bases, mut combines, mut calls) = (0, 0, 0);
        for ev in &p.trace {
            let expected_child_depth = open.last().map_or(0, |d| d + 1);
            match &ev.kind {
                KaratsubaEvent::Call { .. } => {
                    calls += 1;
                    prop_assert_eq!(ev.depth, expected_child_depth);
                }
                KaratsubaEvent::Base { .. } => {
                    bases += 1;
                    prop_assert_eq!(ev.depth, expected_child_depth);
                }
                KaratsubaEvent::Split { .. } => {
                    prop_assert_eq!(ev.depth, expected_child_depth);
                    open.push(ev.depth);
                }
                KaratsubaEvent::Combine { result, .. } => {
                    combines += 1;
                    let depth = open.pop().ok_or_else(|| TestCaseError::fail("combine without split"))?;
                    prop_assert_eq!(ev.depth, depth);
                    if open.is_empty() {
                        prop_assert_eq!(result, &p.value);
                    }
                }
            }
        }
        prop_assert!(open.is_empty());
        prop_assert!(bases >= 1);
        prop_assert_eq!(calls, bases + combines);
        prop_assert!(matches!(p.trace[0].kind, KaratsubaEvent::Call { .. }), "first event must be Call");
    }
}
