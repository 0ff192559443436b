// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traces survive export and import with the `serde` feature.

#![cfg(feature = "serde")]

use dacviz_trace::{ClosestPair, DataPoint, KaratsubaEvent, Product, closest_pair_trace, karatsuba};

#[test]
fn closest_pair_round_trips() {
    let pts = DataPoint::from_coords([
        (0.5, 0.0),
        (1.25, 10.0),
        (4.9, 5.0),
        (5.1, 5.0),
        (9.0, -0.75),
        (10.0, 10.0),
    ]);
    let run = closest_pair_trace(&pts);
    let json = serde_json::to_string(&run).unwrap();
    let back: ClosestPair = serde_json::from_str(&json).unwrap();
    assert_eq!(back, run);
    assert_eq!(back.best.pair, run.best.pair);
}

#[test]
fn product_round_trips() {
    let product = karatsuba("31415926", "27182818").unwrap();
    let json = serde_json::to_string(&product).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, product);
    assert_eq!(back.value.to_string(), "853973398759468");
    assert!(matches!(back.trace[0].kind, KaratsubaEvent::Call { .. }));
}
