// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Divide-and-conquer closest pair of points, recorded as a trace.
//!
//! ## Recursion
//!
//! The input is sorted once by x (`px`) and once by y (`py`). Each call:
//!
//! - emits [`PairEvent::Enter`];
//! - with at most three points, compares every pair `i < j` in `px` order;
//! - otherwise splits `px` at `n / 2`, partitions `py` by the split x
//!   (`x <= mid_x` goes left, y order preserved), recurses on both halves and
//!   scans the strip of points closer than the current best to the split line;
//! - emits [`PairEvent::Exit`] with its result.
//!
//! The left result wins ties between the halves.
//!
//! ## Monotonicity
//!
//! Within one call, successive [`PairEvent::Best`] distances strictly
//! decrease. Each base case starts from `+inf`, so `best` events from
//! different calls are not ordered relative to each other.

use tracing::debug;

use crate::types::{BestPair, DataPoint, TraceEvent};

/// Kind-specific payload of a closest-pair trace event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairEvent {
    /// A recursive call begins on the given x-sorted and y-sorted slices.
    Enter {
        /// Points of this call, sorted by x.
        px: Vec<DataPoint>,
        /// The same points, sorted by y.
        py: Vec<DataPoint>,
    },
    /// Two points are about to be compared.
    Compare {
        /// First point.
        a: DataPoint,
        /// Second point.
        b: DataPoint,
    },
    /// A strictly closer pair was found.
    Best {
        /// The new best pair.
        best: BestPair,
    },
    /// The merge step of a recursive call begins.
    MergeStart {
        /// x coordinate of the split line, in data units.
        mid_x: f64,
        /// Best of the two halves.
        best: BestPair,
    },
    /// The strip around the split line, in y order.
    Strip {
        /// Points within `best.d` of the split line.
        strip: Vec<DataPoint>,
    },
    /// The merge step finished.
    MergeEnd {
        /// Best pair after scanning the strip.
        best: BestPair,
    },
    /// A recursive call returns.
    Exit {
        /// Result of the call.
        best: BestPair,
    },
}

impl PairEvent {
    /// Short kind name, as shown in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enter { .. } => "enter",
            Self::Compare { .. } => "compare",
            Self::Best { .. } => "best",
            Self::MergeStart { .. } => "merge-start",
            Self::Strip { .. } => "strip",
            Self::MergeEnd { .. } => "merge-end",
            Self::Exit { .. } => "exit",
        }
    }
}

/// Trace and result of a closest-pair run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestPair {
    /// Every decision in the order it was taken.
    pub trace: Vec<TraceEvent<PairEvent>>,
    /// Closest pair overall, or [`BestPair::NONE`] for fewer than two points.
    pub best: BestPair,
}

/// Run the closest-pair algorithm over `points`, recording a trace.
///
/// Fewer than two points yield [`BestPair::NONE`] and an empty trace.
///
/// ```
/// use dacviz_trace::{DataPoint, PointId, closest_pair_trace};
///
/// let pts = DataPoint::from_coords([(0.0, 0.0), (5.0, 5.0), (0.0, 1.0)]);
/// let run = closest_pair_trace(&pts);
/// assert_eq!(run.best.d, 1.0);
/// assert_eq!(run.best.pair, Some([PointId(0), PointId(2)]));
/// ```
pub fn closest_pair_trace(points: &[DataPoint]) -> ClosestPair {
    let mut trace = Vec::new();
    if points.len() < 2 {
        return ClosestPair {
            trace,
            best: BestPair::NONE,
        };
    }

    let mut px = points.to_vec();
    px.sort_by(|a, b| a.x.total_cmp(&b.x));
    let mut py = points.to_vec();
    py.sort_by(|a, b| a.y.total_cmp(&b.y));

    let best = recurse(&px, &py, 0, &mut trace);
    debug!(
        points = points.len(),
        events = trace.len(),
        d = best.d,
        "closest pair traced"
    );
    ClosestPair { trace, best }
}

fn recurse(
    px: &[DataPoint],
    py: &[DataPoint],
    depth: usize,
    trace: &mut Vec<TraceEvent<PairEvent>>,
) -> BestPair {
    trace.push(TraceEvent::new(
        depth,
        PairEvent::Enter {
            px: px.to_vec(),
            py: py.to_vec(),
        },
    ));

    let n = px.len();
    if n <= 3 {
        let mut best = BestPair::NONE;
        for (i, a) in px.iter().enumerate() {
            for b in &px[i + 1..] {
                consider(a, b, &mut best, depth, trace);
            }
        }
        trace.push(TraceEvent::new(depth, PairEvent::Exit { best }));
        return best;
    }

    let mid = n / 2;
    let mid_x = px[mid].x;
    let (lx, rx) = px.split_at(mid);
    let (ly, ry): (Vec<DataPoint>, Vec<DataPoint>) = py.iter().partition(|p| p.x <= mid_x);

    let left = recurse(lx, &ly, depth + 1, trace);
    let right = recurse(rx, &ry, depth + 1, trace);
    let mut best = if right.d < left.d { right } else { left };

    trace.push(TraceEvent::new(depth, PairEvent::MergeStart { mid_x, best }));

    let strip: Vec<DataPoint> = py
        .iter()
        .copied()
        .filter(|p| (p.x - mid_x).abs() < best.d)
        .collect();
    trace.push(TraceEvent::new(
        depth,
        PairEvent::Strip {
            strip: strip.clone(),
        },
    ));

    for (i, a) in strip.iter().enumerate() {
        // The bound tightens as `best` improves.
        for b in &strip[i + 1..] {
            if b.y - a.y >= best.d {
                break;
            }
            consider(a, b, &mut best, depth, trace);
        }
    }

    trace.push(TraceEvent::new(depth, PairEvent::MergeEnd { best }));
    trace.push(TraceEvent::new(depth, PairEvent::Exit { best }));
    best
}

fn consider(
    a: &DataPoint,
    b: &DataPoint,
    best: &mut BestPair,
    depth: usize,
    trace: &mut Vec<TraceEvent<PairEvent>>,
) {
    trace.push(TraceEvent::new(depth, PairEvent::Compare { a: *a, b: *b }));
    let candidate = BestPair::of(a, b);
    if candidate.d < best.d {
        *best = candidate;
        trace.push(TraceEvent::new(depth, PairEvent::Best { best: candidate }));
    }
}
