// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data model: input points, trace events, and the best-pair result.

use core::fmt;

/// Stable identity of an input point.
///
/// Assigned once at ingestion (the point's index in input order) and used to
/// cross-reference a point between data space and pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in data space. Immutable after creation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    /// Horizontal coordinate in data units.
    pub x: f64,
    /// Vertical coordinate in data units.
    pub y: f64,
    /// Stable identity.
    pub id: PointId,
}

impl DataPoint {
    /// Create a point with the given coordinates and id.
    pub const fn new(x: f64, y: f64, id: u32) -> Self {
        Self {
            x,
            y,
            id: PointId(id),
        }
    }

    /// Assign ids in input order to a list of raw coordinates.
    pub fn from_coords<I>(coords: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        coords
            .into_iter()
            .zip(0_u32..)
            .map(|((x, y), id)| Self::new(x, y, id))
            .collect()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One recorded algorithm decision.
///
/// `kind` is engine specific; `depth` is the recursion depth at which the
/// decision was taken (0 for the top-level call).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent<K> {
    /// Recursion depth.
    pub depth: usize,
    /// Kind-specific payload.
    pub kind: K,
}

impl<K> TraceEvent<K> {
    /// Create an event at `depth`.
    pub const fn new(depth: usize, kind: K) -> Self {
        Self { depth, kind }
    }
}

/// Best pair found so far, with its distance in data units.
///
/// `pair` is `None` only while no pair has been compared yet, in which case
/// `d` is `+inf`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestPair {
    /// Euclidean distance between the two points.
    pub d: f64,
    /// Ids of the two points.
    pub pair: Option<[PointId; 2]>,
}

impl BestPair {
    /// The "no pair possible" sentinel.
    pub const NONE: Self = Self {
        d: f64::INFINITY,
        pair: None,
    };

    /// Best pair made of `a` and `b`.
    pub fn of(a: &DataPoint, b: &DataPoint) -> Self {
        Self {
            d: a.distance(b),
            pair: Some([a.id, b.id]),
        }
    }
}

impl Default for BestPair {
    fn default() -> Self {
        Self::NONE
    }
}
