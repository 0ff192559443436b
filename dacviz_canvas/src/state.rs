// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a single repaint shows.
//!
//! A [`DrawState`] lists the optional overlays of one frame, all in pixel
//! coordinates. The point cloud itself is always painted and is not part of
//! the state.

use kurbo::{Line, Point};

/// Horizontal band spanning the full canvas height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band {
    /// Left edge, in pixels.
    pub left: f64,
    /// Right edge, in pixels.
    pub right: f64,
}

impl Band {
    /// Band between two x positions.
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Band narrowed to `min..max`.
    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self {
            left: self.left.max(min),
            right: self.right.min(max),
        }
    }

    /// Width, never negative.
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }
}

/// Points of the recursive call being entered, with the band they occupy.
#[derive(Clone, Debug, PartialEq)]
pub struct Subdomain {
    /// Horizontal extent of the call.
    pub band: Band,
    /// Pixel positions of the call's points.
    pub points: Vec<Point>,
}

/// Overlays for one frame. Every field is optional; [`DrawState::default`]
/// paints only the points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawState {
    /// Shade everything left of this x.
    pub left_shade: Option<f64>,
    /// Shade everything right of this x.
    pub right_shade: Option<f64>,
    /// Active merge region (top of the region stack).
    pub region: Option<Band>,
    /// Sub-domain of the call being entered.
    pub subdomain: Option<Subdomain>,
    /// Split line x.
    pub midline: Option<f64>,
    /// Strip members.
    pub strip: Vec<Point>,
    /// Pair being compared.
    pub compare: Option<Line>,
    /// Best pair known so far.
    pub best: Option<Line>,
}

impl DrawState {
    /// True when nothing but the points would be painted.
    pub fn is_bare(&self) -> bool {
        *self == Self::default()
    }
}
