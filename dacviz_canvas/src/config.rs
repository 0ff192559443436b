// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas geometry settings.

use dacviz_trace::DataPoint;
use kurbo::Size;

use crate::mapping::Mapping;
use crate::painter::Painter;

/// Canvas size, margin and marker size for one visualization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Canvas size in pixels.
    pub size: Size,
    /// Margin kept free on every side, in pixels.
    pub pad: f64,
    /// Point marker radius, in pixels.
    pub point_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: Size::new(720.0, 420.0),
            pad: 24.0,
            point_radius: 6.0,
        }
    }
}

impl CanvasConfig {
    /// Fit `points` into this canvas.
    pub fn mapping(&self, points: &[DataPoint]) -> Mapping {
        Mapping::compute(points, self.size, self.pad)
    }

    /// Painter for the points of `mapping` using this marker size.
    pub fn painter(&self, mapping: &Mapping) -> Painter {
        Painter::new(mapping, self.point_radius)
    }
}
