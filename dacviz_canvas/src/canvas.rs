// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint surface and a recording implementation.

use kurbo::{Circle, Line, Rect, Size};

use crate::color::Color;

/// Minimal immediate-mode 2D surface.
///
/// Mirrors the handful of calls a browser 2D context or a native vector
/// renderer offers; implement it over whatever the host draws with.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> Size;
    /// Erase everything.
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke a line segment.
    fn stroke_line(&mut self, line: Line, color: Color, width: f64);
    /// Fill a disc.
    fn fill_circle(&mut self, circle: Circle, color: Color);
    /// Stroke a circle outline.
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64);
}

/// One recorded paint call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// [`Canvas::clear`].
    Clear,
    /// [`Canvas::fill_rect`].
    FillRect(Rect, Color),
    /// [`Canvas::stroke_line`].
    StrokeLine(Line, Color, f64),
    /// [`Canvas::fill_circle`].
    FillCircle(Circle, Color),
    /// [`Canvas::stroke_circle`].
    StrokeCircle(Circle, Color, f64),
}

/// A canvas that records paint calls instead of rasterizing them.
///
/// Clearing drops the previous frame, so [`DisplayList::ops`] always holds
/// the most recent repaint, starting with [`PaintOp::Clear`].
#[derive(Clone, Debug)]
pub struct DisplayList {
    size: Size,
    ops: Vec<PaintOp>,
    frames: usize,
}

impl DisplayList {
    /// Empty display list for a surface of `size` pixels.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            frames: 0,
        }
    }

    /// Paint calls of the current frame.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Number of times the surface was cleared.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(PaintOp::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect(rect, color));
    }

    fn stroke_line(&mut self, line: Line, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeLine(line, color, width));
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(PaintOp::FillCircle(circle, color));
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokeCircle(circle, color, width));
    }
}
