// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns a [`DrawState`] into canvas calls.
//!
//! Layers, back to front:
//!
//! 1. left and right shading
//! 2. crossover region (fill plus both edges)
//! 3. sub-domain band, clamped to the padded area, and rings around its points
//! 4. split line
//! 5. strip markers
//! 6. compare line, then best line
//! 7. every point as a filled disc
//!
//! Each call clears the canvas first and repaints everything; no state is
//! kept between calls.

use kurbo::{Circle, Line, Point, Rect, Vec2};

use crate::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::mapping::Mapping;
use crate::state::{Band, DrawState};

const RING_GAP: f64 = 3.0;
const STRIP_MARK: Vec2 = Vec2::new(10.0, 10.0);
const EDGE_WIDTH: f64 = 1.0;
const RING_WIDTH: f64 = 2.0;
const COMPARE_WIDTH: f64 = 2.0;
const BEST_WIDTH: f64 = 3.0;

/// Paints draw states over a fixed point cloud.
#[derive(Clone, Debug)]
pub struct Painter {
    points: Vec<Point>,
    pad: f64,
    radius: f64,
    palette: Palette,
}

impl Painter {
    /// Painter for the points of `mapping`, drawn as discs of `radius` pixels.
    pub fn new(mapping: &Mapping, radius: f64) -> Self {
        Self {
            points: mapping.points().iter().map(|p| p.screen).collect(),
            pad: mapping.pad(),
            radius,
            palette: Palette::default(),
        }
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Clear `canvas` and paint `state` on it.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, state: &DrawState) {
        let size = canvas.size();
        let pal = &self.palette;
        canvas.clear();

        if let Some(x) = state.left_shade {
            canvas.fill_rect(Rect::new(0.0, 0.0, x, size.height), pal.left_shade);
        }
        if let Some(x) = state.right_shade {
            canvas.fill_rect(Rect::new(x, 0.0, size.width, size.height), pal.right_shade);
        }

        if let Some(band) = state.region {
            band_with_edges(canvas, band, size.height, pal.region_fill, pal.region_edge);
        }

        if let Some(sub) = &state.subdomain {
            let band = sub.band.clamp(self.pad, size.width - self.pad);
            band_with_edges(
                canvas,
                band,
                size.height,
                pal.subdomain_fill,
                pal.subdomain_edge,
            );
            for &p in &sub.points {
                canvas.stroke_circle(
                    Circle::new(p, self.radius + RING_GAP),
                    pal.subdomain_ring,
                    RING_WIDTH,
                );
            }
        }

        if let Some(x) = state.midline {
            canvas.stroke_line(vertical(x, size.height), pal.midline, EDGE_WIDTH);
        }

        for &p in &state.strip {
            canvas.fill_rect(Rect::from_points(p - STRIP_MARK, p + STRIP_MARK), pal.strip);
        }

        if let Some(line) = state.compare {
            canvas.stroke_line(line, pal.compare, COMPARE_WIDTH);
        }
        if let Some(line) = state.best {
            canvas.stroke_line(line, pal.best, BEST_WIDTH);
        }

        for &p in &self.points {
            canvas.fill_circle(Circle::new(p, self.radius), pal.point);
        }
    }
}

fn vertical(x: f64, height: f64) -> Line {
    Line::new((x, 0.0), (x, height))
}

fn band_with_edges<C: Canvas + ?Sized>(
    canvas: &mut C,
    band: Band,
    height: f64,
    fill: Color,
    edge: Color,
) {
    canvas.fill_rect(
        Rect::new(band.left, 0.0, band.left + band.width(), height),
        fill,
    );
    canvas.stroke_line(vertical(band.left, height), edge, EDGE_WIDTH);
    canvas.stroke_line(vertical(band.right, height), edge, EDGE_WIDTH);
}
