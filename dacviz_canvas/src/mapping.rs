// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data space to pixel space.
//!
//! ## Fit
//!
//! The bounding box of the input is scaled uniformly so that it fits inside
//! the canvas minus `pad` on every side, then centered on the axis with slack:
//!
//! ```text
//! scale  = min((width - 2 pad) / span_x, (height - 2 pad) / span_y)
//! screen = pad + (p - min) * scale + (available - span * scale) / 2
//! ```
//!
//! A zero span (all points on one line, or a single point) counts as 1, and an
//! empty input uses the unit square, so the scale is always finite.
//!
//! The y axis is not flipped: larger data y is drawn lower on the canvas.

use std::collections::HashMap;

use dacviz_trace::{DataPoint, PointId};
use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

/// A data point together with its pixel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MappedPoint {
    /// Identity of the source point.
    pub id: PointId,
    /// Original coordinates, in data units.
    pub data: Point,
    /// Position on the canvas, in pixels.
    pub screen: Point,
}

/// Uniform, aspect-preserving map from data units to canvas pixels.
///
/// Built once per visualization from the full point set and never mutated.
#[derive(Clone, Debug)]
pub struct Mapping {
    bounds: Rect,
    span: Vec2,
    canvas: Size,
    pad: f64,
    scale: f64,
    offset: Vec2,
    mapped: Vec<MappedPoint>,
    by_id: HashMap<PointId, usize>,
}

fn nonzero_span(span: f64) -> f64 {
    if span == 0.0 || span.is_nan() { 1.0 } else { span }
}

impl Mapping {
    /// Fit `points` into a canvas of `canvas` pixels with `pad` pixels of
    /// margin on every side.
    pub fn compute(points: &[DataPoint], canvas: Size, pad: f64) -> Self {
        let mut bounds = Rect::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        for p in points {
            if p.x < bounds.x0 {
                bounds.x0 = p.x;
            }
            if p.x > bounds.x1 {
                bounds.x1 = p.x;
            }
            if p.y < bounds.y0 {
                bounds.y0 = p.y;
            }
            if p.y > bounds.y1 {
                bounds.y1 = p.y;
            }
        }
        if bounds.x0 == f64::INFINITY {
            bounds = Rect::new(0.0, 0.0, 1.0, 1.0);
        }

        let available = Vec2::new(canvas.width - 2.0 * pad, canvas.height - 2.0 * pad);
        let span = Vec2::new(
            nonzero_span(bounds.x1 - bounds.x0),
            nonzero_span(bounds.y1 - bounds.y0),
        );
        let scale = (available.x / span.x).min(available.y / span.y);
        let offset = (available - span * scale) / 2.0;

        let mut mapping = Self {
            bounds,
            span,
            canvas,
            pad,
            scale,
            offset,
            mapped: Vec::with_capacity(points.len()),
            by_id: HashMap::with_capacity(points.len()),
        };
        for p in points {
            let data = Point::new(p.x, p.y);
            let screen = mapping.to_screen(data);
            mapping.by_id.insert(p.id, mapping.mapped.len());
            mapping.mapped.push(MappedPoint {
                id: p.id,
                data,
                screen,
            });
        }
        debug!(
            points = points.len(),
            scale = mapping.scale,
            "mapping computed"
        );
        mapping
    }

    /// Pixel position of an arbitrary point given in data units.
    pub fn to_screen(&self, data: Point) -> Point {
        Point::new(
            self.pad + (data.x - self.bounds.x0) * self.scale + self.offset.x,
            self.pad + (data.y - self.bounds.y0) * self.scale + self.offset.y,
        )
    }

    /// Convert a distance in data units to pixels.
    #[inline]
    pub fn distance_to_pixels(&self, d: f64) -> f64 {
        d * self.scale
    }

    /// Mapped point with the given id.
    pub fn get(&self, id: PointId) -> Option<&MappedPoint> {
        self.by_id.get(&id).map(|&i| &self.mapped[i])
    }

    /// Both mapped points of a pair, or `None` if either id is unknown.
    pub fn pair(&self, ids: [PointId; 2]) -> Option<[&MappedPoint; 2]> {
        Some([self.get(ids[0])?, self.get(ids[1])?])
    }

    /// All mapped points, in input order.
    pub fn points(&self) -> &[MappedPoint] {
        &self.mapped
    }

    /// Bounding box of the input in data units (`x0..x1` is `min_x..max_x`).
    pub fn data_bounds(&self) -> Rect {
        self.bounds
    }

    /// Effective spans used for scaling; zero spans are replaced by 1.
    pub fn span(&self) -> Vec2 {
        self.span
    }

    /// Pixels per data unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Margin kept free on every side, in pixels.
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Horizontal pixel range available for content: `pad..width - pad`.
    pub fn inner_x(&self) -> (f64, f64) {
        (self.pad, self.canvas.width - self.pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(720.0, 420.0);

    #[test]
    fn empty_input_uses_unit_square() {
        let m = Mapping::compute(&[], CANVAS, 24.0);
        assert_eq!(m.data_bounds(), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(m.scale(), 372.0);
        assert!(m.points().is_empty());
    }

    #[test]
    fn square_data_is_centered_horizontally() {
        let pts = DataPoint::from_coords([(0.0, 0.0), (10.0, 10.0)]);
        let m = Mapping::compute(&pts, CANVAS, 24.0);
        // Height limits the fit: 372 px for 10 units.
        assert_eq!(m.scale(), 37.2);
        let a = m.get(PointId(0)).unwrap().screen;
        let b = m.get(PointId(1)).unwrap().screen;
        assert!((a.y - 24.0).abs() < 1e-9);
        assert!((b.y - 396.0).abs() < 1e-9);
        assert!(((a.x + b.x) / 2.0 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_lands_in_padded_area() {
        let pts = DataPoint::from_coords([(5.0, -3.0)]);
        let m = Mapping::compute(&pts, CANVAS, 24.0);
        let p = m.points()[0];
        assert_eq!(p.data, Point::new(5.0, -3.0));
        assert!(p.screen.x >= 24.0 && p.screen.x <= 696.0);
        assert!(p.screen.y >= 24.0 && p.screen.y <= 396.0);
    }

    #[test]
    fn distances_scale_with_the_fit() {
        let pts = DataPoint::from_coords([(0.0, 0.0), (3.0, 4.0)]);
        let m = Mapping::compute(&pts, CANVAS, 24.0);
        let [a, b] = m.pair([PointId(0), PointId(1)]).unwrap();
        let pixel = a.screen.distance(b.screen);
        assert!((pixel - m.distance_to_pixels(5.0)).abs() < 1e-9);
    }

    #[test]
    fn to_screen_agrees_with_mapped_points() {
        let pts = DataPoint::from_coords([(1.0, 2.0), (-4.0, 9.0), (7.5, 0.5)]);
        let m = Mapping::compute(&pts, CANVAS, 24.0);
        for p in m.points() {
            assert_eq!(m.to_screen(p.data), p.screen);
        }
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let pts = DataPoint::from_coords([(1.0, 2.0)]);
        let m = Mapping::compute(&pts, CANVAS, 24.0);
        assert!(m.get(PointId(7)).is_none());
        assert!(m.pair([PointId(0), PointId(7)]).is_none());
    }
}
