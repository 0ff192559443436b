// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and the default palette.

use core::fmt;

/// Straight-alpha RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with opacity.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    /// CSS `rgba(..)` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Colors used by [`Painter`](crate::Painter), one per layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Shading left of [`DrawState::left_shade`](crate::DrawState::left_shade).
    pub left_shade: Color,
    /// Shading right of [`DrawState::right_shade`](crate::DrawState::right_shade).
    pub right_shade: Color,
    /// Crossover region fill.
    pub region_fill: Color,
    /// Crossover region edges.
    pub region_edge: Color,
    /// Sub-domain fill.
    pub subdomain_fill: Color,
    /// Sub-domain edges.
    pub subdomain_edge: Color,
    /// Rings around sub-domain points.
    pub subdomain_ring: Color,
    /// Split line.
    pub midline: Color,
    /// Strip markers.
    pub strip: Color,
    /// Line between the two points being compared.
    pub compare: Color,
    /// Line between the best pair.
    pub best: Color,
    /// Point markers.
    pub point: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            left_shade: Color::rgba(80, 120, 255, 0.04),
            right_shade: Color::rgba(255, 120, 120, 0.03),
            region_fill: Color::rgba(255, 127, 80, 0.12),
            region_edge: Color::rgba(255, 127, 80, 0.28),
            subdomain_fill: Color::rgba(80, 200, 120, 0.06),
            subdomain_edge: Color::rgba(80, 180, 120, 0.18),
            subdomain_ring: Color::rgba(30, 120, 60, 0.9),
            midline: Color::rgba(100, 200, 255, 0.9),
            strip: Color::rgba(255, 200, 0, 0.06),
            // lightcoral
            compare: Color::rgb(240, 128, 128),
            best: Color::rgb(0xcc, 0x33, 0x33),
            point: Color::rgb(0xcd, 0xb4, 0xff),
        }
    }
}
