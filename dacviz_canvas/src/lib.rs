// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dacviz Canvas: pixel geometry and painting for trace replays.
//!
//! - [`Mapping`] fits a point set into a padded canvas with a uniform,
//!   aspect-preserving scale, and resolves points by [`PointId`](dacviz_trace::PointId).
//! - [`DrawState`] describes the overlays of one frame (regions, split line,
//!   strip, compare and best lines) in pixel coordinates.
//! - [`Painter`] clears a [`Canvas`] and paints a [`DrawState`] over the point
//!   cloud, back to front.
//! - [`DisplayList`] is a [`Canvas`] that records [`PaintOp`]s; hosts without
//!   a raster surface and tests inspect frames through it.
//!
//! Geometry uses [`kurbo`] types throughout.
//!
//! # Example
//!
//! ```rust
//! use dacviz_canvas::{CanvasConfig, DisplayList, DrawState, PaintOp};
//! use dacviz_trace::{DataPoint, PointId};
//! use kurbo::Line;
//!
//! let points = DataPoint::from_coords([(0.0, 0.0), (4.0, 3.0), (8.0, 1.0)]);
//! let config = CanvasConfig::default();
//! let mapping = config.mapping(&points);
//! let painter = config.painter(&mapping);
//!
//! let [a, b] = mapping.pair([PointId(0), PointId(1)]).unwrap();
//! let state = DrawState {
//!     best: Some(Line::new(a.screen, b.screen)),
//!     ..Default::default()
//! };
//!
//! let mut canvas = DisplayList::new(config.size);
//! painter.paint(&mut canvas, &state);
//! assert_eq!(canvas.ops()[0], PaintOp::Clear);
//! assert_eq!(canvas.ops().len(), 1 + 1 + points.len());
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod mapping;
pub mod painter;
pub mod state;

pub use canvas::{Canvas, DisplayList, PaintOp};
pub use color::{Color, Palette};
pub use config::CanvasConfig;
pub use mapping::{MappedPoint, Mapping};
pub use painter::Painter;
pub use state::{Band, DrawState, Subdomain};
