// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where replay frames go.

use dacviz_canvas::{Canvas, DrawState, Painter};

use crate::log::LogLine;

/// Receives the frames of a replay: repaints and log lines, in order.
pub trait Surface {
    /// Repaint the canvas with `state`.
    fn draw(&mut self, state: &DrawState);

    /// Append `line` to the log.
    fn log(&mut self, line: LogLine);
}

/// Keeps every frame it receives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Draw states, in order.
    pub frames: Vec<DrawState>,
    /// Log lines, in order.
    pub lines: Vec<LogLine>,
}

impl Surface for Recorder {
    fn draw(&mut self, state: &DrawState) {
        self.frames.push(state.clone());
    }

    fn log(&mut self, line: LogLine) {
        self.lines.push(line);
    }
}

/// Paints frames onto a [`Canvas`] and keeps the log.
#[derive(Debug)]
pub struct CanvasSurface<'p, C> {
    painter: &'p Painter,
    canvas: C,
    lines: Vec<LogLine>,
}

impl<'p, C: Canvas> CanvasSurface<'p, C> {
    /// Surface painting onto `canvas` with `painter`.
    ///
    /// The canvas is painted once with no overlays so the points show before
    /// the first frame.
    pub fn new(painter: &'p Painter, mut canvas: C) -> Self {
        painter.paint(&mut canvas, &DrawState::default());
        Self {
            painter,
            canvas,
            lines: Vec::new(),
        }
    }

    /// The canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Log lines so far.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Empty the log, as hosts do before a new replay.
    pub fn clear_log(&mut self) {
        self.lines.clear();
    }

    /// Take back the canvas and the log.
    pub fn into_parts(self) -> (C, Vec<LogLine>) {
        (self.canvas, self.lines)
    }
}

impl<C: Canvas> Surface for CanvasSurface<'_, C> {
    fn draw(&mut self, state: &DrawState) {
        self.painter.paint(&mut self.canvas, state);
    }

    fn log(&mut self, line: LogLine) {
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dacviz_canvas::{CanvasConfig, DisplayList, PaintOp};
    use dacviz_trace::DataPoint;

    #[test]
    fn canvas_surface_paints_points_up_front() {
        let config = CanvasConfig::default();
        let points = DataPoint::from_coords([(0.0, 0.0), (2.0, 1.0)]);
        let mapping = config.mapping(&points);
        let painter = config.painter(&mapping);
        let mut surface = CanvasSurface::new(&painter, DisplayList::new(config.size));
        assert_eq!(surface.canvas().frames(), 1);

        surface.draw(&DrawState {
            midline: Some(300.0),
            ..Default::default()
        });
        surface.log(LogLine::new(0, "merge start (midx=1)"));
        assert_eq!(surface.canvas().frames(), 2);
        assert!(matches!(surface.canvas().ops()[1], PaintOp::StrokeLine(..)));

        let (canvas, lines) = surface.into_parts();
        assert_eq!(canvas.ops().len(), 1 + 1 + 2);
        assert_eq!(lines.len(), 1);
    }
}
