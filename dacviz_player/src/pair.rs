// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames for closest-pair traces.
//!
//! | event         | log line                  | repaint                                             |
//! |---------------|---------------------------|-----------------------------------------------------|
//! | `enter`       | `enter n={n}`             | sub-domain band around the call's points            |
//! | `compare`     | `compare {a} - {b}`       | compare line, current region                        |
//! | `best`        | `best updated d={d:.2}`   | new best line, current region                       |
//! | `merge-start` | `merge start (midx={x})`  | split line, new region of `best.d` each side, best so far |
//! | `strip`       | `strip size={n}`          | strip markers, best so far, current region          |
//! | `merge-end`   | `merge end d={d:.2}`      | merge result line, current region; region closed    |
//! | `exit`        | `exit d={d:.2}`           | none                                                |

use dacviz_canvas::{Band, DrawState, MappedPoint, Mapping, Subdomain};
use dacviz_trace::{BestPair, DataPoint, PairEvent, PointId, TraceEvent};
use kurbo::{Line, Point};

use crate::animator::{Frame, Presenter, ReplayError};
use crate::log::LogLine;
use crate::regions::RegionStack;

/// Horizontal margin around a sub-domain's outermost points, in pixels.
const SUBDOMAIN_MARGIN: f64 = 8.0;

/// Presents [`PairEvent`]s over a fixed [`Mapping`].
#[derive(Clone, Debug)]
pub struct PairPresenter<'m> {
    mapping: &'m Mapping,
    regions: RegionStack,
    best_so_far: Option<BestPair>,
}

impl<'m> PairPresenter<'m> {
    /// Presenter resolving points through `mapping`.
    pub fn new(mapping: &'m Mapping) -> Self {
        Self {
            mapping,
            regions: RegionStack::new(),
            best_so_far: None,
        }
    }

    /// Open merge regions.
    pub fn regions(&self) -> &RegionStack {
        &self.regions
    }

    /// Last pair announced by a `best` event.
    pub fn best_so_far(&self) -> Option<BestPair> {
        self.best_so_far
    }

    fn point(&self, id: PointId) -> Result<&'m MappedPoint, ReplayError> {
        self.mapping.get(id).ok_or(ReplayError::UnknownPoint { id })
    }

    fn screen_points(&self, points: &[DataPoint]) -> Result<Vec<Point>, ReplayError> {
        points
            .iter()
            .map(|p| self.point(p.id).map(|m| m.screen))
            .collect()
    }

    fn pair_line(&self, best: Option<&BestPair>) -> Result<Option<Line>, ReplayError> {
        let Some([a, b]) = best.and_then(|b| b.pair) else {
            return Ok(None);
        };
        Ok(Some(Line::new(self.point(a)?.screen, self.point(b)?.screen)))
    }

    fn inner_band(&self, left: f64, right: f64) -> Band {
        let (min, max) = self.mapping.inner_x();
        Band::new(left, right).clamp(min, max)
    }

    fn enter(&self, px: &[DataPoint]) -> Result<DrawState, ReplayError> {
        let points = self.screen_points(px)?;
        if points.is_empty() {
            return Ok(DrawState::default());
        }
        let (lo, hi) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.x), hi.max(p.x))
            });
        Ok(DrawState {
            subdomain: Some(Subdomain {
                band: self.inner_band(lo - SUBDOMAIN_MARGIN, hi + SUBDOMAIN_MARGIN),
                points,
            }),
            ..Default::default()
        })
    }

    fn merge_start(&mut self, mid_x: f64, best: &BestPair) -> Result<DrawState, ReplayError> {
        let bounds = self.mapping.data_bounds();
        let mid = self.mapping.to_screen(Point::new(mid_x, bounds.y0)).x;
        let d = if best.d.is_finite() {
            best.d
        } else {
            self.best_so_far.map_or(0.0, |b| b.d)
        };
        let half = self.mapping.distance_to_pixels(d);
        self.regions.push(self.inner_band(mid - half, mid + half));
        Ok(DrawState {
            midline: Some(mid),
            region: self.regions.current(),
            best: self.pair_line(self.best_so_far.as_ref())?,
            ..Default::default()
        })
    }
}

impl Presenter for PairPresenter<'_> {
    type Event = PairEvent;

    fn reset(&mut self) {
        self.regions.clear();
        self.best_so_far = None;
    }

    fn present(&mut self, event: &TraceEvent<PairEvent>) -> Result<Frame, ReplayError> {
        let region = self.regions.current();
        let (draw, text) = match &event.kind {
            PairEvent::Enter { px, .. } => (Some(self.enter(px)?), format!("enter n={}", px.len())),
            PairEvent::Compare { a, b } => {
                let line = Line::new(self.point(a.id)?.screen, self.point(b.id)?.screen);
                let state = DrawState {
                    compare: Some(line),
                    region,
                    ..Default::default()
                };
                (Some(state), format!("compare {} - {}", a.id, b.id))
            }
            PairEvent::Best { best } => {
                self.best_so_far = Some(*best);
                let state = DrawState {
                    best: self.pair_line(Some(best))?,
                    region,
                    ..Default::default()
                };
                (Some(state), format!("best updated d={:.2}", best.d))
            }
            PairEvent::MergeStart { mid_x, best } => (
                Some(self.merge_start(*mid_x, best)?),
                format!("merge start (midx={mid_x})"),
            ),
            PairEvent::Strip { strip } => {
                let state = DrawState {
                    strip: self.screen_points(strip)?,
                    best: self.pair_line(self.best_so_far.as_ref())?,
                    region,
                    ..Default::default()
                };
                (Some(state), format!("strip size={}", strip.len()))
            }
            PairEvent::MergeEnd { best } => {
                let state = DrawState {
                    best: self.pair_line(Some(best))?,
                    region,
                    ..Default::default()
                };
                self.regions.pop();
                (Some(state), format!("merge end d={:.2}", best.d))
            }
            PairEvent::Exit { best } => (None, format!("exit d={:.2}", best.d)),
        };
        Ok(Frame {
            draw,
            line: LogLine::new(event.depth, text),
        })
    }
}
