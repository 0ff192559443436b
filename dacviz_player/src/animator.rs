// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paced, single-flight replay of a trace.
//!
//! ## Usage
//!
//! 1) Build a [`Presenter`] for the trace kind; it turns each event into a
//!    [`Frame`] (an optional repaint plus one log line).
//! 2) Call [`Animator::animate`] with the trace, a per-step delay and a
//!    [`Surface`] that receives the frames.
//! 3) Match on the returned [`Outcome`]. [`Outcome::Cancelled`] is the normal
//!    result of [`Animator::stop`] or of a newer replay taking over, not a
//!    failure.
//!
//! ## Semantics
//!
//! - One replay per animator at a time: starting a replay cancels the one in
//!   flight.
//! - Cancellation is checked before every step, and the pause between steps
//!   wakes up as soon as cancellation is requested.
//! - Each step repaints first, then appends its log line. There is no pause
//!   after the last step.
//! - The presenter is reset at the start of each replay, so replaying the same
//!   trace produces the same frames.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use dacviz_canvas::DrawState;
use dacviz_trace::{PointId, TraceEvent};
use thiserror::Error;
use tracing::{debug, debug_span, info, trace, warn};

use crate::cancel::{CancellationSource, CancellationToken};
use crate::log::LogLine;
use crate::surface::Surface;

/// A replay step that cannot be presented.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// An event names a point the mapping does not know.
    #[error("trace refers to unknown point {id}")]
    UnknownPoint {
        /// The unresolved id.
        id: PointId,
    },
}

/// What one event shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Repaint, if the event changes the picture.
    pub draw: Option<DrawState>,
    /// Log line to append.
    pub line: LogLine,
}

/// Turns the events of one trace kind into frames.
///
/// Presenters may keep state across the events of a replay (open regions,
/// best pair so far); [`reset`](Self::reset) discards it.
pub trait Presenter {
    /// Event kind this presenter understands.
    type Event;

    /// Forget everything learned from previous events.
    fn reset(&mut self);

    /// Frame for `event`.
    fn present(&mut self, event: &TraceEvent<Self::Event>) -> Result<Frame, ReplayError>;
}

/// How a replay ended. `steps` counts the frames delivered to the surface.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every event was replayed.
    Completed {
        /// Frames delivered.
        steps: usize,
    },
    /// Stopped early on request.
    Cancelled {
        /// Frames delivered before stopping.
        steps: usize,
    },
    /// An event could not be presented.
    Failed {
        /// Frames delivered before the failing event.
        steps: usize,
        /// Why the event could not be presented.
        error: ReplayError,
    },
}

impl Outcome {
    /// Frames delivered to the surface.
    pub fn steps(&self) -> usize {
        match self {
            Self::Completed { steps } | Self::Cancelled { steps } | Self::Failed { steps, .. } => {
                *steps
            }
        }
    }

    /// Whether the whole trace was replayed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Whether the replay was stopped on request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Replays traces one at a time.
///
/// `Animator` is `Sync`: one thread may replay while another calls
/// [`stop`](Self::stop) or starts a replay that takes over.
#[derive(Debug, Default)]
pub struct Animator {
    current: Mutex<Option<CancellationSource>>,
}

impl Animator {
    /// Idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `trace` onto `surface`, pausing `delay` between steps.
    ///
    /// Blocks until the trace is done, the replay is cancelled, or an event
    /// fails to present. Any replay already running on this animator is
    /// cancelled first.
    pub fn animate<P, S>(
        &self,
        trace: &[TraceEvent<P::Event>],
        delay: Duration,
        presenter: &mut P,
        surface: &mut S,
    ) -> Outcome
    where
        P: Presenter + ?Sized,
        S: Surface + ?Sized,
    {
        let token = self.begin();
        let _span = debug_span!("replay", events = trace.len(), ?delay).entered();
        debug!("replay started");
        presenter.reset();

        let outcome = run(trace, delay, presenter, surface, &token);
        match &outcome {
            Outcome::Completed { steps } => debug!(steps, "replay completed"),
            Outcome::Cancelled { steps } => info!(steps, "replay cancelled"),
            Outcome::Failed { steps, error } => warn!(steps, %error, "replay failed"),
        }

        self.finish(&token);
        outcome
    }

    /// Cancel the replay in flight, if any. Returns whether one was running.
    pub fn stop(&self) -> bool {
        match self.slot().take() {
            Some(source) => {
                source.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether a replay is in flight.
    pub fn is_running(&self) -> bool {
        self.slot().is_some()
    }

    fn slot(&self) -> MutexGuard<'_, Option<CancellationSource>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn begin(&self) -> CancellationToken {
        let source = CancellationSource::new();
        let token = source.token();
        if let Some(previous) = self.slot().replace(source) {
            debug!("cancelling previous replay");
            previous.cancel();
        }
        token
    }

    fn finish(&self, token: &CancellationToken) {
        let mut slot = self.slot();
        // A newer replay may have taken the slot already.
        if slot.as_ref().is_some_and(|s| s.issued(token)) {
            *slot = None;
        }
    }
}

fn run<P, S>(
    trace: &[TraceEvent<P::Event>],
    delay: Duration,
    presenter: &mut P,
    surface: &mut S,
    token: &CancellationToken,
) -> Outcome
where
    P: Presenter + ?Sized,
    S: Surface + ?Sized,
{
    let mut steps = 0;
    for (i, event) in trace.iter().enumerate() {
        if token.is_cancelled() {
            return Outcome::Cancelled { steps };
        }
        let frame = match presenter.present(event) {
            Ok(frame) => frame,
            Err(error) => return Outcome::Failed { steps, error },
        };
        trace!(step = i, depth = event.depth, text = %frame.line.text, "step");
        if let Some(state) = &frame.draw {
            surface.draw(state);
        }
        surface.log(frame.line);
        steps += 1;

        if i + 1 < trace.len() && token.wait_timeout(delay) {
            return Outcome::Cancelled { steps };
        }
    }
    Outcome::Completed { steps }
}
