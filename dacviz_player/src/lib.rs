// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dacviz Player: paced, cancellable replay of recorded traces.
//!
//! - [`Animator`] replays a trace step by step with a pause between steps.
//!   At most one replay runs per animator; starting another, or calling
//!   [`Animator::stop`], cancels the one in flight. The result is an
//!   [`Outcome`] that tells completion, cancellation and failure apart.
//! - A [`Presenter`] turns each event into a [`Frame`]: an optional
//!   [`DrawState`](dacviz_canvas::DrawState) and a [`LogLine`].
//!   [`PairPresenter`] handles closest-pair traces and [`KaratsubaPresenter`]
//!   handles Karatsuba traces.
//! - A [`Surface`] receives the frames. [`CanvasSurface`] paints onto a
//!   [`Canvas`](dacviz_canvas::Canvas); [`Recorder`] keeps them for
//!   inspection.
//! - [`Pace`] maps a speed slider to the per-step delay.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use dacviz_canvas::CanvasConfig;
//! use dacviz_player::{Animator, Outcome, PairPresenter, Recorder};
//! use dacviz_trace::{DataPoint, closest_pair_trace};
//!
//! let points = DataPoint::from_coords([(0.0, 0.0), (3.0, 4.0), (9.0, 9.0)]);
//! let run = closest_pair_trace(&points);
//! let mapping = CanvasConfig::default().mapping(&points);
//!
//! let animator = Animator::new();
//! let mut recorder = Recorder::default();
//! let outcome = animator.animate(
//!     &run.trace,
//!     Duration::ZERO,
//!     &mut PairPresenter::new(&mapping),
//!     &mut recorder,
//! );
//!
//! assert_eq!(outcome, Outcome::Completed { steps: run.trace.len() });
//! assert_eq!(recorder.lines[0].text, "enter n=3");
//! assert_eq!(recorder.lines.last().unwrap().text, "exit d=5.00");
//! ```

pub mod animator;
pub mod cancel;
pub mod karatsuba;
pub mod log;
pub mod pace;
pub mod pair;
pub mod regions;
pub mod surface;

pub use animator::{Animator, Frame, Outcome, Presenter, ReplayError};
pub use cancel::{CancellationSource, CancellationToken};
pub use karatsuba::KaratsubaPresenter;
pub use log::{LineStyle, LogLine, Tone};
pub use pace::Pace;
pub use pair::PairPresenter;
pub use regions::RegionStack;
pub use surface::{CanvasSurface, Recorder, Surface};
