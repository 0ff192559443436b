// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest pair replay.
//!
//! Trace the closest pair of each test case and replay it in the terminal:
//! every step prints its log line and a one-line summary of the repaint.
//!
//! Run:
//! - `cargo run -p dacviz_demos --example closest_pair_replay`
//! - `cargo run -p dacviz_demos --example closest_pair_replay -- points.txt 0.9`
//!
//! The optional second argument is the speed slider in `0..=1`.
//! Set `RUST_LOG=dacviz_player=debug` to see replay spans.

use std::error::Error;

use dacviz_canvas::{CanvasConfig, DisplayList, DrawState, PaintOp, Painter};
use dacviz_player::{Animator, LogLine, Outcome, Pace, PairPresenter, Surface};
use dacviz_trace::{DataPoint, closest_pair_trace, parse_point_cases};
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = "\
2
4
0 0
1 1
2 2
100 100
7
3 9
12 4
5 5
8 15
14 14
6 1
11 8
";

/// Paints into a display list and prints what each repaint contains.
struct Terminal<'p> {
    painter: &'p Painter,
    canvas: DisplayList,
}

impl Surface for Terminal<'_> {
    fn draw(&mut self, state: &DrawState) {
        self.painter.paint(&mut self.canvas, state);
        let ops = self.canvas.ops();
        let rects = ops.iter().filter(|op| matches!(op, PaintOp::FillRect(..))).count();
        let lines = ops.iter().filter(|op| matches!(op, PaintOp::StrokeLine(..))).count();
        println!(
            "    [frame {:>3}: {} ops, {rects} rects, {lines} lines]",
            self.canvas.frames(),
            ops.len()
        );
    }

    fn log(&mut self, line: LogLine) {
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN.to_owned(),
    };
    let pace = match args.next() {
        Some(s) => Pace::from_slider(s.parse()?),
        None => Pace::from_slider(0.95),
    };

    let config = CanvasConfig::default();
    let animator = Animator::new();
    for (index, points) in parse_point_cases(&text)?.iter().enumerate() {
        println!("Test {}: {} points", index + 1, points.len());
        replay(&animator, &config, points, pace);
        println!();
    }
    Ok(())
}

fn replay(animator: &Animator, config: &CanvasConfig, points: &[DataPoint], pace: Pace) {
    let run = closest_pair_trace(points);
    let mapping = config.mapping(points);
    let painter = config.painter(&mapping);
    let mut canvas = DisplayList::new(config.size);
    painter.paint(&mut canvas, &DrawState::default());
    let mut surface = Terminal {
        painter: &painter,
        canvas,
    };

    let outcome = animator.animate(
        &run.trace,
        pace.closest_pair_delay(),
        &mut PairPresenter::new(&mapping),
        &mut surface,
    );
    match outcome {
        Outcome::Completed { .. } => println!("Done. best d≈{:.2}", run.best.d),
        Outcome::Cancelled { .. } => println!("Stopped."),
        Outcome::Failed { error, .. } => println!("Replay failed: {error}"),
    }
}
