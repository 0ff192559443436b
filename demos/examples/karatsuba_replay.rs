// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Karatsuba replay.
//!
//! Trace each multiplication and replay it as a colored, indented log. A
//! second thread stops the replay of the last case halfway to show
//! cancellation.
//!
//! Run:
//! - `cargo run -p dacviz_demos --example karatsuba_replay`
//! - `cargo run -p dacviz_demos --example karatsuba_replay -- numbers.txt 0.8`

use std::error::Error;
use std::thread;

use dacviz_canvas::DrawState;
use dacviz_player::{
    Animator, KaratsubaPresenter, LineStyle, LogLine, Outcome, Pace, Surface, Tone,
};
use dacviz_trace::{karatsuba, parse_multiplication_cases};
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = "\
3
1234 5678
31415926 27182818
123456789012 987654321098
";

/// Prints log lines with ANSI styling. Karatsuba replays never repaint.
struct Terminal;

impl Surface for Terminal {
    fn draw(&mut self, _state: &DrawState) {}

    fn log(&mut self, line: LogLine) {
        let color = match line.tone {
            Tone::Plain => "",
            Tone::LightGreen => "\x1b[92m",
            Tone::Aqua => "\x1b[96m",
            Tone::LightCoral => "\x1b[91m",
        };
        let bold = if line.style.contains(LineStyle::BOLD) { "\x1b[1m" } else { "" };
        if line.style.contains(LineStyle::SPACE_BEFORE) {
            println!();
        }
        println!("{bold}{color}{line}\x1b[0m");
        if line.style.contains(LineStyle::SPACE_AFTER) {
            println!();
        }
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
        None => Pace::from_slider(0.97),
    };

    let cases = parse_multiplication_cases(&text)?;
    let animator = Animator::new();
    for (index, case) in cases.iter().enumerate() {
        println!("Test {}: {} × {}", index + 1, case.a, case.b);
        let product = karatsuba(&case.a, &case.b)?;
        let delay = pace.karatsuba_delay();

        let last = index + 1 == cases.len();
        let outcome = thread::scope(|s| {
            if last {
                let halfway = delay * u32::try_from(product.trace.len() / 2).unwrap_or(u32::MAX);
                let animator = &animator;
                s.spawn(move || {
                    thread::sleep(halfway);
                    animator.stop();
                });
            }
            animator.animate(&product.trace, delay, &mut KaratsubaPresenter::new(), &mut Terminal)
        });
        match outcome {
            Outcome::Completed { .. } => println!("= {}", product.value),
            Outcome::Cancelled { steps } => println!("Stopped after {steps} steps."),
            Outcome::Failed { error, .. } => println!("Replay failed: {error}"),
        }
        println!();
    }
    Ok(())
}
