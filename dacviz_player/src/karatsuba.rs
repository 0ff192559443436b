// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames for Karatsuba traces: log lines only, styled by event kind.

use dacviz_trace::{KaratsubaEvent, TraceEvent};

use crate::animator::{Frame, Presenter, ReplayError};
use crate::log::{LineStyle, LogLine, Tone};

/// Presents [`KaratsubaEvent`]s as styled log lines. Never repaints.
#[derive(Copy, Clone, Debug, Default)]
pub struct KaratsubaPresenter;

impl KaratsubaPresenter {
    /// Stateless presenter.
    pub fn new() -> Self {
        Self
    }
}

/// Emphasis and color for an event kind.
pub fn line_look(event: &KaratsubaEvent) -> (LineStyle, Tone) {
    match event {
        KaratsubaEvent::Call { .. } => (LineStyle::BOLD, Tone::Plain),
        KaratsubaEvent::Base { .. } => (LineStyle::empty(), Tone::LightGreen),
        KaratsubaEvent::Split { .. } => (LineStyle::SPACE_AFTER, Tone::Aqua),
        KaratsubaEvent::Combine { .. } => (
            LineStyle::SPACE_BEFORE | LineStyle::SPACE_AFTER,
            Tone::LightCoral,
        ),
    }
}

impl Presenter for KaratsubaPresenter {
    type Event = KaratsubaEvent;

    fn reset(&mut self) {}

    fn present(&mut self, event: &TraceEvent<KaratsubaEvent>) -> Result<Frame, ReplayError> {
        let (style, tone) = line_look(&event.kind);
        Ok(Frame {
            draw: None,
            line: LogLine::new(event.depth, event.kind.to_string())
                .styled(style)
                .toned(tone),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dacviz_trace::karatsuba;

    #[test]
    fn lines_follow_the_trace() {
        let product = karatsuba("12", "34").unwrap();
        let mut presenter = KaratsubaPresenter::new();
        let frames: Vec<_> = product
            .trace
            .iter()
            .map(|e| presenter.present(e).unwrap())
            .collect();
        assert!(frames.iter().all(|f| f.draw.is_none()));
        assert_eq!(frames[0].line.text, "karatsuba(12, 34)");
        assert_eq!(frames[0].line.style, LineStyle::BOLD);
        assert_eq!(frames[1].line.text, "split x=1|2 y=3|4 (m=1)");
        assert_eq!(frames[1].line.tone, Tone::Aqua);
        assert_eq!(frames[1].line.style, LineStyle::SPACE_AFTER);
        let last = &frames[frames.len() - 1].line;
        assert!(last.text.ends_with("= 408"));
        assert_eq!(last.tone, Tone::LightCoral);
        assert_eq!(last.style, LineStyle::SPACE_BEFORE | LineStyle::SPACE_AFTER);
    }

    #[test]
    fn call_lines_are_bold() {
        let product = karatsuba("12", "34").unwrap();
        let mut presenter = KaratsubaPresenter::new();
        for event in &product.trace {
            let frame = presenter.present(event).unwrap();
            let bold = frame.line.style.contains(LineStyle::BOLD);
            assert_eq!(bold, event.kind.name() == "call");
        }
    }

    #[test]
    fn single_digits_give_a_call_and_an_unlabelled_base_line() {
        let product = karatsuba("7", "8").unwrap();
        let mut presenter = KaratsubaPresenter::new();
        let lines: Vec<_> = product
            .trace
            .iter()
            .map(|e| presenter.present(e).unwrap().line)
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "karatsuba(7, 8)");
        assert!(lines[0].style.contains(LineStyle::BOLD));
        assert_eq!(lines[1].text, "base -> 7 * 8 = 56");
        assert_eq!(lines[1].tone, Tone::LightGreen);
        assert!(lines.iter().all(|l| l.indent == 0));
    }
}
