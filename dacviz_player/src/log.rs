// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log panel lines.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Typographic emphasis of a log line.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LineStyle: u8 {
        /// Bold text.
        const BOLD         = 0b0000_0001;
        /// Extra vertical space above the line.
        const SPACE_BEFORE = 0b0000_0010;
        /// Extra vertical space below the line.
        const SPACE_AFTER  = 0b0000_0100;
    }
}

/// Text color of a log line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    /// The panel's default color.
    #[default]
    Plain,
    /// Light green.
    LightGreen,
    /// Aqua.
    Aqua,
    /// Light coral.
    LightCoral,
}

/// One line appended to the log panel per replayed event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// Indentation level; the recursion depth of the event.
    pub indent: usize,
    /// Narrative text, without indentation.
    pub text: String,
    /// Emphasis.
    pub style: LineStyle,
    /// Color.
    pub tone: Tone,
}

impl LogLine {
    /// Plain line at `indent`.
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
            style: LineStyle::empty(),
            tone: Tone::Plain,
        }
    }

    /// Same line with `style`.
    #[must_use]
    pub fn styled(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Same line with `tone`.
    #[must_use]
    pub fn toned(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl fmt::Display for LogLine {
    /// Two spaces per indentation level, then the text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str("  ")?;
        }
        f.write_str(&self.text)
    }
}
