// Copyright 2025 the Dacviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested merge regions.
//!
//! Each `merge-start` opens a region around the split line and the matching
//! `merge-end` closes it. Since merges nest like the recursion, the open
//! regions form a stack and the innermost one is the region to highlight.

use dacviz_canvas::Band;

/// Stack of open merge regions, outermost first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionStack {
    open: Vec<Band>,
}

impl RegionStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a region inside the current one.
    pub fn push(&mut self, band: Band) {
        self.open.push(band);
    }

    /// Close the innermost region.
    pub fn pop(&mut self) -> Option<Band> {
        self.open.pop()
    }

    /// Innermost open region, if any.
    pub fn current(&self) -> Option<Band> {
        self.open.last().copied()
    }

    /// Number of open regions.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Close every region.
    pub fn clear(&mut self) {
        self.open.clear();
    }
}
