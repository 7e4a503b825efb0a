// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::TextStyle;

/// A run of text sharing one style, as stored in a [`StyledRunTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct IndexedRun {
    style_index: usize,
    start: usize,
    end: usize,
}

/// A view of one run of a [`StyledRunTable`].
#[derive(Clone, Copy, Debug)]
pub struct StyledRun<'a> {
    /// The style of the run.
    pub style: &'a TextStyle,
    /// Index of the style in the table.
    pub style_index: usize,
    /// First code unit of the run.
    pub start: usize,
    /// One past the last code unit of the run.
    pub end: usize,
}

/// Append-only mapping from contiguous ranges of code units to styles.
///
/// Styles are registered once with [`add_style`](Self::add_style) and runs refer to them by
/// index. A run is opened with [`start_run`](Self::start_run), which also closes the previous
/// one, and the last run is closed with [`end_run_if_needed`](Self::end_run_if_needed). Runs
/// that would end up empty are dropped, so after the final close the runs are ordered,
/// non-overlapping and contiguous.
#[derive(Clone, Debug, Default)]
pub struct StyledRunTable {
    styles: Vec<TextStyle>,
    runs: Vec<IndexedRun>,
}

impl StyledRunTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a style and returns its index.
    pub fn add_style(&mut self, style: &TextStyle) -> usize {
        self.styles.push(style.clone());
        self.styles.len() - 1
    }

    /// Returns a registered style.
    pub fn style(&self, index: usize) -> Option<&TextStyle> {
        self.styles.get(index)
    }

    /// Closes the open run at `start` and opens a new run with the given style.
    pub fn start_run(&mut self, style_index: usize, start: usize) {
        self.end_run_if_needed(start);
        self.runs.push(IndexedRun {
            style_index,
            start,
            end: start,
        });
    }

    /// Closes the last run at `end`, dropping it if it would be empty.
    pub fn end_run_if_needed(&mut self, end: usize) {
        let Some(run) = self.runs.last_mut() else {
            return;
        };
        if run.start == end {
            self.runs.pop();
        } else {
            run.end = end;
        }
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the table has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the run at `index`.
    pub fn run(&self, index: usize) -> Option<StyledRun<'_>> {
        self.runs.get(index).map(|run| self.view(run))
    }

    /// Iterates over the runs in text order.
    pub fn runs(&self) -> impl Iterator<Item = StyledRun<'_>> + '_ {
        self.runs.iter().map(|run| self.view(run))
    }

    /// Returns the run containing the code unit at `offset`.
    pub fn run_containing(&self, offset: usize) -> Option<StyledRun<'_>> {
        let index = self.runs.partition_point(|run| run.start <= offset);
        let run = self.runs.get(index.checked_sub(1)?)?;
        (offset < run.end).then(|| self.view(run))
    }

    fn view<'a>(&'a self, run: &IndexedRun) -> StyledRun<'a> {
        StyledRun {
            // Runs only ever refer to styles registered through `add_style`.
            style: &self.styles[run.style_index],
            style_index: run.style_index,
            start: run.start,
            end: run.end,
        }
    }
}
