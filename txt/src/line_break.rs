// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing line breaks within a block of text.

use icu_segmenter::options::LineBreakOptions;
use icu_segmenter::{GraphemeClusterSegmenter, LineSegmenter};

use crate::style::BreakStrategy;
use crate::util;

/// Parameters for breaking one block of text into lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakOptions {
    /// Maximum line width. May be infinite.
    pub width: f32,
    /// How breaks are chosen among the opportunities.
    pub strategy: BreakStrategy,
    /// Whether the lines will be justified.
    pub justified: bool,
}

/// The end of a line within a block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineBreak {
    /// Offset, relative to the start of the block, where the line ends.
    pub offset: usize,
    /// Width of the line, excluding trailing white space.
    pub width: f32,
}

/// Chooses where a block of text without mandatory breaks is broken into lines.
pub trait LineBreaker: Send + Sync {
    /// Breaks `text` into lines.
    ///
    /// `widths` holds the advance of every code unit of `text`; the advance of a cluster is
    /// attributed to its first code unit. The returned breaks are in ascending order and the last
    /// one ends at `text.len()`. Empty text has no lines.
    fn compute_breaks(&self, text: &[u16], widths: &[f32], options: &BreakOptions)
        -> Vec<LineBreak>;
}

/// [`LineBreaker`] driven by the break opportunities of the ICU4X line segmenter.
///
/// [`BreakStrategy::Greedy`] fills each line with as much text as fits.
/// [`BreakStrategy::HighQuality`] and [`BreakStrategy::Balanced`] choose the breaks that minimize
/// the sum of squared unused widths; the former ignores the last line, the latter includes it,
/// which evens out line lengths. Text between two opportunities that is wider than a line is
/// broken between grapheme clusters. The same breaks are chosen for justified text.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcuLineBreaker;

impl LineBreaker for IcuLineBreaker {
    fn compute_breaks(
        &self,
        text: &[u16],
        widths: &[f32],
        options: &BreakOptions,
    ) -> Vec<LineBreak> {
        if text.is_empty() {
            return Vec::new();
        }
        let measure = Measure::new(text, widths);
        let max_width = options.width;
        if max_width.is_infinite() {
            return vec![measure.line(0, text.len())];
        }
        let segmenter = LineSegmenter::new_auto(LineBreakOptions::default());
        let opportunities: Vec<usize> = segmenter
            .segment_utf16(text)
            .filter(|&offset| offset > 0 && offset <= text.len())
            .collect();
        let mut graphemes = Graphemes::new(text);
        let offsets = match options.strategy {
            BreakStrategy::Greedy => greedy(&measure, &mut graphemes, &opportunities, max_width),
            BreakStrategy::HighQuality | BreakStrategy::Balanced => {
                let candidates = candidates(&measure, &mut graphemes, &opportunities, max_width);
                let charge_last_line = options.strategy == BreakStrategy::Balanced;
                optimal(&measure, &candidates, max_width, charge_last_line)
            }
        };
        let mut start = 0;
        offsets
            .into_iter()
            .map(|end| {
                let line = measure.line(start, end);
                start = end;
                line
            })
            .collect()
    }
}

struct Measure<'a> {
    text: &'a [u16],
    /// Prefix sums of the advances.
    offsets: Vec<f32>,
}

impl<'a> Measure<'a> {
    fn new(text: &'a [u16], widths: &[f32]) -> Self {
        let mut offsets = Vec::with_capacity(text.len() + 1);
        let mut total = 0.0;
        offsets.push(total);
        for index in 0..text.len() {
            total += widths.get(index).copied().unwrap_or(0.0);
            offsets.push(total);
        }
        Self { text, offsets }
    }

    /// Width of `start..end` without trailing line-end spaces.
    fn width(&self, start: usize, end: usize) -> f32 {
        let mut visible_end = end;
        while visible_end > start && util::is_line_end_space(self.text[visible_end - 1]) {
            visible_end -= 1;
        }
        self.offsets[visible_end] - self.offsets[start]
    }

    fn line(&self, start: usize, end: usize) -> LineBreak {
        LineBreak {
            offset: end,
            width: self.width(start, end),
        }
    }
}

/// Grapheme cluster boundaries, computed on first use.
struct Graphemes<'a> {
    text: &'a [u16],
    boundaries: Option<Vec<usize>>,
}

impl<'a> Graphemes<'a> {
    fn new(text: &'a [u16]) -> Self {
        Self {
            text,
            boundaries: None,
        }
    }

    /// Boundaries strictly inside `start..end`.
    fn within(&mut self, start: usize, end: usize) -> impl Iterator<Item = usize> + '_ {
        let text = self.text;
        self.boundaries
            .get_or_insert_with(|| GraphemeClusterSegmenter::new().segment_utf16(text).collect())
            .iter()
            .copied()
            .filter(move |&boundary| boundary > start && boundary < end)
    }
}

/// Breaks `start..end`, which is too wide for a line, between grapheme clusters.
///
/// Pushes every break but the last piece's end and returns the start of the last piece.
fn split_desperately(
    measure: &Measure<'_>,
    graphemes: &mut Graphemes<'_>,
    start: usize,
    end: usize,
    max_width: f32,
    breaks: &mut Vec<usize>,
) -> usize {
    let mut piece_start = start;
    let mut previous = start;
    for boundary in graphemes.within(start, end).chain([end]) {
        if measure.width(piece_start, boundary) > max_width && previous > piece_start {
            breaks.push(previous);
            piece_start = previous;
        }
        previous = boundary;
    }
    piece_start
}

fn greedy(
    measure: &Measure<'_>,
    graphemes: &mut Graphemes<'_>,
    opportunities: &[usize],
    max_width: f32,
) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut line_start = 0;
    let mut last_fit = None;
    for &opportunity in opportunities {
        if measure.width(line_start, opportunity) <= max_width {
            last_fit = Some(opportunity);
            continue;
        }
        if let Some(fit) = last_fit.take() {
            breaks.push(fit);
            line_start = fit;
        }
        if measure.width(line_start, opportunity) > max_width {
            line_start =
                split_desperately(measure, graphemes, line_start, opportunity, max_width, &mut breaks);
        }
        last_fit = Some(opportunity);
    }
    breaks.extend(last_fit);
    breaks
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    offset: usize,
    /// Breaks inside a word are only taken when the word does not fit on a line.
    desperate: bool,
}

fn candidates(
    measure: &Measure<'_>,
    graphemes: &mut Graphemes<'_>,
    opportunities: &[usize],
    max_width: f32,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(opportunities.len());
    let mut start = 0;
    for &end in opportunities {
        if measure.width(start, end) > max_width {
            candidates.extend(graphemes.within(start, end).map(|offset| Candidate {
                offset,
                desperate: true,
            }));
        }
        candidates.push(Candidate {
            offset: end,
            desperate: false,
        });
        start = end;
    }
    candidates
}

/// Minimizes the total squared slack over all ways of breaking at `candidates`.
fn optimal(
    measure: &Measure<'_>,
    candidates: &[Candidate],
    max_width: f32,
    charge_last_line: bool,
) -> Vec<usize> {
    // Overflowing lines are only allowed when they hold a single candidate segment.
    const OVERFLOW_PENALTY: f64 = 1e12;
    const DESPERATE_PENALTY: f64 = 1e9;

    let count = candidates.len();
    let start_of = |node: usize| if node == 0 { 0 } else { candidates[node - 1].offset };
    let mut cost = vec![f64::INFINITY; count + 1];
    let mut previous = vec![0_usize; count + 1];
    cost[0] = 0.0;
    for end_node in 1..=count {
        let end = candidates[end_node - 1];
        let is_last = end_node == count;
        for start_node in (0..end_node).rev() {
            let width = measure.width(start_of(start_node), end.offset);
            let mut line_cost = if width > max_width {
                if start_node + 1 != end_node {
                    break;
                }
                OVERFLOW_PENALTY + f64::from(width - max_width).powi(2)
            } else if is_last && !charge_last_line {
                0.0
            } else {
                f64::from(max_width - width).powi(2)
            };
            if end.desperate {
                line_cost += DESPERATE_PENALTY;
            }
            let total = cost[start_node] + line_cost;
            if total < cost[end_node] {
                cost[end_node] = total;
                previous[end_node] = start_node;
            }
        }
    }
    let mut breaks = Vec::new();
    let mut node = count;
    while node > 0 {
        breaks.push(candidates[node - 1].offset);
        node = previous[node];
    }
    breaks.reverse();
    breaks
}
