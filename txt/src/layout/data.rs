// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::Extent;
use crate::font::{FakedFont, FontMetrics, GlyphId};
use crate::style::TextDirection;

/// The horizontal position of one cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPosition {
    /// Code units of the cluster.
    pub code_units: Range<usize>,
    /// Horizontal extent of the cluster.
    pub x: Extent,
}

impl GlyphPosition {
    pub(crate) fn new(code_units: Range<usize>, x: f32, advance: f32) -> Self {
        Self {
            code_units,
            x: Extent::new(x, advance),
        }
    }

    pub(crate) fn shift(&mut self, delta: f32) {
        self.x.shift(delta);
    }
}

/// A laid-out run of text in one direction and one style, on one line.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeUnitRun {
    /// Positions of the run's clusters, sorted by code unit.
    pub positions: Vec<GlyphPosition>,
    /// Code units covered by the run.
    pub code_units: Range<usize>,
    /// Horizontal extent of the run.
    pub x: Extent,
    /// Line the run is on.
    pub line_number: usize,
    /// Index of the run's style in the paragraph's run table.
    pub style_index: usize,
    /// Direction of the run.
    pub direction: TextDirection,
    /// Metrics of the run's font.
    pub font_metrics: FontMetrics,
    /// The placeholder this run stands for, as an index into the paragraph's placeholders.
    pub placeholder: Option<usize>,
    /// Whether the run is trailing white space that does not take part in alignment.
    pub is_ghost: bool,
}

impl CodeUnitRun {
    pub(crate) fn shift(&mut self, delta: f32) {
        self.x.shift(delta);
        for position in &mut self.positions {
            position.shift(delta);
        }
    }
}

/// The glyph positions of one line, sorted by x.
#[derive(Clone, Debug, Default)]
pub(crate) struct GlyphLine {
    pub(crate) positions: Vec<GlyphPosition>,
}

/// Glyphs that paint with the same typeface and style, as handed to a painter.
#[derive(Clone, Debug)]
pub struct PaintRecord {
    /// Index of the style in the paragraph's run table.
    pub style_index: usize,
    /// The typeface and its synthesis, or `None` for a placeholder.
    pub font: Option<FakedFont>,
    /// Font size the glyphs are painted at.
    pub font_size: f32,
    /// Glyph identifiers.
    pub glyph_ids: Vec<GlyphId>,
    /// Horizontal position of each glyph, relative to `x`.
    pub glyph_x: Vec<f32>,
    /// Horizontal origin of the record.
    pub x: f32,
    /// Baseline of the record's line.
    pub y: f32,
    /// Line the record is on.
    pub line_number: usize,
    /// Horizontal extent covered by the record.
    pub extent: Extent,
    /// Metrics of the font.
    pub font_metrics: FontMetrics,
    /// Whether the record paints trailing white space.
    pub is_ghost: bool,
    /// The placeholder this record stands for.
    pub placeholder: Option<usize>,
}

impl PaintRecord {
    pub(crate) fn shift(&mut self, delta: f32) {
        self.x += delta;
        self.extent.shift(delta);
    }
}
