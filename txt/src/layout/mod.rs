// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laid-out paragraphs.

mod alignment;
mod breaking;
mod data;
mod engine;
mod hit_test;
mod metrics;
mod rects;
mod source;
mod strut;

use std::sync::Arc;

use crate::context::LayoutContext;
use crate::font::FontCollection;
use crate::placeholder::PlaceholderRun;
use crate::style::ParagraphStyle;
use crate::styled_runs::StyledRunTable;
use crate::Error;

pub use data::{CodeUnitRun, GlyphPosition, PaintRecord};
pub use metrics::{
    Affinity, Extent, LineMetrics, PositionWithAffinity, Rect, RectHeightStyle, RectWidthStyle,
    TextBox,
};

use engine::LayoutState;
use source::Source;

/// A paragraph of styled text, laid out at a given width.
///
/// A paragraph is created by a [`ParagraphBuilder`](crate::ParagraphBuilder) and must be laid
/// out with [`layout`](Self::layout) before it can be queried. Queries on a paragraph that has
/// not been laid out successfully return empty or zero results.
#[derive(Clone, Debug)]
pub struct Paragraph {
    source: Source,
    state: LayoutState,
    /// The floored width of the last layout.
    width: f32,
    needs_layout: bool,
}

impl Paragraph {
    pub(crate) fn new(
        text: Vec<u16>,
        runs: StyledRunTable,
        placeholders: Vec<PlaceholderRun>,
        placeholder_offsets: Vec<usize>,
        style: ParagraphStyle,
        fonts: Arc<FontCollection>,
        context: Arc<LayoutContext>,
    ) -> Self {
        Self {
            source: Source {
                text,
                runs,
                placeholders,
                placeholder_offsets,
                style,
                fonts,
                context,
            },
            state: LayoutState::default(),
            width: 0.0,
            needs_layout: true,
        }
    }

    /// Lays out the paragraph at `width`, which is floored to a whole number of pixels.
    ///
    /// Does nothing if the floored width is unchanged since the last successful layout and the
    /// paragraph has not been modified. On failure the paragraph has no lines, and the next call
    /// lays it out again.
    pub fn layout(&mut self, width: f32) -> Result<(), Error> {
        let width = width.floor();
        if !self.needs_layout && self.width == width {
            return Ok(());
        }
        self.width = width;
        match engine::layout(&self.source, width) {
            Ok(state) => {
                self.state = state;
                self.needs_layout = false;
                log::debug!(
                    "laid out {} code units at width {width}: {} lines, exceeded max lines: {}",
                    self.source.text.len(),
                    self.state.lines.len(),
                    self.state.did_exceed_max_lines
                );
                Ok(())
            }
            Err(err) => {
                self.state = LayoutState::default();
                self.needs_layout = true;
                log::warn!("layout at width {width} failed: {err}");
                Err(err)
            }
        }
    }

    /// The bottom of the last line, or zero without lines.
    pub fn height(&self) -> f32 {
        self.state.lines.last().map_or(0.0, |line| line.height)
    }

    /// Distance between the leftmost and rightmost laid-out glyphs, over all lines.
    pub fn longest_line(&self) -> f32 {
        self.state.longest_line
    }

    /// The width of the last layout.
    pub fn max_width(&self) -> f32 {
        self.width
    }

    /// The narrowest width the paragraph can be laid out at without breaking inside a word.
    pub fn min_intrinsic_width(&self) -> f32 {
        self.state.min_intrinsic_width
    }

    /// The width the paragraph would take if only mandatory breaks were applied.
    pub fn max_intrinsic_width(&self) -> f32 {
        self.state.max_intrinsic_width
    }

    /// Distance from the top of the paragraph to the alphabetic baseline of the first line.
    pub fn alphabetic_baseline(&self) -> f32 {
        self.state.alphabetic_baseline
    }

    /// Distance from the top of the paragraph to the ideographic baseline of the first line.
    pub fn ideographic_baseline(&self) -> f32 {
        self.state.ideographic_baseline
    }

    /// Boxes covering the code units `start..end`, in line order.
    pub fn rects_for_range(
        &self,
        start: usize,
        end: usize,
        height_style: RectHeightStyle,
        width_style: RectWidthStyle,
    ) -> Vec<TextBox> {
        rects::rects_for_range(
            &self.source,
            &self.state,
            self.width,
            start,
            end,
            height_style,
            width_style,
        )
    }

    /// One box per laid-out placeholder, in line order.
    pub fn rects_for_placeholders(&self) -> Vec<TextBox> {
        rects::rects_for_placeholders(&self.source, &self.state)
    }

    /// The code unit offset closest to a point.
    pub fn glyph_position_at_coordinate(&self, x: f32, y: f32) -> PositionWithAffinity {
        hit_test::glyph_position_at_coordinate(&self.state, x, y)
    }

    /// The word containing `offset`.
    ///
    /// Returns an empty range at `offset` when the text is empty or has no word boundaries.
    pub fn word_boundary(&self, offset: usize) -> core::ops::Range<usize> {
        crate::word::word_boundary(&*self.source.context.words, &self.source.text, offset)
    }

    /// Number of laid-out lines.
    pub fn line_count(&self) -> usize {
        self.state.lines.len()
    }

    /// Whether lines were dropped because of the maximum line count or an ellipsis.
    pub fn did_exceed_max_lines(&self) -> bool {
        self.state.did_exceed_max_lines
    }

    /// Metrics of each laid-out line.
    pub fn line_metrics(&self) -> &[LineMetrics] {
        &self.state.lines
    }

    /// The laid-out runs, sorted by first code unit.
    pub fn code_unit_runs(&self) -> &[CodeUnitRun] {
        &self.state.code_unit_runs
    }

    /// Glyphs to paint, in line order.
    pub fn paint_records(&self) -> &[PaintRecord] {
        &self.state.paint_records
    }

    /// The text of the paragraph, as UTF-16 code units.
    pub fn text(&self) -> &[u16] {
        &self.source.text
    }

    /// The styled runs of the text.
    pub fn runs(&self) -> &StyledRunTable {
        &self.source.runs
    }

    /// The inline placeholders, in text order.
    pub fn placeholders(&self) -> &[PlaceholderRun] {
        &self.source.placeholders
    }

    /// The paragraph style.
    pub fn style(&self) -> &ParagraphStyle {
        &self.source.style
    }

    /// Replaces the text and its styled runs.
    ///
    /// The runs must cover the text, and the text must keep one U+FFFC per placeholder.
    pub fn set_text(&mut self, text: Vec<u16>, runs: StyledRunTable) {
        self.source.text = text;
        self.source.runs = runs;
        self.needs_layout = true;
    }

    /// Replaces the inline placeholders and the offsets of the U+FFFC code units standing in
    /// for them.
    pub fn set_inline_placeholders(
        &mut self,
        placeholders: Vec<PlaceholderRun>,
        mut offsets: Vec<usize>,
    ) {
        offsets.sort_unstable();
        self.source.placeholders = placeholders;
        self.source.placeholder_offsets = offsets;
        self.needs_layout = true;
    }

    /// Replaces the paragraph style.
    pub fn set_paragraph_style(&mut self, style: ParagraphStyle) {
        self.source.style = style;
        self.needs_layout = true;
    }

    /// Replaces the font collection.
    pub fn set_font_collection(&mut self, fonts: Arc<FontCollection>) {
        self.source.fonts = fonts;
        self.needs_layout = true;
    }

    /// Marks the paragraph as needing layout, for example after fonts were added to its
    /// collection.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.needs_layout = dirty;
    }
}
