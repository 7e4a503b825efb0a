// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning the runs of each line.

use core::ops::Range;

use super::alignment::line_x_offset;
use super::breaking::{self, BrokenLine};
use super::data::GlyphLine;
use super::source::Source;
use super::strut::{self, Strut};
use super::{CodeUnitRun, Extent, GlyphPosition, LineMetrics, PaintRecord};
use crate::bidi::{self, BidiRun, RunKind};
use crate::font::FontMetrics;
use crate::shape::{ShapedRun, Shaper};
use crate::style::{TextAlign, TextStyle};
use crate::word;
use crate::Error;

/// Everything computed by a layout.
#[derive(Clone, Debug)]
pub(crate) struct LayoutState {
    pub(crate) lines: Vec<LineMetrics>,
    pub(crate) glyph_lines: Vec<GlyphLine>,
    /// Sorted by first code unit.
    pub(crate) code_unit_runs: Vec<CodeUnitRun>,
    pub(crate) placeholder_runs: Vec<CodeUnitRun>,
    pub(crate) paint_records: Vec<PaintRecord>,
    /// Distance from the top of each placeholder to the baseline of its line.
    pub(crate) placeholder_baselines: Vec<f32>,
    pub(crate) strut: Strut,
    pub(crate) max_intrinsic_width: f32,
    pub(crate) min_intrinsic_width: f32,
    pub(crate) longest_line: f32,
    pub(crate) alphabetic_baseline: f32,
    pub(crate) ideographic_baseline: f32,
    pub(crate) min_left: f32,
    pub(crate) max_right: f32,
    pub(crate) did_exceed_max_lines: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            glyph_lines: Vec::new(),
            code_unit_runs: Vec::new(),
            placeholder_runs: Vec::new(),
            paint_records: Vec::new(),
            placeholder_baselines: Vec::new(),
            strut: Strut::default(),
            max_intrinsic_width: 0.0,
            min_intrinsic_width: 0.0,
            longest_line: 0.0,
            alphabetic_baseline: 0.0,
            ideographic_baseline: 0.0,
            min_left: f32::MAX,
            max_right: f32::MIN,
            did_exceed_max_lines: false,
        }
    }
}

/// Font metrics a laid-out run contributes to its line.
struct RunExtent<'a> {
    metrics: FontMetrics,
    style: &'a TextStyle,
    placeholder: Option<usize>,
}

/// Lays out the paragraph at `width`.
pub(crate) fn layout(source: &Source, width: f32) -> Result<LayoutState, Error> {
    let broken = breaking::break_lines(source, width)?;
    let mut runs = bidi::resolve_runs(
        &*source.context.bidi,
        &source.text,
        source.style.text_direction,
        &source.runs,
    )?;
    for run in &mut runs {
        if run.range.len() == 1 {
            if let Some(index) = source.placeholder_at(run.range.start) {
                run.kind = RunKind::Placeholder(index);
            }
        }
    }

    let mut state = LayoutState {
        strut: strut::compute(source),
        max_intrinsic_width: broken.max_intrinsic_width,
        placeholder_baselines: source
            .placeholders
            .iter()
            .map(|placeholder| placeholder.baseline_offset)
            .collect(),
        ..LayoutState::default()
    };
    let mut line_limit = broken.lines.len();
    if let Some(max_lines) = source.style.max_lines {
        if line_limit > max_lines {
            line_limit = max_lines;
            state.did_exceed_max_lines = true;
        }
    }

    let mut line_number = 0;
    while line_number < line_limit {
        let mut lines = LineLayout {
            source,
            state: &mut state,
            width,
            line_number,
            line_limit,
        };
        let stop = lines.lay_out(&broken.lines, &runs)?;
        if stop {
            line_limit = line_number + 1;
            state.did_exceed_max_lines = true;
        }
        line_number += 1;
    }

    let style = &source.style;
    state.min_intrinsic_width =
        if style.max_lines == Some(1) || (style.unlimited_lines() && style.ellipsized()) {
            state.max_intrinsic_width
        } else {
            broken.max_word_width.min(state.max_intrinsic_width)
        };
    state
        .code_unit_runs
        .sort_by_key(|run| run.code_units.start);
    state.longest_line = if state.max_right >= state.min_left {
        state.max_right - state.min_left
    } else {
        0.0
    };
    Ok(state)
}

struct LineLayout<'a> {
    source: &'a Source,
    state: &'a mut LayoutState,
    width: f32,
    line_number: usize,
    line_limit: usize,
}

impl LineLayout<'_> {
    /// Lays out one line. Returns whether no further lines should be laid out, because the line
    /// was truncated with an ellipsis and the number of lines is unlimited.
    fn lay_out(&mut self, broken_lines: &[BrokenLine], runs: &[BidiRun]) -> Result<bool, Error> {
        let source = self.source;
        let style = &source.style;
        let text = &source.text;
        let broken = &broken_lines[self.line_number];
        let mut metrics = broken.metrics.clone();
        let base_style = style.text_style();

        let justify_line = style.text_align == TextAlign::Justify
            && self.line_number + 1 != self.line_limit
            && !broken.ends_block;
        let mut words = word::find_words(text, metrics.start_index..metrics.end_index);
        let word_gap = if justify_line && words.len() > 1 {
            (self.width - metrics.width) / (words.len() - 1) as f32
        } else {
            0.0
        };
        let line_end = match style.effective_align() {
            TextAlign::Right | TextAlign::Center | TextAlign::Justify => {
                metrics.end_excluding_whitespace
            }
            _ => metrics.end_index,
        };

        let line_runs = self.line_runs(&metrics, line_end, runs);
        if !line_runs.is_empty() && line_runs.iter().all(BidiRun::is_rtl) {
            words.reverse();
        }

        let mut positions: Vec<GlyphPosition> = Vec::new();
        let mut code_unit_runs: Vec<CodeUnitRun> = Vec::new();
        let mut records: Vec<PaintRecord> = Vec::new();
        let mut extents: Vec<RunExtent<'_>> = Vec::new();
        let mut run_x = 0.0;
        let mut justify_x = 0.0;
        let mut word_index = 0;
        let mut stop = false;

        for (chunk_index, run) in line_runs.iter().enumerate() {
            let run_style = source
                .runs
                .style(run.style_index)
                .ok_or_else(|| Error::uncovered_text(run.range.start))?;
            let fonts = source.resolve_fonts(run_style)?;
            let shaper = Shaper::new(&source.fonts, &fonts, run_style)
                .ok_or_else(|| source.font_error(run_style))?;
            let font_metrics = shaper.metrics();

            if let RunKind::Placeholder(index) = run.kind {
                let placeholder = &source.placeholders[index];
                let x = run_x + justify_x;
                let position = GlyphPosition::new(run.range.clone(), x, placeholder.width);
                let extent = Extent::new(x, placeholder.width);
                positions.push(position.clone());
                code_unit_runs.push(CodeUnitRun {
                    positions: vec![position],
                    code_units: run.range.clone(),
                    x: extent,
                    line_number: self.line_number,
                    style_index: run.style_index,
                    direction: run.direction,
                    font_metrics,
                    placeholder: Some(index),
                    is_ghost: false,
                });
                records.push(PaintRecord {
                    style_index: run.style_index,
                    font: None,
                    font_size: run_style.font_size,
                    glyph_ids: Vec::new(),
                    glyph_x: Vec::new(),
                    x,
                    y: 0.0,
                    line_number: self.line_number,
                    extent,
                    font_metrics,
                    is_ghost: false,
                    placeholder: Some(index),
                });
                extents.push(RunExtent {
                    metrics: font_metrics,
                    style: run_style,
                    placeholder: Some(index),
                });
                if let Some(word) = words.get(word_index) {
                    let ends_word = if run.is_rtl() {
                        word.start == run.range.start
                    } else {
                        word.end == run.range.end
                    };
                    if ends_word {
                        if justify_line && word_index + 1 < words.len() {
                            justify_x += word_gap;
                        }
                        word_index += 1;
                    }
                }
                run_x += placeholder.width;
                continue;
            }

            let is_last_chunk = chunk_index + 1 == line_runs.len();
            let ellipsis = (style.ellipsized()
                && self.width.is_finite()
                && !broken.ends_block
                && is_last_chunk
                && (self.line_number + 1 == self.line_limit || style.unlimited_lines()))
            .then(|| self.ellipsize(&shaper, run, run_x));
            if ellipsis.is_some() && style.unlimited_lines() {
                self.line_limit = self.line_number + 1;
                stop = true;
            }
            let shaped = match &ellipsis {
                Some(ellipsized) => {
                    shaper.shape(&ellipsized.text, 0..ellipsized.text.len(), run.is_rtl())
                }
                None => shaper.shape(text, run.range.clone(), run.is_rtl()),
            };
            if shaped.clusters.is_empty() {
                continue;
            }
            if run.is_ghost() && run.is_rtl() {
                run_x -= shaped.advance;
            }

            let origin = run_x + justify_x;
            let mut run_positions: Vec<GlyphPosition> = Vec::with_capacity(shaped.clusters.len());
            let mut glyph_x = vec![0.0; shaped.glyphs.len()];
            for cluster in &shaped.clusters {
                let (code_units, in_ellipsis) = match &ellipsis {
                    Some(ellipsized) => ellipsized.code_units(run, &cluster.text_range),
                    None => (cluster.text_range.clone(), false),
                };
                let shift = run_x + justify_x;
                for glyph in cluster.glyph_range.clone() {
                    glyph_x[glyph] = shift + shaped.glyphs[glyph].x - origin;
                }
                let x = shift + cluster.x;
                match run_positions.last_mut() {
                    Some(last) if in_ellipsis && last.code_units == code_units => {
                        last.x.end = x + cluster.advance;
                    }
                    _ => run_positions.push(GlyphPosition::new(
                        code_units.clone(),
                        x,
                        cluster.advance,
                    )),
                }
                if let Some(word) = words.get(word_index) {
                    let ends_word = if run.is_rtl() {
                        word.start == code_units.start
                    } else {
                        word.end == code_units.end
                    };
                    if ends_word {
                        if justify_line && word_index + 1 < words.len() {
                            justify_x += word_gap;
                        }
                        word_index += 1;
                    }
                }
            }

            for range in shaped.typeface_ranges() {
                records.push(self.paint_record(run, run_style, &shaped, range, &glyph_x, origin));
            }

            let extent = Extent {
                start: run_positions
                    .iter()
                    .map(|position| position.x.start)
                    .fold(f32::MAX, f32::min),
                end: run_positions
                    .iter()
                    .map(|position| position.x.end)
                    .fold(f32::MIN, f32::max),
            };
            positions.extend(run_positions.iter().cloned());
            run_positions.sort_by_key(|position| position.code_units.start);
            code_unit_runs.push(CodeUnitRun {
                positions: run_positions,
                code_units: run.range.clone(),
                x: extent,
                line_number: self.line_number,
                style_index: run.style_index,
                direction: run.direction,
                font_metrics,
                placeholder: None,
                is_ghost: run.is_ghost(),
            });
            extents.push(RunExtent {
                metrics: font_metrics,
                style: run_style,
                placeholder: None,
            });

            if !run.is_ghost() || run.is_rtl() {
                run_x += shaped.advance;
            }
        }

        let x_offset = line_x_offset(style, self.width, run_x, justify_line);
        if x_offset != 0.0 {
            for run in &mut code_unit_runs {
                run.shift(x_offset);
            }
            for position in &mut positions {
                position.shift(x_offset);
            }
            for record in &mut records {
                record.shift(x_offset);
            }
        }
        for run in code_unit_runs.iter().filter(|run| !run.is_ghost) {
            self.state.min_left = self.state.min_left.min(run.x.start);
            self.state.max_right = self.state.max_right.max(run.x.end);
        }

        positions.sort_by(|a, b| a.x.start.total_cmp(&b.x.start));
        self.state.glyph_lines.push(GlyphLine { positions });

        if extents.is_empty() {
            if let Some(font_metrics) = self.base_metrics(&base_style) {
                extents.push(RunExtent {
                    metrics: font_metrics,
                    style: &base_style,
                    placeholder: None,
                });
            }
        }
        let vertical = self.vertical_metrics(&extents);

        if self.line_number == 0 {
            self.state.alphabetic_baseline = vertical.ascent;
            self.state.ideographic_baseline = vertical.ascent + vertical.descent;
        }
        let top = self.state.lines.last().map_or(0.0, |line| line.height);
        metrics.height = top + (vertical.ascent + vertical.descent).round();
        metrics.baseline = top + vertical.ascent;
        metrics.ascent = vertical.ascent;
        metrics.descent = vertical.descent;
        metrics.unscaled_ascent = vertical.unscaled_ascent;
        metrics.left = x_offset;
        metrics.line_number = self.line_number;

        for record in &mut records {
            record.y = metrics.baseline;
        }
        self.state.lines.push(metrics);
        self.state.code_unit_runs.extend(code_unit_runs.iter().cloned());
        self.state.placeholder_runs.extend(
            code_unit_runs
                .into_iter()
                .filter(|run| run.placeholder.is_some()),
        );
        self.state.paint_records.append(&mut records);
        Ok(stop)
    }

    /// The runs of the line in visual order, including trailing white space that is excluded
    /// from alignment as ghost runs.
    fn line_runs(&self, metrics: &LineMetrics, line_end: usize, runs: &[BidiRun]) -> Vec<BidiRun> {
        let ghosts_allowed = !self.source.style.ellipsized()
            && metrics.end_excluding_whitespace < metrics.end_index;
        let mut line_runs = Vec::new();
        for run in runs {
            let ghost = ghosts_allowed
                .then(|| run.range.start.max(line_end)..run.range.end.min(metrics.end_index))
                .filter(|range| !range.is_empty() && run.range.start <= metrics.end_index)
                .map(|range| BidiRun {
                    range,
                    kind: RunKind::Ghost,
                    ..run.clone()
                });
            if run.is_rtl() {
                line_runs.extend(ghost.clone());
            }
            if run.range.start < line_end && run.range.end > metrics.start_index {
                line_runs.push(BidiRun {
                    range: run.range.start.max(metrics.start_index)..run.range.end.min(line_end),
                    ..run.clone()
                });
            }
            if !run.is_rtl() {
                line_runs.extend(ghost);
            }
        }
        line_runs
    }

    /// Truncates the run so that it fits on the line together with the ellipsis.
    fn ellipsize(&self, shaper: &Shaper<'_>, run: &BidiRun, run_x: f32) -> Ellipsized {
        let text = &self.source.text;
        let ellipsis: Vec<u16> = self.source.style.ellipsis.encode_utf16().collect();
        let ellipsis_width = shaper.shape(&ellipsis, 0..ellipsis.len(), run.is_rtl()).advance;
        let shaped = shaper.shape(text, run.range.clone(), run.is_rtl());
        let mut text_width = shaped.advance;
        let mut kept = run.range.len();
        // A cluster's advance sits on its first code unit, so this only stops between clusters.
        while kept > 0 && run_x + text_width + ellipsis_width > self.width {
            kept -= 1;
            text_width -= shaped.advances[kept];
        }
        let mut ellipsized = text[run.range.start..run.range.start + kept].to_vec();
        ellipsized.extend_from_slice(&ellipsis);
        Ellipsized {
            text: ellipsized,
            kept,
        }
    }

    fn paint_record(
        &self,
        run: &BidiRun,
        style: &TextStyle,
        shaped: &ShapedRun,
        range: Range<usize>,
        glyph_x: &[f32],
        origin: f32,
    ) -> PaintRecord {
        let glyphs = &shaped.glyphs[range.clone()];
        let xs = &glyph_x[range];
        let start = xs.iter().copied().fold(f32::MAX, f32::min);
        let end = glyphs
            .iter()
            .zip(xs)
            .map(|(glyph, x)| x + glyph.advance)
            .fold(f32::MIN, f32::max);
        PaintRecord {
            style_index: run.style_index,
            font: glyphs.first().map(|glyph| glyph.font.clone()),
            font_size: style.font_size,
            glyph_ids: glyphs.iter().map(|glyph| glyph.glyph_id).collect(),
            glyph_x: xs.to_vec(),
            x: origin,
            y: 0.0,
            line_number: self.line_number,
            extent: Extent {
                start: origin + start,
                end: origin + end,
            },
            font_metrics: shaped
                .glyphs
                .first()
                .map(|glyph| glyph.font.font.metrics(style.font_size))
                .unwrap_or_default(),
            is_ghost: run.is_ghost(),
            placeholder: None,
        }
    }

    /// Metrics of the paragraph's base font, for lines without runs.
    fn base_metrics(&self, style: &TextStyle) -> Option<FontMetrics> {
        let fonts = self.source.resolve_fonts(style).ok()?;
        let shaper = Shaper::new(&self.source.fonts, &fonts, style)?;
        Some(shaper.metrics())
    }

    fn vertical_metrics(&mut self, extents: &[RunExtent<'_>]) -> VerticalMetrics {
        let strut = self.state.strut;
        let behavior = self.source.style.text_height_behavior;
        let mut vertical = VerticalMetrics {
            ascent: strut.ascent + strut.half_leading,
            descent: strut.descent + strut.half_leading,
            ..VerticalMetrics::default()
        };
        for extent in extents {
            let metrics = extent.metrics;
            let style = extent.style;
            let (mut ascent, mut descent) = if style.has_height_override {
                let metrics_height = metrics.ascent + metrics.descent;
                if metrics_height > 0.0 {
                    let line_height = style.height * style.font_size;
                    (
                        metrics.ascent / metrics_height * line_height,
                        metrics.descent / metrics_height * line_height,
                    )
                } else {
                    (0.0, 0.0)
                }
            } else {
                (
                    metrics.ascent + metrics.leading / 2.0,
                    metrics.descent + metrics.leading / 2.0,
                )
            };
            if self.line_number == 0 && behavior.disable_first_ascent {
                ascent = metrics.ascent;
            }
            if self.line_number + 1 == self.line_limit && behavior.disable_last_descent {
                descent = metrics.descent;
            }
            if let Some(index) = extent.placeholder {
                (ascent, descent) = self.source.placeholders[index].adjust_metrics(ascent, descent);
                self.state.placeholder_baselines[index] = ascent;
            }
            if !strut.force {
                vertical.ascent = vertical.ascent.max(ascent);
                vertical.descent = vertical.descent.max(descent);
            }
            vertical.unscaled_ascent = vertical.unscaled_ascent.max(match extent.placeholder {
                Some(index) => self.state.placeholder_baselines[index],
                None => metrics.ascent,
            });
        }
        vertical
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct VerticalMetrics {
    ascent: f32,
    descent: f32,
    /// Largest font ascent, before height and leading adjustments.
    unscaled_ascent: f32,
}

#[derive(Debug)]
struct Ellipsized {
    /// The kept code units of the run followed by the ellipsis.
    text: Vec<u16>,
    /// Number of code units of the run that were kept.
    kept: usize,
}

impl Ellipsized {
    /// Code units of the run covered by a cluster of the ellipsized text, and whether the cluster
    /// belongs to the ellipsis.
    fn code_units(&self, run: &BidiRun, cluster: &Range<usize>) -> (Range<usize>, bool) {
        let start = run.range.start + cluster.start.min(self.kept);
        let end = if cluster.end > self.kept {
            run.range.end
        } else {
            run.range.start + cluster.end
        };
        (start..end, cluster.start >= self.kept)
    }
}
