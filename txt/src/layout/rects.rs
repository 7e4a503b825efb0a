// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection and placeholder boxes.

use super::alignment::line_x_offset;
use super::engine::LayoutState;
use super::source::Source;
use super::{CodeUnitRun, LineMetrics, Rect, RectHeightStyle, RectWidthStyle, TextBox};
use crate::style::TextDirection;

#[derive(Debug)]
struct LineBoxes {
    boxes: Vec<TextBox>,
    min_left: f32,
    max_right: f32,
}

impl Default for LineBoxes {
    fn default() -> Self {
        Self {
            boxes: Vec::new(),
            min_left: f32::MAX,
            max_right: f32::MIN,
        }
    }
}

/// Vertical extent of a placeholder run.
fn placeholder_extent(source: &Source, state: &LayoutState, index: usize, baseline: f32) -> (f32, f32) {
    let offset = state.placeholder_baselines[index];
    let height = source.placeholders[index].height;
    (baseline - offset, baseline + height - offset)
}

/// Horizontal extent of the glyphs of `run` inside `start..end`.
///
/// A cluster ending at `end` is included when `start` falls inside it, so that a range covering
/// only the trailing code units of a cluster still selects the cluster.
fn selected_extent(run: &CodeUnitRun, start: usize, end: usize) -> Option<(f32, f32)> {
    if run.code_units.start >= start && run.code_units.end <= end {
        return Some((run.x.start, run.x.end));
    }
    let mut left = f32::MAX;
    let mut right = f32::MIN;
    for position in &run.positions {
        let units = &position.code_units;
        let selected = if units.start >= start && units.end <= end {
            true
        } else if units.end == end {
            let trailing = units.len().saturating_sub(1);
            units.start == start.saturating_sub(trailing)
        } else {
            false
        };
        if selected {
            left = left.min(position.x.start);
            right = right.max(position.x.end);
        }
    }
    (left != f32::MAX && right != f32::MIN).then_some((left, right))
}

pub(crate) fn rects_for_range(
    source: &Source,
    state: &LayoutState,
    width: f32,
    start: usize,
    end: usize,
    height_style: RectHeightStyle,
    width_style: RectWidthStyle,
) -> Vec<TextBox> {
    let lines = &state.lines;
    let mut per_line: Vec<Option<LineBoxes>> = lines.iter().map(|_| None).collect();
    let mut line_end_x: Vec<Option<f32>> = vec![None; lines.len()];
    let mut min_line = usize::MAX;
    let mut max_line = 0;
    let mut first_line_direction = TextDirection::Ltr;

    for run in &state.code_unit_runs {
        if run.code_units.start >= end {
            break;
        }
        let Some(line) = lines.get(run.line_number) else {
            continue;
        };
        line_end_x[run.line_number] = Some(match run.direction {
            TextDirection::Ltr => run.x.end,
            TextDirection::Rtl => run.x.start,
        });
        if run.code_units.end <= start {
            continue;
        }
        let baseline = line.baseline;
        let (top, bottom) = match run.placeholder {
            Some(index) => placeholder_extent(source, state, index, baseline),
            None => (
                baseline - run.font_metrics.ascent,
                baseline + run.font_metrics.descent,
            ),
        };
        max_line = max_line.max(run.line_number);
        min_line = min_line.min(run.line_number);
        let Some((left, right)) = selected_extent(run, start, end) else {
            continue;
        };
        let line_boxes = per_line[run.line_number].get_or_insert_with(LineBoxes::default);
        line_boxes.boxes.push(TextBox::new(
            Rect::new(left, top, right, bottom),
            run.direction,
        ));
        line_boxes.min_left = line_boxes.min_left.min(left);
        line_boxes.max_right = line_boxes.max_right.max(right);
        if min_line == run.line_number {
            first_line_direction = run.direction;
        }
    }

    // Line breaks inside the range.
    for (line_number, line) in lines.iter().enumerate() {
        if line.start_index >= end {
            break;
        }
        if line.end_including_newline <= start {
            continue;
        }
        if line.end_index != line.end_including_newline
            && line.end_index >= start
            && line.end_including_newline <= end
        {
            let x = line_end_x[line_number]
                .unwrap_or_else(|| line_x_offset(&source.style, width, 0.0, false));
            let top = line_number
                .checked_sub(1)
                .map_or(0.0, |previous| lines[previous].height);
            per_line[line_number]
                .get_or_insert_with(LineBoxes::default)
                .boxes
                .push(TextBox::new(
                    Rect::new(x, top, x, line.height),
                    TextDirection::Ltr,
                ));
        }
    }

    let mut boxes = Vec::new();
    for (line_number, line_boxes) in per_line.into_iter().enumerate() {
        let Some(mut line_boxes) = line_boxes else {
            continue;
        };
        let line = &lines[line_number];
        // The last selected line is not extended, as its selection may stop before its end.
        if width_style == RectWidthStyle::Max && line_number != max_line {
            let top = line.baseline - line.unscaled_ascent;
            let bottom = line.baseline + line.descent;
            if line_boxes.min_left > state.min_left
                && (line_number != min_line || first_line_direction == TextDirection::Rtl)
            {
                let right = line_boxes.min_left;
                line_boxes.boxes.push(TextBox::new(
                    Rect::new(state.min_left, top, right, bottom),
                    TextDirection::Rtl,
                ));
            }
            if line_boxes.max_right < state.max_right
                && (line_number != min_line || first_line_direction == TextDirection::Ltr)
            {
                let left = line_boxes.max_right;
                line_boxes.boxes.push(TextBox::new(
                    Rect::new(left, top, state.max_right, bottom),
                    TextDirection::Ltr,
                ));
            }
        }

        let vertical = match height_style {
            RectHeightStyle::Tight => None,
            RectHeightStyle::Max => Some((
                line.baseline - line.unscaled_ascent,
                line.baseline + line.descent,
            )),
            RectHeightStyle::IncludeLineSpacingMiddle => {
                let mut top = line.baseline - line.unscaled_ascent;
                if line_number != 0 {
                    top -= (line.ascent - line.unscaled_ascent) / 2.0;
                }
                let mut bottom = line.baseline + line.descent;
                if let Some(next) = lines.get(line_number + 1) {
                    bottom += extra_ascent(next) / 2.0;
                }
                Some((top, bottom))
            }
            RectHeightStyle::IncludeLineSpacingTop => {
                let top = if line_number == 0 {
                    line.baseline - line.unscaled_ascent
                } else {
                    line.baseline - line.ascent
                };
                Some((top, line.baseline + line.descent))
            }
            RectHeightStyle::IncludeLineSpacingBottom => {
                let mut bottom = line.baseline + line.descent;
                if let Some(next) = lines.get(line_number + 1) {
                    bottom += extra_ascent(next);
                }
                Some((line.baseline - line.unscaled_ascent, bottom))
            }
            RectHeightStyle::Strut => state.strut.valid.then(|| {
                (
                    line.baseline - state.strut.ascent,
                    line.baseline + state.strut.descent,
                )
            }),
        };
        boxes.extend(line_boxes.boxes.into_iter().map(|mut text_box| {
            if let Some((top, bottom)) = vertical {
                text_box.rect.top = top;
                text_box.rect.bottom = bottom;
            }
            text_box
        }));
    }
    boxes
}

/// Space a line's height and leading add above its tallest font.
fn extra_ascent(line: &LineMetrics) -> f32 {
    line.ascent - line.unscaled_ascent
}

pub(crate) fn rects_for_placeholders(source: &Source, state: &LayoutState) -> Vec<TextBox> {
    state
        .placeholder_runs
        .iter()
        .filter_map(|run| {
            let index = run.placeholder?;
            let baseline = state.lines.get(run.line_number)?.baseline;
            let (top, bottom) = placeholder_extent(source, state, index, baseline);
            Some(TextBox::new(
                Rect::new(run.x.start, top, run.x.end, bottom),
                run.direction,
            ))
        })
        .collect()
}
