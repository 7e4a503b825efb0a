// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a paragraph into lines.

use super::source::Source;
use super::LineMetrics;
use crate::line_break::BreakOptions;
use crate::shape::Shaper;
use crate::style::TextAlign;
use crate::util;
use crate::word;
use crate::Error;

/// A line before it is laid out.
#[derive(Clone, Debug)]
pub(super) struct BrokenLine {
    pub(super) metrics: LineMetrics,
    /// Whether the line is the last of its block, that is, followed by a mandatory break or the
    /// end of the text.
    pub(super) ends_block: bool,
}

#[derive(Clone, Debug, Default)]
pub(super) struct BrokenText {
    pub(super) lines: Vec<BrokenLine>,
    pub(super) max_intrinsic_width: f32,
    /// Width of the widest word.
    pub(super) max_word_width: f32,
}

/// Breaks the text into blocks at mandatory breaks and each block into lines of at most
/// `width`.
pub(super) fn break_lines(source: &Source, width: f32) -> Result<BrokenText, Error> {
    let text = &source.text;
    let mut block_ends: Vec<usize> = (0..text.len())
        .filter(|&index| util::is_hard_break(text[index]))
        .collect();
    let has_mandatory_break = !block_ends.is_empty();
    block_ends.push(text.len());

    let options = BreakOptions {
        width,
        strategy: source.style.break_strategy,
        justified: source.style.text_align == TextAlign::Justify,
    };
    let mut broken = BrokenText::default();
    let mut block_start = 0;
    for block_end in block_ends {
        let start = block_start;
        block_start = block_end + 1;
        if start == block_end {
            broken.lines.push(BrokenLine {
                metrics: LineMetrics {
                    start_index: start,
                    end_index: block_end,
                    end_excluding_whitespace: block_end,
                    end_including_newline: (block_end + 1).min(text.len()),
                    hard_break: block_end < text.len() || has_mandatory_break,
                    ..LineMetrics::default()
                },
                ends_block: true,
            });
            continue;
        }

        let widths = measure_block(source, start, block_end)?;
        let block_width: f32 = widths.iter().sum();
        broken.max_intrinsic_width = broken.max_intrinsic_width.max(block_width);
        for word in word::find_words(text, start..block_end) {
            let word_width: f32 = widths[word.start - start..word.end - start].iter().sum();
            broken.max_word_width = broken.max_word_width.max(word_width);
        }

        let breaks = source
            .context
            .line_breaker
            .compute_breaks(&text[start..block_end], &widths, &options);
        log::trace!(
            "block {start}..{block_end} broken at {:?}",
            breaks.iter().map(|line| line.offset).collect::<Vec<_>>()
        );
        let mut line_start = start;
        let count = breaks.len();
        for (index, line_break) in breaks.into_iter().enumerate() {
            let line_end = (start + line_break.offset).min(block_end);
            let ends_block = index + 1 == count;
            let mut end_excluding_whitespace = line_end;
            while end_excluding_whitespace > line_start
                && util::is_line_end_space(text[end_excluding_whitespace - 1])
            {
                end_excluding_whitespace -= 1;
            }
            let end_including_newline = if ends_block && line_end < text.len() {
                line_end + 1
            } else {
                line_end
            };
            broken.lines.push(BrokenLine {
                metrics: LineMetrics {
                    start_index: line_start,
                    end_index: line_end,
                    end_excluding_whitespace,
                    end_including_newline,
                    hard_break: ends_block && (line_end < text.len() || has_mandatory_break),
                    width: line_break.width,
                    ..LineMetrics::default()
                },
                ends_block,
            });
            line_start = line_end;
        }
    }
    Ok(broken)
}

/// Advances of every code unit of `start..end`. Placeholders advance by their width.
fn measure_block(source: &Source, start: usize, end: usize) -> Result<Vec<f32>, Error> {
    let mut widths = vec![0.0; end - start];
    for run in source.runs.runs() {
        let run_start = run.start.max(start);
        let run_end = run.end.min(end);
        if run_start >= run_end {
            continue;
        }
        let fonts = source.resolve_fonts(run.style)?;
        let shaper = Shaper::new(&source.fonts, &fonts, run.style)
            .ok_or_else(|| source.font_error(run.style))?;
        let mut segment_start = run_start;
        for index in run_start..=run_end {
            let placeholder = if index < run_end {
                source.placeholder_at(index)
            } else {
                None
            };
            if placeholder.is_none() && index < run_end {
                continue;
            }
            if segment_start < index {
                let shaped = shaper.shape(&source.text, segment_start..index, false);
                widths[segment_start - start..index - start].copy_from_slice(&shaped.advances);
            }
            if let Some(placeholder) = placeholder {
                widths[index - start] = source.placeholders[placeholder].width;
            }
            segment_start = index + 1;
        }
    }
    Ok(widths)
}
