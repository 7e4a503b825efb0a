// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional ordering of a paragraph into directional, single-style runs.

use core::ops::Range;

use unicode_bidi::utf16::BidiInfo;
use unicode_bidi::Level;

use crate::style::TextDirection;
use crate::styled_runs::StyledRunTable;
use crate::util;
use crate::Error;

/// A maximal run of one direction, as produced by a [`BidiResolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualRun {
    /// Code units covered by the run.
    pub range: Range<usize>,
    /// Resolved direction of the run.
    pub direction: TextDirection,
}

/// Orders a paragraph into directional runs.
pub trait BidiResolver: Send + Sync {
    /// Returns the runs of `text` in visual order, left to right, for a paragraph with the given
    /// base direction. Every code unit belongs to exactly one run.
    fn resolve(&self, text: &[u16], base: TextDirection) -> Result<Vec<VisualRun>, Error>;
}

/// [`BidiResolver`] implementing the Unicode Bidirectional Algorithm with `unicode-bidi`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeBidiResolver;

impl BidiResolver for UnicodeBidiResolver {
    fn resolve(&self, text: &[u16], base: TextDirection) -> Result<Vec<VisualRun>, Error> {
        let level = match base {
            TextDirection::Ltr => Level::ltr(),
            TextDirection::Rtl => Level::rtl(),
        };
        let info = BidiInfo::new(text, Some(level));
        let mut runs = Vec::new();
        for paragraph in &info.paragraphs {
            let (levels, level_runs) = info.visual_runs(paragraph, paragraph.range.clone());
            for range in level_runs {
                let direction = if levels[range.start].is_rtl() {
                    TextDirection::Rtl
                } else {
                    TextDirection::Ltr
                };
                runs.push(VisualRun { range, direction });
            }
        }
        Ok(runs)
    }
}

/// What a laid-out run represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RunKind {
    /// Ordinary text.
    Text,
    /// Trailing white space that is laid out but does not affect alignment or width.
    Ghost,
    /// The stand-in code unit of the placeholder with the given index.
    Placeholder(usize),
}

/// A directional run restricted to a single style.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BidiRun {
    pub(crate) range: Range<usize>,
    pub(crate) direction: TextDirection,
    pub(crate) style_index: usize,
    pub(crate) kind: RunKind,
}

impl BidiRun {
    pub(crate) fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    pub(crate) fn is_ghost(&self) -> bool {
        self.kind == RunKind::Ghost
    }
}

/// Splits the paragraph into visually ordered runs of one direction and one style.
///
/// Bidi controls at either end of a directional run are excluded, runs left empty are dropped,
/// and when the last visual run is a single white space character logically following the run
/// before it, the two are merged so that a trailing space typed at the end of a paragraph stays
/// attached to the preceding text.
pub(crate) fn resolve_runs(
    resolver: &dyn BidiResolver,
    text: &[u16],
    base: TextDirection,
    styled_runs: &StyledRunTable,
) -> Result<Vec<BidiRun>, Error> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let visual = resolver.resolve(text, base)?;
    let count = visual.len();

    let ambiguous_trailing_whitespace = count > 1
        && visual.last().is_some_and(|last| {
            last.range.len() == 1
                && util::char_at(text, last.range.start).is_some_and(util::is_white_space)
        });

    let mut result = Vec::new();
    let mut merged_trailing_whitespace = false;
    for (index, run) in visual.iter().enumerate() {
        if merged_trailing_whitespace && index == count - 1 {
            break;
        }
        let mut range = run.range.clone();
        if util::char_at(text, range.start).is_some_and(util::is_bidi_control) {
            range.start += 1;
        }
        if range.is_empty() {
            continue;
        }
        if util::char_at(text, range.end - 1).is_some_and(util::is_bidi_control) {
            range.end -= 1;
        }
        if range.is_empty() {
            continue;
        }
        if ambiguous_trailing_whitespace
            && index == count - 2
            && visual[count - 1].range.start == range.end
        {
            range.end += 1;
            merged_trailing_whitespace = true;
        }

        let mut chunks = Vec::new();
        let mut start = range.start;
        while start < range.end {
            let styled = styled_runs
                .run_containing(start)
                .ok_or_else(|| Error::uncovered_text(start))?;
            let end = range.end.min(styled.end);
            chunks.push(BidiRun {
                range: start..end,
                direction: run.direction,
                style_index: styled.style_index,
                kind: RunKind::Text,
            });
            start = end;
        }
        if run.direction.is_rtl() {
            chunks.reverse();
        }
        result.append(&mut chunks);
    }
    Ok(result)
}
