// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::TextDirection;

/// Metrics of one laid-out line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineMetrics {
    /// First code unit of the line.
    pub start_index: usize,
    /// One past the last code unit of the line, excluding the line break.
    pub end_index: usize,
    /// Like `end_index`, but without trailing white space.
    pub end_excluding_whitespace: usize,
    /// Like `end_index`, but including the line break.
    pub end_including_newline: usize,
    /// Whether the line ends at a mandatory break, or is the last line of a paragraph that
    /// contains one.
    pub hard_break: bool,
    /// Distance from the top of the line to its baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line.
    pub descent: f32,
    /// The largest ascent of the line's fonts, before height and leading adjustments.
    pub unscaled_ascent: f32,
    /// Distance from the top of the paragraph to the bottom of the line.
    pub height: f32,
    /// Width of the line, excluding trailing white space.
    pub width: f32,
    /// Horizontal offset of the line from the left edge of the paragraph.
    pub left: f32,
    /// Distance from the top of the paragraph to the line's baseline.
    pub baseline: f32,
    /// Index of the line.
    pub line_number: usize,
}

/// A horizontal extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    /// Left edge.
    pub start: f32,
    /// Right edge.
    pub end: f32,
}

impl Extent {
    /// Creates an extent from its left edge and width.
    pub fn new(start: f32, width: f32) -> Self {
        Self {
            start,
            end: start + width,
        }
    }

    /// The width of the extent.
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    pub(crate) fn shift(&mut self, delta: f32) {
        self.start += delta;
        self.end += delta;
    }
}

/// An axis-aligned rectangle, with y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// The height of the rectangle.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A rectangle covering laid-out text, with the direction of that text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    /// The covered area.
    pub rect: Rect,
    /// Direction of the covered text.
    pub direction: TextDirection,
}

impl TextBox {
    /// Creates a box.
    pub fn new(rect: Rect, direction: TextDirection) -> Self {
        Self { rect, direction }
    }
}

/// Which side of a position a caret is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Affinity {
    /// The caret belongs to the character before the position.
    Upstream,
    /// The caret belongs to the character after the position.
    #[default]
    Downstream,
}

/// A code unit offset together with its caret affinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionWithAffinity {
    /// Code unit offset.
    pub position: usize,
    /// Caret affinity.
    pub affinity: Affinity,
}

impl PositionWithAffinity {
    /// Creates a position.
    pub fn new(position: usize, affinity: Affinity) -> Self {
        Self { position, affinity }
    }
}

/// Vertical extent of the boxes returned by [`Paragraph::rects_for_range`].
///
/// [`Paragraph::rects_for_range`]: super::Paragraph::rects_for_range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RectHeightStyle {
    /// The ascent and descent of each run's own font.
    #[default]
    Tight,
    /// From the line's largest font ascent to its descent.
    Max,
    /// Like [`Max`](Self::Max), with the space added by line height split between adjacent
    /// lines.
    IncludeLineSpacingMiddle,
    /// Like [`Max`](Self::Max), with the space added by line height going to the line below it.
    IncludeLineSpacingTop,
    /// Like [`Max`](Self::Max), with the space added by line height going to the line above it.
    IncludeLineSpacingBottom,
    /// The strut ascent and descent, or [`Tight`](Self::Tight) when there is no strut.
    Strut,
}

/// Horizontal extent of the boxes returned by [`Paragraph::rects_for_range`].
///
/// [`Paragraph::rects_for_range`]: super::Paragraph::rects_for_range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RectWidthStyle {
    /// Boxes cover only the selected glyphs.
    #[default]
    Tight,
    /// Lines that are not the widest get an extra box reaching to the widest line's edge.
    Max,
}
