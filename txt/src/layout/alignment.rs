// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::{ParagraphStyle, TextAlign, TextDirection};

/// Horizontal offset of a line with the given advance.
///
/// Lines of a paragraph laid out at infinite width are never shifted. A justified line that is
/// not stretched (the last line of a block, or a line with a single word) is start-aligned.
pub(crate) fn line_x_offset(
    style: &ParagraphStyle,
    width: f32,
    line_advance: f32,
    justify_line: bool,
) -> f32 {
    if width.is_infinite() {
        return 0.0;
    }
    let free_space = width - line_advance;
    match style.effective_align() {
        TextAlign::Right => free_space,
        TextAlign::Justify if style.text_direction == TextDirection::Rtl && !justify_line => {
            free_space
        }
        TextAlign::Center => free_space / 2.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(text_align: TextAlign, text_direction: TextDirection) -> ParagraphStyle {
        ParagraphStyle {
            text_align,
            text_direction,
            ..ParagraphStyle::default()
        }
    }

    #[test]
    fn offsets_follow_alignment() {
        let ltr = TextDirection::Ltr;
        assert_eq!(line_x_offset(&style(TextAlign::Left, ltr), 100.0, 40.0, false), 0.0);
        assert_eq!(line_x_offset(&style(TextAlign::Right, ltr), 100.0, 40.0, false), 60.0);
        assert_eq!(line_x_offset(&style(TextAlign::Center, ltr), 100.0, 40.0, false), 30.0);
        assert_eq!(line_x_offset(&style(TextAlign::End, ltr), 100.0, 40.0, false), 60.0);
        assert_eq!(line_x_offset(&style(TextAlign::Justify, ltr), 100.0, 40.0, false), 0.0);
    }

    #[test]
    fn rtl_justified_lines_that_are_not_stretched_align_right() {
        let justify = style(TextAlign::Justify, TextDirection::Rtl);
        assert_eq!(line_x_offset(&justify, 100.0, 40.0, false), 60.0);
        assert_eq!(line_x_offset(&justify, 100.0, 40.0, true), 0.0);
        let start = style(TextAlign::Start, TextDirection::Rtl);
        assert_eq!(line_x_offset(&start, 100.0, 40.0, false), 60.0);
    }

    #[test]
    fn infinite_width_is_never_shifted() {
        let right = style(TextAlign::Right, TextDirection::Ltr);
        assert_eq!(line_x_offset(&right, f32::INFINITY, 40.0, false), 0.0);
    }
}
