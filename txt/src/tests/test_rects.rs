// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::TestEnv;
use crate::{
    Paragraph, ParagraphStyle, Rect, RectHeightStyle, RectWidthStyle, TextBox, TextDirection,
};

fn rects(paragraph: &Paragraph, start: usize, end: usize, height: RectHeightStyle) -> Vec<Rect> {
    paragraph
        .rects_for_range(start, end, height, RectWidthStyle::Tight)
        .iter()
        .map(|text_box| text_box.rect)
        .collect()
}

/// "ab\ncd" with a line height of twice the font size.
fn tall_lines(env: &TestEnv) -> Paragraph {
    let mut builder = env.builder(env.paragraph_style());
    builder.push_style(&crate::TextStyle {
        height: 2.0,
        has_height_override: true,
        ..env.text_style(10.0)
    });
    builder.add_text("ab\ncd");
    let mut paragraph = builder.build();
    paragraph.layout(100.0).unwrap();
    paragraph
}

#[test]
fn whole_and_partial_runs() {
    let env = TestEnv::new();
    let paragraph = env.layout("ab cd", env.paragraph_style(), 100.0);

    assert_eq!(
        rects(&paragraph, 0, 5, RectHeightStyle::Tight),
        vec![Rect::new(0.0, 0.0, 50.0, 10.0)]
    );
    assert_eq!(
        rects(&paragraph, 1, 4, RectHeightStyle::Tight),
        vec![Rect::new(10.0, 0.0, 40.0, 10.0)]
    );
    assert!(rects(&paragraph, 5, 5, RectHeightStyle::Tight).is_empty());
    assert!(rects(&paragraph, 7, 9, RectHeightStyle::Tight).is_empty());
}

#[test]
fn selecting_a_combining_mark_selects_its_cluster() {
    let env = TestEnv::new();
    let paragraph = env.layout("xe\u{301}y", env.paragraph_style(), 100.0);

    assert_eq!(
        rects(&paragraph, 2, 3, RectHeightStyle::Tight),
        vec![Rect::new(10.0, 0.0, 20.0, 10.0)]
    );
    assert_eq!(
        rects(&paragraph, 1, 3, RectHeightStyle::Tight),
        vec![Rect::new(10.0, 0.0, 20.0, 10.0)]
    );
    // A range ending inside the cluster selects nothing of it.
    assert_eq!(
        rects(&paragraph, 0, 2, RectHeightStyle::Tight),
        vec![Rect::new(0.0, 0.0, 10.0, 10.0)]
    );
}

#[test]
fn line_feeds_get_a_zero_width_box() {
    let env = TestEnv::new();
    let paragraph = env.layout("ab\ncd", env.paragraph_style(), 100.0);

    assert_eq!(
        rects(&paragraph, 0, 5, RectHeightStyle::Tight),
        vec![
            Rect::new(0.0, 0.0, 20.0, 10.0),
            Rect::new(20.0, 0.0, 20.0, 10.0),
            Rect::new(0.0, 10.0, 20.0, 20.0),
        ]
    );
}

#[test]
fn empty_lines_get_a_box_at_their_start() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        text_align: crate::TextAlign::Center,
        ..env.paragraph_style()
    };
    let paragraph = env.layout("ab\n\ncd", style, 100.0);

    let boxes = rects(&paragraph, 3, 4, RectHeightStyle::Tight);
    assert_eq!(boxes, vec![Rect::new(50.0, 10.0, 50.0, 20.0)]);
}

#[test]
fn height_styles() {
    let env = TestEnv::new();
    let paragraph = tall_lines(&env);
    let lines = paragraph.line_metrics();
    assert_eq!((lines[0].baseline, lines[0].height), (16.0, 20.0));
    assert_eq!((lines[1].baseline, lines[1].height), (36.0, 40.0));

    let vertical = |height| {
        let boxes = rects(&paragraph, 0, 5, height);
        assert_eq!(boxes.len(), 3);
        ((boxes[0].top, boxes[0].bottom), (boxes[2].top, boxes[2].bottom))
    };
    assert_eq!(
        vertical(RectHeightStyle::Tight),
        ((8.0, 18.0), (28.0, 38.0))
    );
    assert_eq!(vertical(RectHeightStyle::Max), ((8.0, 20.0), (28.0, 40.0)));
    assert_eq!(
        vertical(RectHeightStyle::IncludeLineSpacingMiddle),
        ((8.0, 24.0), (24.0, 40.0))
    );
    assert_eq!(
        vertical(RectHeightStyle::IncludeLineSpacingTop),
        ((8.0, 20.0), (20.0, 40.0))
    );
    assert_eq!(
        vertical(RectHeightStyle::IncludeLineSpacingBottom),
        ((8.0, 28.0), (28.0, 40.0))
    );
    // Without a strut, boxes stay tight.
    assert_eq!(
        vertical(RectHeightStyle::Strut),
        ((8.0, 18.0), (28.0, 38.0))
    );
}

#[test]
fn height_styles_keep_horizontal_extents() {
    let env = TestEnv::new();
    let paragraph = tall_lines(&env);
    let horizontal = |height| {
        rects(&paragraph, 1, 4, height)
            .iter()
            .map(|rect| (rect.left, rect.right))
            .collect::<Vec<_>>()
    };
    let tight = horizontal(RectHeightStyle::Tight);
    assert_eq!(tight, vec![(10.0, 20.0), (20.0, 20.0), (0.0, 10.0)]);
    for height in [
        RectHeightStyle::Max,
        RectHeightStyle::IncludeLineSpacingMiddle,
        RectHeightStyle::IncludeLineSpacingTop,
        RectHeightStyle::IncludeLineSpacingBottom,
    ] {
        assert_eq!(horizontal(height), tight, "{height:?}");
    }
}

#[test]
fn max_width_extends_short_lines() {
    let env = TestEnv::new();
    let paragraph = env.layout("a bbbbb cc", env.paragraph_style(), 60.0);
    assert_eq!(paragraph.line_count(), 3);

    let boxes = paragraph.rects_for_range(0, 10, RectHeightStyle::Tight, RectWidthStyle::Max);
    assert_eq!(
        boxes,
        vec![
            TextBox::new(Rect::new(0.0, 0.0, 20.0, 10.0), TextDirection::Ltr),
            TextBox::new(Rect::new(20.0, 0.0, 60.0, 10.0), TextDirection::Ltr),
            TextBox::new(Rect::new(0.0, 10.0, 60.0, 20.0), TextDirection::Ltr),
            TextBox::new(Rect::new(0.0, 20.0, 20.0, 30.0), TextDirection::Ltr),
        ]
    );
}

#[test]
fn rtl_boxes_carry_their_direction() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        text_direction: TextDirection::Rtl,
        ..env.paragraph_style()
    };
    let paragraph = env.layout("\u{5d0}\u{5d1}\u{5d2}", style, 100.0);

    let boxes = paragraph.rects_for_range(0, 1, RectHeightStyle::Tight, RectWidthStyle::Tight);
    assert_eq!(
        boxes,
        vec![TextBox::new(
            Rect::new(90.0, 0.0, 100.0, 10.0),
            TextDirection::Rtl
        )]
    );
}
