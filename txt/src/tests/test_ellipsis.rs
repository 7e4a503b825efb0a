// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::TestEnv;
use crate::ParagraphStyle;

#[test]
fn max_lines_drops_the_rest() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        max_lines: Some(2),
        ..env.paragraph_style()
    };
    let paragraph = env.layout("aa bb cc", style, 25.0);

    assert_eq!(paragraph.line_count(), 2);
    assert!(paragraph.did_exceed_max_lines());
    assert_eq!(paragraph.height(), 20.0);
    assert!(paragraph
        .code_unit_runs()
        .iter()
        .all(|run| run.code_units.end <= 6));
}

#[test]
fn fitting_text_does_not_exceed_max_lines() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        max_lines: Some(3),
        ..env.paragraph_style()
    };
    let paragraph = env.layout("aa bb cc", style, 25.0);
    assert_eq!(paragraph.line_count(), 3);
    assert!(!paragraph.did_exceed_max_lines());
}

#[test]
fn last_visible_line_is_ellipsized() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        max_lines: Some(1),
        ellipsis: "\u{2026}".into(),
        ..env.paragraph_style()
    };
    let paragraph = env.layout("abcd efgh", style, 45.0);

    assert_eq!(paragraph.line_count(), 1);
    assert!(paragraph.did_exceed_max_lines());
    let runs = paragraph.code_unit_runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].code_units, 0..5);
    assert_eq!((runs[0].x.start, runs[0].x.end), (0.0, 40.0));
    let positions: Vec<_> = runs[0]
        .positions
        .iter()
        .map(|position| (position.code_units.clone(), position.x.start))
        .collect();
    assert_eq!(
        positions,
        vec![(0..1, 0.0), (1..2, 10.0), (2..3, 20.0), (3..5, 30.0)]
    );
    assert_eq!(
        paragraph.paint_records()[0].glyph_ids,
        vec![0x61, 0x62, 0x63, 0x2026]
    );
    assert_eq!(paragraph.min_intrinsic_width(), paragraph.max_intrinsic_width());
}

#[test]
fn unlimited_lines_stop_at_the_first_ellipsis() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        ellipsis: "\u{2026}".into(),
        ..env.paragraph_style()
    };
    let paragraph = env.layout("abcd efgh ijkl", style, 45.0);

    assert_eq!(paragraph.line_count(), 1);
    assert!(paragraph.did_exceed_max_lines());
    assert_eq!(paragraph.longest_line(), 40.0);
    assert_eq!(paragraph.min_intrinsic_width(), paragraph.max_intrinsic_width());
}

#[test]
fn ellipsis_is_not_added_before_a_line_feed() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        max_lines: Some(1),
        ellipsis: "\u{2026}".into(),
        ..env.paragraph_style()
    };
    let paragraph = env.layout("ab\ncd", style, 100.0);

    assert_eq!(paragraph.line_count(), 1);
    assert!(paragraph.did_exceed_max_lines());
    assert_eq!(paragraph.paint_records()[0].glyph_ids, vec![0x61, 0x62]);
}
