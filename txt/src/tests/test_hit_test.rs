// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::TestEnv;
use crate::{Affinity, ParagraphStyle, PositionWithAffinity, TextDirection};

fn downstream(position: usize) -> PositionWithAffinity {
    PositionWithAffinity::new(position, Affinity::Downstream)
}

fn upstream(position: usize) -> PositionWithAffinity {
    PositionWithAffinity::new(position, Affinity::Upstream)
}

#[test]
fn hits_the_nearest_glyph_edge() {
    let env = TestEnv::new();
    let paragraph = env.layout("ab cd", env.paragraph_style(), 100.0);

    assert_eq!(paragraph.glyph_position_at_coordinate(14.0, 5.0), downstream(1));
    assert_eq!(paragraph.glyph_position_at_coordinate(16.0, 5.0), upstream(2));
    assert_eq!(paragraph.glyph_position_at_coordinate(-5.0, 5.0), downstream(0));
    assert_eq!(paragraph.glyph_position_at_coordinate(200.0, 5.0), upstream(5));
    assert_eq!(paragraph.glyph_position_at_coordinate(14.0, -20.0), downstream(1));
}

#[test]
fn lines_are_chosen_by_height() {
    let env = TestEnv::new();
    let paragraph = env.layout("ab\ncd", env.paragraph_style(), 100.0);

    assert_eq!(paragraph.glyph_position_at_coordinate(2.0, 5.0), downstream(0));
    assert_eq!(paragraph.glyph_position_at_coordinate(2.0, 15.0), downstream(3));
    assert_eq!(paragraph.glyph_position_at_coordinate(7.0, 15.0), upstream(4));
    assert_eq!(paragraph.glyph_position_at_coordinate(2.0, 500.0), downstream(3));
}

#[test]
fn empty_lines_hit_their_start() {
    let env = TestEnv::new();
    let paragraph = env.layout("ab\n\ncd", env.paragraph_style(), 100.0);
    assert_eq!(paragraph.glyph_position_at_coordinate(50.0, 15.0), downstream(3));
}

#[test]
fn rtl_glyphs_are_mirrored() {
    let env = TestEnv::new();
    let style = ParagraphStyle {
        text_direction: TextDirection::Rtl,
        ..env.paragraph_style()
    };
    let paragraph = env.layout("\u{5d0}\u{5d1}\u{5d2}", style, 100.0);

    assert_eq!(paragraph.glyph_position_at_coordinate(97.0, 5.0), downstream(0));
    assert_eq!(paragraph.glyph_position_at_coordinate(92.0, 5.0), upstream(1));
    assert_eq!(paragraph.glyph_position_at_coordinate(75.0, 5.0), downstream(2));
}

#[test]
fn clusters_are_hit_as_a_whole() {
    let env = TestEnv::new();
    let paragraph = env.layout("xe\u{301}y", env.paragraph_style(), 100.0);

    assert_eq!(paragraph.glyph_position_at_coordinate(12.0, 5.0), downstream(1));
    assert_eq!(paragraph.glyph_position_at_coordinate(18.0, 5.0), upstream(3));
}

#[test]
fn unlaid_paragraph_hits_the_start() {
    let env = TestEnv::new();
    let paragraph = env.paragraph("abc", env.paragraph_style());
    assert_eq!(paragraph.glyph_position_at_coordinate(50.0, 5.0), downstream(0));
}
