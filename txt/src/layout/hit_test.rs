// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::engine::LayoutState;
use super::{Affinity, GlyphPosition, PositionWithAffinity};
use crate::style::TextDirection;

/// The glyph under `x`, and whether it was moved back to the start of its cluster.
///
/// Positions that share code units belong to one cluster; a hit on any but the first of them
/// is attributed to the first.
fn glyph_at(positions: &[GlyphPosition], x: f32) -> Option<(&GlyphPosition, bool)> {
    let mut cluster_start: Option<&GlyphPosition> = None;
    for position in positions {
        let continues_cluster =
            cluster_start.is_some_and(|start| start.code_units == position.code_units);
        if !continues_cluster {
            cluster_start = Some(position);
        }
        if x < position.x.end {
            let start = cluster_start.unwrap_or(position);
            return Some((start, !core::ptr::eq(start, position)));
        }
    }
    None
}

pub(crate) fn glyph_position_at_coordinate(
    state: &LayoutState,
    x: f32,
    y: f32,
) -> PositionWithAffinity {
    let Some(last_line) = state.lines.len().checked_sub(1) else {
        return PositionWithAffinity::default();
    };
    let line_number = state
        .lines
        .iter()
        .take(last_line)
        .position(|line| y < line.height)
        .unwrap_or(last_line);
    let line_start = state.lines[line_number].start_index;
    let Some(glyph_line) = state.glyph_lines.get(line_number) else {
        return PositionWithAffinity::new(line_start, Affinity::Downstream);
    };
    let positions = &glyph_line.positions;
    let Some(last) = positions.last() else {
        return PositionWithAffinity::new(line_start, Affinity::Downstream);
    };
    let Some((glyph, corrected)) = glyph_at(positions, x) else {
        return PositionWithAffinity::new(last.code_units.end, Affinity::Upstream);
    };

    let direction = state
        .code_unit_runs
        .iter()
        .find(|run| {
            glyph.code_units.start >= run.code_units.start
                && glyph.code_units.end <= run.code_units.end
        })
        .map_or(TextDirection::Ltr, |run| run.direction);
    let center = (glyph.x.start + glyph.x.end) / 2.0;
    let before = match direction {
        TextDirection::Ltr => x < center,
        TextDirection::Rtl => x >= center,
    };
    if corrected || before {
        PositionWithAffinity::new(glyph.code_units.start, Affinity::Downstream)
    } else {
        PositionWithAffinity::new(glyph.code_units.end, Affinity::Upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(clusters: &[(usize, usize, f32, f32)]) -> Vec<GlyphPosition> {
        clusters
            .iter()
            .map(|&(start, end, x, advance)| GlyphPosition::new(start..end, x, advance))
            .collect()
    }

    #[test]
    fn finds_the_first_glyph_ending_after_x() {
        let line = positions(&[(0, 1, 0.0, 10.0), (1, 2, 10.0, 10.0), (2, 3, 20.0, 10.0)]);
        let (glyph, corrected) = glyph_at(&line, 15.0).unwrap();
        assert_eq!(glyph.code_units, 1..2);
        assert!(!corrected);
        assert_eq!(glyph_at(&line, -5.0).unwrap().0.code_units, 0..1);
        assert!(glyph_at(&line, 30.0).is_none());
    }

    #[test]
    fn later_glyphs_of_a_cluster_resolve_to_its_start() {
        let line = positions(&[(0, 1, 0.0, 10.0), (1, 3, 10.0, 5.0), (1, 3, 15.0, 5.0)]);
        let (glyph, corrected) = glyph_at(&line, 17.0).unwrap();
        assert_eq!(glyph.x.start, 10.0);
        assert!(corrected);
        let (glyph, corrected) = glyph_at(&line, 12.0).unwrap();
        assert_eq!(glyph.x.start, 10.0);
        assert!(!corrected);
    }

    #[test]
    fn empty_layout_hits_the_start() {
        let state = LayoutState::default();
        assert_eq!(
            glyph_position_at_coordinate(&state, 10.0, 10.0),
            PositionWithAffinity::new(0, Affinity::Downstream)
        );
    }
}
