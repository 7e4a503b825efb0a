// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping text to positioned glyphs, one grapheme cluster at a time.

use core::ops::Range;

use icu_segmenter::GraphemeClusterSegmenter;
use smallvec::SmallVec;

use crate::font::{FakedFont, FontCollection, FontMetrics, GlyphId, ResolvedFonts};
use crate::style::{FontStyle, TextStyle};
use crate::util;

/// A glyph placed along a shaped run.
#[derive(Clone, Debug)]
pub(crate) struct ShapedGlyph {
    pub(crate) glyph_id: GlyphId,
    pub(crate) font: FakedFont,
    /// Offset from the start of the run.
    pub(crate) x: f32,
    pub(crate) advance: f32,
}

/// A grapheme cluster of a shaped run.
#[derive(Clone, Debug)]
pub(crate) struct ShapedCluster {
    /// Code units of the cluster.
    pub(crate) text_range: Range<usize>,
    /// Glyphs of the cluster, indexing [`ShapedRun::glyphs`].
    pub(crate) glyph_range: Range<usize>,
    /// Offset from the start of the run.
    pub(crate) x: f32,
    /// Advance, including letter and word spacing.
    pub(crate) advance: f32,
}

/// Glyphs and clusters of a run, in visual order.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShapedRun {
    pub(crate) glyphs: Vec<ShapedGlyph>,
    pub(crate) clusters: Vec<ShapedCluster>,
    /// Advance of each code unit of the shaped range, in logical order. A cluster's advance is
    /// attributed to its first code unit.
    pub(crate) advances: Vec<f32>,
    pub(crate) advance: f32,
}

impl ShapedRun {
    /// Groups consecutive glyphs that render with the same typeface.
    pub(crate) fn typeface_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for (index, glyph) in self.glyphs.iter().enumerate() {
            match ranges.last_mut() {
                Some(range) if self.glyphs[range.start].font.same_typeface(&glyph.font) => {
                    range.end = index + 1;
                }
                _ => ranges.push(index..index + 1),
            }
        }
        ranges
    }
}

/// Glyph id, font and advance of each glyph of one cluster, in logical order.
type ClusterGlyphs = SmallVec<[(GlyphId, FakedFont, f32); 2]>;

/// Shapes text in one style against a resolved font list.
///
/// Every grapheme cluster is rendered by the first font of the list that has a glyph for its
/// first character, then by a fallback font from the collection, then by the list's base font.
pub(crate) struct Shaper<'a> {
    collection: &'a FontCollection,
    fonts: &'a ResolvedFonts,
    style: &'a TextStyle,
    font_style: FontStyle,
    base: FakedFont,
}

impl<'a> Shaper<'a> {
    /// Returns `None` when the resolved list has no face at all.
    pub(crate) fn new(
        collection: &'a FontCollection,
        fonts: &'a ResolvedFonts,
        style: &'a TextStyle,
    ) -> Option<Self> {
        let font_style = style.font_style();
        let base = fonts.base_font(font_style)?;
        Some(Self {
            collection,
            fonts,
            style,
            font_style,
            base,
        })
    }

    /// Metrics of the base font at the style's size.
    pub(crate) fn metrics(&self) -> FontMetrics {
        self.base.font.metrics(self.style.font_size)
    }

    fn font_for(&self, ch: char) -> FakedFont {
        self.fonts
            .font_for_char(ch, self.font_style)
            .or_else(|| {
                self.collection
                    .fallback_font(ch, self.font_style, &self.style.locale)
            })
            .unwrap_or_else(|| self.base.clone())
    }

    /// Shapes `text[range]`. Cluster ranges index `text`.
    pub(crate) fn shape(&self, text: &[u16], range: Range<usize>, is_rtl: bool) -> ShapedRun {
        let slice = &text[range.clone()];
        let boundaries: Vec<usize> = GraphemeClusterSegmenter::new()
            .segment_utf16(slice)
            .collect();
        let mut run = ShapedRun {
            advances: vec![0.0; slice.len()],
            ..ShapedRun::default()
        };
        let mut logical: Vec<(Range<usize>, ClusterGlyphs, f32)> =
            Vec::with_capacity(boundaries.len());
        for pair in boundaries.windows(2) {
            let cluster = pair[0]..pair[1];
            if cluster.is_empty() {
                continue;
            }
            let mut cursor = &slice[cluster.clone()];
            let first = util::decode(&mut cursor.clone());
            let font = self.font_for(first);
            let mut glyphs = ClusterGlyphs::new();
            let mut advance = 0.0;
            while !cursor.is_empty() {
                let ch = util::decode(&mut cursor);
                let glyph_id = font.font.glyph_id(ch).unwrap_or(0);
                let glyph_advance = font.font.advance(glyph_id, self.style.font_size);
                advance += glyph_advance;
                glyphs.push((glyph_id, font.clone(), glyph_advance));
            }
            let spacing = self.style.letter_spacing
                + if first == ' ' {
                    self.style.word_spacing
                } else {
                    0.0
                };
            if let Some(last) = glyphs.last_mut() {
                last.2 += spacing;
            }
            advance += spacing;
            run.advances[cluster.start] = advance;
            logical.push((cluster, glyphs, advance));
        }
        if is_rtl {
            logical.reverse();
        }

        let mut x = 0.0;
        for (cluster, glyphs, advance) in logical {
            let glyph_start = run.glyphs.len();
            let mut glyph_x = x;
            for (glyph_id, font, glyph_advance) in glyphs {
                run.glyphs.push(ShapedGlyph {
                    glyph_id,
                    font,
                    x: glyph_x,
                    advance: glyph_advance,
                });
                glyph_x += glyph_advance;
            }
            run.clusters.push(ShapedCluster {
                text_range: cluster.start + range.start..cluster.end + range.start,
                glyph_range: glyph_start..run.glyphs.len(),
                x,
                advance,
            });
            x += advance;
        }
        run.advance = x;
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{test_collection, TEST_FAMILY};

    fn style(size: f32) -> TextStyle {
        TextStyle {
            font_families: vec![TEST_FAMILY.into()],
            font_size: size,
            ..TextStyle::default()
        }
    }

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn clusters_carry_their_advance_on_the_first_unit() {
        let collection = test_collection();
        let fonts = collection.resolve(&[TEST_FAMILY.into()], "").unwrap();
        let style = style(10.0);
        let shaper = Shaper::new(&collection, &fonts, &style).unwrap();
        let text = utf16("xe\u{301}y");
        let run = shaper.shape(&text, 0..text.len(), false);
        assert_eq!(run.advances, vec![10.0, 10.0, 0.0, 10.0]);
        assert_eq!(run.advance, 30.0);
        let ranges: Vec<_> = run
            .clusters
            .iter()
            .map(|cluster| cluster.text_range.clone())
            .collect();
        assert_eq!(ranges, vec![0..1, 1..3, 3..4]);
        assert_eq!(run.glyphs.len(), 4);
        assert_eq!(run.clusters[1].glyph_range, 1..3);
    }

    #[test]
    fn rtl_runs_are_visually_reversed() {
        let collection = test_collection();
        let fonts = collection.resolve(&[TEST_FAMILY.into()], "").unwrap();
        let style = style(10.0);
        let shaper = Shaper::new(&collection, &fonts, &style).unwrap();
        let text = utf16("a\u{5d0}\u{5d1}b");
        let run = shaper.shape(&text, 1..3, true);
        let clusters: Vec<_> = run
            .clusters
            .iter()
            .map(|cluster| (cluster.text_range.clone(), cluster.x))
            .collect();
        assert_eq!(clusters, vec![(2..3, 0.0), (1..2, 10.0)]);
        assert_eq!(run.advances, vec![10.0, 10.0]);
    }

    #[test]
    fn spacing_is_added_per_cluster() {
        let collection = test_collection();
        let fonts = collection.resolve(&[TEST_FAMILY.into()], "").unwrap();
        let style = TextStyle {
            letter_spacing: 1.0,
            word_spacing: 5.0,
            ..style(10.0)
        };
        let shaper = Shaper::new(&collection, &fonts, &style).unwrap();
        let text = utf16("a b");
        let run = shaper.shape(&text, 0..3, false);
        assert_eq!(run.advances, vec![11.0, 16.0, 11.0]);
        assert_eq!(run.clusters[2].x, 27.0);
    }

    #[test]
    fn glyphs_group_by_typeface() {
        let collection = test_collection();
        let fonts = collection.resolve(&[TEST_FAMILY.into()], "").unwrap();
        let style = style(10.0);
        let shaper = Shaper::new(&collection, &fonts, &style).unwrap();
        let text = utf16("abc");
        let run = shaper.shape(&text, 0..3, false);
        assert_eq!(run.typeface_ranges(), vec![0..3]);
    }
}
