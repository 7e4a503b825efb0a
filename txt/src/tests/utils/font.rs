// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{FontMetrics, FontResource, FontStyle, GlyphId};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A font whose glyphs all advance one em, except combining marks which advance zero.
///
/// Glyph ids are the code points they render. Ascent is 0.8 em, descent 0.2 em and there is no
/// leading.
#[derive(Debug)]
pub(crate) struct TestFont {
    id: u64,
    family: String,
    style: FontStyle,
    /// Characters the font has glyphs for. Empty means every character.
    coverage: Vec<RangeInclusive<char>>,
}

impl TestFont {
    pub(crate) fn new(family: &str, style: FontStyle) -> Arc<Self> {
        Self::with_coverage(family, style, Vec::new())
    }

    pub(crate) fn with_coverage(
        family: &str,
        style: FontStyle,
        coverage: Vec<RangeInclusive<char>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            family: family.to_string(),
            style,
            coverage,
        })
    }
}

impl FontResource for TestFont {
    fn id(&self) -> u64 {
        self.id
    }

    fn family_name(&self) -> &str {
        &self.family
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        (self.coverage.is_empty() || self.coverage.iter().any(|range| range.contains(&ch)))
            .then_some(u32::from(ch))
    }

    fn advance(&self, glyph: GlyphId, font_size: f32) -> f32 {
        if (0x300..=0x36F).contains(&glyph) {
            0.0
        } else {
            font_size
        }
    }

    fn metrics(&self, font_size: f32) -> FontMetrics {
        FontMetrics {
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
            leading: 0.0,
        }
    }
}
