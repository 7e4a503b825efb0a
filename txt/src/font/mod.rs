// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font resources, families and the shared font collection.

mod collection;
mod matching;
mod registry;
#[cfg(feature = "skrifa")]
mod skrifa_font;

use std::fmt;
use std::sync::Arc;

use crate::style::{FontStyle, FontWeight};

pub use collection::{FontCollection, FontProvider, ResolvedFonts};
pub use matching::MatchScore;
pub use registry::TypefaceProvider;
#[cfg(feature = "skrifa")]
pub use skrifa_font::SkrifaFont;

/// Identifier of a glyph within a font.
pub type GlyphId = u32;

/// Vertical metrics of a font at a given size.
///
/// All values are distances in pixels and are positive for typical fonts: `ascent` is measured
/// upwards from the baseline and `descent` downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f32,
    /// Recommended extra space between lines.
    pub leading: f32,
}

/// Ink bounds of a glyph relative to its origin, with y growing upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBounds {
    /// Minimum x.
    pub x_min: f32,
    /// Minimum y.
    pub y_min: f32,
    /// Maximum x.
    pub x_max: f32,
    /// Maximum y.
    pub y_max: f32,
}

/// A single font face: glyph lookup, advances and metrics.
pub trait FontResource: fmt::Debug + Send + Sync {
    /// Identifier that is unique among all live font resources.
    fn id(&self) -> u64;

    /// Family name of the face.
    fn family_name(&self) -> &str;

    /// Weight, width and slant of the face.
    fn style(&self) -> FontStyle;

    /// Maps a character to a glyph, or `None` if the face has no glyph for it.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of a glyph at the given font size.
    fn advance(&self, glyph: GlyphId, font_size: f32) -> f32;

    /// Vertical metrics at the given font size.
    fn metrics(&self, font_size: f32) -> FontMetrics;

    /// Ink bounds of a glyph at the given font size.
    fn bounds(&self, _glyph: GlyphId, _font_size: f32) -> Option<GlyphBounds> {
        None
    }

    /// Raw data of the table with the given tag.
    fn table(&self, _tag: [u8; 4]) -> Option<&[u8]> {
        None
    }
}

/// Synthetic styling a painter should apply to make a face match the requested style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Synthesis {
    /// Draw glyphs bolder than the face.
    pub embolden: bool,
    /// Skew glyphs to fake a slant.
    pub skew: bool,
}

impl Synthesis {
    /// Computes the synthesis needed to render `actual` as `requested`.
    ///
    /// Bold is synthesized when at least bold is requested and the face is two or more weight
    /// classes lighter; slant is synthesized when an upright face stands in for an
    /// italic or oblique request.
    pub fn for_match(requested: FontStyle, actual: FontStyle) -> Self {
        let wanted = requested.weight.class();
        let got = actual.weight.class();
        Self {
            embolden: wanted >= FontWeight::BOLD.class() && wanted - got >= 200,
            skew: requested.slant.is_slanted() && !actual.slant.is_slanted(),
        }
    }
}

/// A font face together with the synthesis needed to match a requested style.
#[derive(Clone, Debug)]
pub struct FakedFont {
    /// The matched face.
    pub font: Arc<dyn FontResource>,
    /// Synthetic styling to apply.
    pub synthesis: Synthesis,
}

impl FakedFont {
    /// Whether two faked fonts render with the same face and the same synthesis.
    pub fn same_typeface(&self, other: &Self) -> bool {
        self.font.id() == other.font.id() && self.synthesis == other.synthesis
    }
}

/// The faces of one font family, sorted by weight and then slant.
#[derive(Clone, Debug)]
pub struct FontFamily {
    name: String,
    fonts: Vec<Arc<dyn FontResource>>,
}

impl FontFamily {
    /// Creates a family from its faces.
    pub fn new(name: impl Into<String>, mut fonts: Vec<Arc<dyn FontResource>>) -> Self {
        fonts.sort_by(|a, b| {
            let (a, b) = (a.style(), b.style());
            a.weight
                .value()
                .total_cmp(&b.weight.value())
                .then(a.slant.index().cmp(&b.slant.index()))
        });
        Self {
            name: name.into(),
            fonts,
        }
    }

    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The faces of the family.
    pub fn fonts(&self) -> &[Arc<dyn FontResource>] {
        &self.fonts
    }

    /// Whether the family has no faces.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Selects the face that best matches `style` using the CSS font matching rules.
    pub fn match_style(&self, style: FontStyle) -> Option<FakedFont> {
        let index = matching::match_style(self.fonts.iter().map(|font| font.style()), style)?;
        let font = self.fonts[index].clone();
        let synthesis = Synthesis::for_match(style, font.style());
        Some(FakedFont { font, synthesis })
    }
}
