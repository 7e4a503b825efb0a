// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::raw::tables::os2::SelectionFlags;
use skrifa::raw::types::Tag;
use skrifa::raw::TableProvider;
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId as SkrifaGlyphId, MetadataProvider};

use super::{FontMetrics, FontResource, GlyphBounds, GlyphId};
use crate::style::{FontSlant, FontStyle, FontWeight, FontWidth};
use crate::Error;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A [`FontResource`] backed by OpenType font data.
#[derive(Clone)]
pub struct SkrifaFont {
    id: u64,
    data: Arc<[u8]>,
    index: u32,
    family_name: String,
    style: FontStyle,
}

impl SkrifaFont {
    /// Loads the face at `index` in a font file or collection.
    pub fn new(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, Error> {
        let data = data.into();
        let font =
            FontRef::from_index(&data, index).map_err(|err| Error::invalid_font(err.to_string()))?;
        let family_name = font
            .localized_strings(StringId::TYPOGRAPHIC_FAMILY_NAME)
            .english_or_first()
            .or_else(|| {
                font.localized_strings(StringId::FAMILY_NAME)
                    .english_or_first()
            })
            .map(|name| name.chars().collect::<String>())
            .unwrap_or_default();
        let style = read_style(&font);
        Ok(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            data,
            index,
            family_name,
            style,
        })
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }
}

fn read_style(font: &FontRef<'_>) -> FontStyle {
    let Ok(os2) = font.os2() else {
        return FontStyle::default();
    };
    // Bits 0 and 9 of fsSelection mark italic and oblique faces.
    let fs_selection = os2.fs_selection();
    let slant = if fs_selection.contains(SelectionFlags::ITALIC) {
        FontSlant::Italic
    } else if fs_selection.contains(SelectionFlags::OBLIQUE) {
        FontSlant::Oblique
    } else {
        FontSlant::Normal
    };
    FontStyle {
        weight: FontWeight::new(f32::from(os2.us_weight_class())),
        width: FontWidth::new(os2.us_width_class()),
        slant,
    }
}

impl FontResource for SkrifaFont {
    fn id(&self) -> u64 {
        self.id
    }

    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn style(&self) -> FontStyle {
        self.style
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let glyph = self.font()?.charmap().map(ch)?;
        Some(glyph.to_u32())
    }

    fn advance(&self, glyph: GlyphId, font_size: f32) -> f32 {
        self.font()
            .and_then(|font| {
                font.glyph_metrics(Size::new(font_size), LocationRef::default())
                    .advance_width(SkrifaGlyphId::new(glyph))
            })
            .unwrap_or(0.0)
    }

    fn metrics(&self, font_size: f32) -> FontMetrics {
        let Some(font) = self.font() else {
            return FontMetrics::default();
        };
        let metrics = font.metrics(Size::new(font_size), LocationRef::default());
        FontMetrics {
            ascent: metrics.ascent,
            descent: metrics.descent.abs(),
            leading: metrics.leading,
        }
    }

    fn bounds(&self, glyph: GlyphId, font_size: f32) -> Option<GlyphBounds> {
        let font = self.font()?;
        let bounds = font
            .glyph_metrics(Size::new(font_size), LocationRef::default())
            .bounds(SkrifaGlyphId::new(glyph))?;
        Some(GlyphBounds {
            x_min: bounds.x_min,
            y_min: bounds.y_min,
            x_max: bounds.x_max,
            y_max: bounds.y_max,
        })
    }

    fn table(&self, tag: [u8; 4]) -> Option<&[u8]> {
        let font = FontRef::from_index(&self.data, self.index).ok()?;
        font.table_data(Tag::new(&tag)).map(|data| data.as_bytes())
    }
}

impl core::fmt::Debug for SkrifaFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkrifaFont")
            .field("id", &self.id)
            .field("index", &self.index)
            .field("family_name", &self.family_name)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
