// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use super::TestFont;
use crate::{
    FontCollection, FontSlant, FontStyle, FontWeight, Paragraph, ParagraphBuilder,
    ParagraphStyle, TextStyle, TypefaceProvider,
};

/// Family name of the fonts registered by [`test_collection`].
pub(crate) const TEST_FAMILY: &str = "Txt Test";

/// A provider with a regular and a bold [`TestFont`] in [`TEST_FAMILY`].
pub(crate) fn test_provider() -> TypefaceProvider {
    let mut provider = TypefaceProvider::new();
    provider.register(TestFont::new(
        TEST_FAMILY,
        FontStyle::new(FontWeight::NORMAL, FontSlant::Normal),
    ));
    provider.register(TestFont::new(
        TEST_FAMILY,
        FontStyle::new(FontWeight::BOLD, FontSlant::Normal),
    ));
    provider
}

pub(crate) fn test_collection() -> Arc<FontCollection> {
    let fonts = Arc::new(FontCollection::new());
    fonts.add_provider(Arc::new(test_provider()));
    fonts
}

pub(crate) fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Builds paragraphs in [`TEST_FAMILY`] at 10px, so every glyph is 10px wide and every line
/// 10px tall with its baseline 8px below its top.
#[derive(Debug)]
pub(crate) struct TestEnv {
    pub(crate) fonts: Arc<FontCollection>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            fonts: test_collection(),
        }
    }

    /// A collection without any fonts, and the provider to add later.
    pub(crate) fn without_fonts() -> (Self, TypefaceProvider) {
        let env = Self {
            fonts: Arc::new(FontCollection::new()),
        };
        (env, test_provider())
    }

    pub(crate) fn paragraph_style(&self) -> ParagraphStyle {
        ParagraphStyle {
            font_family: TEST_FAMILY.into(),
            font_size: 10.0,
            ..ParagraphStyle::default()
        }
    }

    pub(crate) fn text_style(&self, font_size: f32) -> TextStyle {
        TextStyle {
            font_families: vec![TEST_FAMILY.into()],
            font_size,
            ..TextStyle::default()
        }
    }

    pub(crate) fn builder(&self, style: ParagraphStyle) -> ParagraphBuilder {
        ParagraphBuilder::new(style, self.fonts.clone())
    }

    /// A paragraph of `text` in the base style.
    pub(crate) fn paragraph(&self, text: &str, style: ParagraphStyle) -> Paragraph {
        let mut builder = self.builder(style);
        builder.add_text(text);
        builder.build()
    }

    /// A paragraph of `text` in the base style, laid out at `width`.
    pub(crate) fn layout(&self, text: &str, style: ParagraphStyle, width: f32) -> Paragraph {
        let mut paragraph = self.paragraph(text, style);
        paragraph.layout(width).unwrap();
        paragraph
    }
}
