// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use crate::context::LayoutContext;
use crate::font::{FontCollection, ResolvedFonts};
use crate::placeholder::PlaceholderRun;
use crate::style::{ParagraphStyle, TextStyle};
use crate::styled_runs::StyledRunTable;
use crate::util::OBJECT_REPLACEMENT;
use crate::Error;

/// The inputs of a paragraph layout.
#[derive(Clone, Debug)]
pub(crate) struct Source {
    pub(crate) text: Vec<u16>,
    pub(crate) runs: StyledRunTable,
    pub(crate) placeholders: Vec<PlaceholderRun>,
    /// Offsets of the U+FFFC code units standing in for `placeholders`, ascending.
    pub(crate) placeholder_offsets: Vec<usize>,
    pub(crate) style: ParagraphStyle,
    pub(crate) fonts: Arc<FontCollection>,
    pub(crate) context: Arc<LayoutContext>,
}

impl Source {
    pub(crate) fn resolve_fonts(&self, style: &TextStyle) -> Result<Arc<ResolvedFonts>, Error> {
        self.fonts
            .resolve(&style.font_families, &style.locale)
            .ok_or_else(|| self.font_error(style))
    }

    pub(crate) fn font_error(&self, style: &TextStyle) -> Error {
        Error::font_collection_not_found(&style.font_families, &style.locale)
    }

    /// Index of the placeholder whose stand-in is at `offset`.
    ///
    /// Placeholders are numbered in text order, whatever their visual order.
    pub(crate) fn placeholder_at(&self, offset: usize) -> Option<usize> {
        if self.text.get(offset) != Some(&OBJECT_REPLACEMENT) {
            return None;
        }
        self.placeholder_offsets
            .binary_search(&offset)
            .ok()
            .filter(|&index| index < self.placeholders.len())
    }
}
