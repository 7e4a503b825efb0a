// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::source::Source;
use crate::style::FontStyle;

/// Minimum line metrics imposed by the paragraph style. All zero when there is no strut.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Strut {
    pub(crate) ascent: f32,
    pub(crate) descent: f32,
    pub(crate) leading: f32,
    pub(crate) half_leading: f32,
    /// Lines take exactly the strut metrics, ignoring their fonts.
    pub(crate) force: bool,
    pub(crate) valid: bool,
}

pub(crate) fn compute(source: &Source) -> Strut {
    let style = &source.style;
    let mut strut = Strut::default();
    if !style.strut_enabled || style.strut_font_size < 0.0 {
        return strut;
    }
    strut.valid = true;
    strut.force = style.force_strut_height;
    let Some(fonts) = source.fonts.resolve(&style.strut_font_families, "") else {
        log::debug!(
            "strut families {:?} not found",
            style.strut_font_families
        );
        return strut;
    };
    let Some(font) = fonts.base_font(FontStyle::new(style.strut_font_weight, style.strut_font_slant))
    else {
        return strut;
    };
    let metrics = font.font.metrics(style.strut_font_size);
    let metrics_height = metrics.ascent + metrics.descent;
    if style.strut_has_height_override && metrics_height > 0.0 {
        let strut_height = style.strut_height * style.strut_font_size;
        strut.ascent = metrics.ascent / metrics_height * strut_height;
        strut.descent = metrics.descent / metrics_height * strut_height;
    } else {
        strut.ascent = metrics.ascent;
        strut.descent = metrics.descent;
    }
    strut.leading = if style.strut_leading < 0.0 {
        0.0
    } else {
        style.strut_leading * style.strut_font_size
    };
    strut.half_leading = strut.leading / 2.0;
    strut
}
