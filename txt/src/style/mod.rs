// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and paragraph styles.

mod font;

pub use font::{FontSlant, FontStyle, FontWeight, FontWidth};

/// Font size used when none is specified.
pub(crate) const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Base direction of a paragraph, or the resolved direction of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Returns `true` for [`Rtl`](Self::Rtl).
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center each line.
    Center,
    /// Stretch word gaps so that every line but the last fills the width.
    Justify,
    /// Align to the leading edge: left for LTR paragraphs, right for RTL ones.
    #[default]
    Start,
    /// Align to the trailing edge: right for LTR paragraphs, left for RTL ones.
    End,
}

/// Strategy used to choose line breaks among the available opportunities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BreakStrategy {
    /// Fill each line as much as possible before moving to the next.
    #[default]
    Greedy,
    /// Minimize the raggedness of all lines but the last.
    HighQuality,
    /// Minimize the raggedness of all lines, including the last.
    Balanced,
}

/// Controls whether the first line's ascent and the last line's descent include the extra space
/// added by a height multiplier or font leading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextHeightBehavior {
    /// Use the raw font ascent for the first line.
    pub disable_first_ascent: bool,
    /// Use the raw font descent for the last line.
    pub disable_last_descent: bool,
}

/// Style applied to a range of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font families in order of preference. An empty list selects the collection's defaults.
    pub font_families: Vec<String>,
    /// Requested weight.
    pub font_weight: FontWeight,
    /// Requested width class.
    pub font_width: FontWidth,
    /// Requested slant.
    pub font_slant: FontSlant,
    /// Font size in pixels.
    pub font_size: f32,
    /// Extra space added after every cluster.
    pub letter_spacing: f32,
    /// Extra space added after every space character.
    pub word_spacing: f32,
    /// Line height as a multiple of the font size, used when `has_height_override` is set.
    pub height: f32,
    /// Whether `height` replaces the font's own ascent and descent.
    pub has_height_override: bool,
    /// BCP 47 language tag used for font fallback.
    pub locale: String,
}

impl TextStyle {
    /// The attributes used to match a face in each family.
    pub fn font_style(&self) -> FontStyle {
        FontStyle {
            weight: self.font_weight,
            width: self.font_width,
            slant: self.font_slant,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_families: Vec::new(),
            font_weight: FontWeight::NORMAL,
            font_width: FontWidth::NORMAL,
            font_slant: FontSlant::Normal,
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            height: 1.0,
            has_height_override: false,
            locale: String::new(),
        }
    }
}

/// Style of a whole paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Default font family of the paragraph's base text style.
    pub font_family: String,
    /// Default weight of the base text style.
    pub font_weight: FontWeight,
    /// Default slant of the base text style.
    pub font_slant: FontSlant,
    /// Default font size of the base text style.
    pub font_size: f32,
    /// Default height multiplier of the base text style.
    pub height: f32,
    /// Whether `height` overrides the font metrics in the base text style.
    pub has_height_override: bool,
    /// Locale of the base text style.
    pub locale: String,

    /// Whether a strut sets a minimum height for every line.
    pub strut_enabled: bool,
    /// Font families used to compute the strut.
    pub strut_font_families: Vec<String>,
    /// Weight of the strut font.
    pub strut_font_weight: FontWeight,
    /// Slant of the strut font.
    pub strut_font_slant: FontSlant,
    /// Size of the strut font. Negative values disable the strut.
    pub strut_font_size: f32,
    /// Strut height as a multiple of `strut_font_size`, used when `strut_has_height_override`
    /// is set.
    pub strut_height: f32,
    /// Whether `strut_height` replaces the strut font's ascent and descent.
    pub strut_has_height_override: bool,
    /// Extra space split above and below the strut, as a multiple of `strut_font_size`.
    /// Negative values mean no leading.
    pub strut_leading: f32,
    /// Make every line exactly as tall as the strut, ignoring the text's own metrics.
    pub force_strut_height: bool,

    /// Horizontal alignment.
    pub text_align: TextAlign,
    /// Base direction.
    pub text_direction: TextDirection,
    /// Maximum number of lines; `None` means unlimited.
    pub max_lines: Option<usize>,
    /// String appended where the last visible line is truncated. Empty disables ellipsizing.
    pub ellipsis: String,
    /// Line-break strategy.
    pub break_strategy: BreakStrategy,
    /// Whether the first ascent and last descent include extra height.
    pub text_height_behavior: TextHeightBehavior,
}

impl ParagraphStyle {
    /// The text style applied to text outside any pushed style.
    pub fn text_style(&self) -> TextStyle {
        let font_families = if self.font_family.is_empty() {
            Vec::new()
        } else {
            vec![self.font_family.clone()]
        };
        TextStyle {
            font_families,
            font_weight: self.font_weight,
            font_slant: self.font_slant,
            font_size: self.font_size,
            height: self.height,
            has_height_override: self.has_height_override,
            locale: self.locale.clone(),
            ..TextStyle::default()
        }
    }

    /// Whether the number of lines is unbounded.
    pub fn unlimited_lines(&self) -> bool {
        self.max_lines.is_none()
    }

    /// Whether truncated lines end with an ellipsis.
    pub fn ellipsized(&self) -> bool {
        !self.ellipsis.is_empty()
    }

    /// The alignment with [`TextAlign::Start`] and [`TextAlign::End`] resolved against the
    /// paragraph direction.
    pub fn effective_align(&self) -> TextAlign {
        match (self.text_align, self.text_direction) {
            (TextAlign::Start, TextDirection::Ltr) | (TextAlign::End, TextDirection::Rtl) => {
                TextAlign::Left
            }
            (TextAlign::Start, TextDirection::Rtl) | (TextAlign::End, TextDirection::Ltr) => {
                TextAlign::Right
            }
            (align, _) => align,
        }
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font_family: String::new(),
            font_weight: FontWeight::NORMAL,
            font_slant: FontSlant::Normal,
            font_size: DEFAULT_FONT_SIZE,
            height: 1.0,
            has_height_override: false,
            locale: String::new(),
            strut_enabled: false,
            strut_font_families: Vec::new(),
            strut_font_weight: FontWeight::NORMAL,
            strut_font_slant: FontSlant::Normal,
            strut_font_size: DEFAULT_FONT_SIZE,
            strut_height: 1.0,
            strut_has_height_override: false,
            strut_leading: -1.0,
            force_strut_height: false,
            text_align: TextAlign::Start,
            text_direction: TextDirection::Ltr,
            max_lines: None,
            ellipsis: String::new(),
            break_strategy: BreakStrategy::Greedy,
            text_height_behavior: TextHeightBehavior::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_end_follow_direction() {
        let mut style = ParagraphStyle::default();
        assert_eq!(style.effective_align(), TextAlign::Left);
        style.text_direction = TextDirection::Rtl;
        assert_eq!(style.effective_align(), TextAlign::Right);
        style.text_align = TextAlign::End;
        assert_eq!(style.effective_align(), TextAlign::Left);
        style.text_align = TextAlign::Center;
        assert_eq!(style.effective_align(), TextAlign::Center);
    }

    #[test]
    fn base_text_style_carries_paragraph_font() {
        let style = ParagraphStyle {
            font_family: "Ahem".into(),
            font_size: 20.0,
            font_weight: FontWeight::BOLD,
            ..ParagraphStyle::default()
        };
        let text_style = style.text_style();
        assert_eq!(text_style.font_families, vec!["Ahem".to_string()]);
        assert_eq!(text_style.font_size, 20.0);
        assert_eq!(text_style.font_weight, FontWeight::BOLD);

        assert!(ParagraphStyle::default().text_style().font_families.is_empty());
    }
}
