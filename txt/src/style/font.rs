// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// The weight rounded to an integer in `1..=1000`, as used by style matching.
    pub(crate) fn class(self) -> i32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The value is clamped to 1..=1000 before the cast."
        )]
        let class = self.0.clamp(1.0, 1000.0).round() as i32;
        class
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Width class of a font, from 1 (ultra-condensed) to 9 (ultra-expanded).
///
/// This is the `usWidthClass` scale of the OpenType `OS/2` table; in CSS it corresponds to the
/// keyword values of `font-stretch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWidth(u16);

impl FontWidth {
    /// 50% of normal.
    pub const ULTRA_CONDENSED: Self = Self(1);

    /// 62.5% of normal.
    pub const EXTRA_CONDENSED: Self = Self(2);

    /// 75% of normal.
    pub const CONDENSED: Self = Self(3);

    /// 87.5% of normal.
    pub const SEMI_CONDENSED: Self = Self(4);

    /// Normal width. This is the default value.
    pub const NORMAL: Self = Self(5);

    /// 112.5% of normal.
    pub const SEMI_EXPANDED: Self = Self(6);

    /// 125% of normal.
    pub const EXPANDED: Self = Self(7);

    /// 150% of normal.
    pub const EXTRA_EXPANDED: Self = Self(8);

    /// 200% of normal.
    pub const ULTRA_EXPANDED: Self = Self(9);

    /// Creates a width from a width class, clamped to `1..=9`.
    pub fn new(class: u16) -> Self {
        Self(class.clamp(1, 9))
    }

    /// Returns the width class.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWidth {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant of a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSlant {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Glyphs designed as italics.
    Italic,
    /// Upright glyphs that have been skewed.
    Oblique,
}

impl FontSlant {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Italic => 1,
            Self::Oblique => 2,
        }
    }

    /// Returns `true` for [`Italic`](Self::Italic) and [`Oblique`](Self::Oblique).
    pub fn is_slanted(self) -> bool {
        self != Self::Normal
    }
}

/// The attributes used to select a face from a font family.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontStyle {
    /// Weight of the face.
    pub weight: FontWeight,
    /// Width class of the face.
    pub width: FontWidth,
    /// Slant of the face.
    pub slant: FontSlant,
}

impl FontStyle {
    /// Creates a style with normal width.
    pub fn new(weight: FontWeight, slant: FontSlant) -> Self {
        Self {
            weight,
            width: FontWidth::NORMAL,
            slant,
        }
    }
}
