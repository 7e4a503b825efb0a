// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misc helpers.

use icu_properties::props::{BidiControl, LineBreak, WhiteSpace};
use icu_properties::{CodePointMapData, CodePointSetData};

/// U+FFFC OBJECT REPLACEMENT CHARACTER, the stand-in for placeholders.
pub(crate) const OBJECT_REPLACEMENT: u16 = 0xFFFC;

/// Whether the code unit is white space that may hang past the end of a line.
pub(crate) fn is_line_end_space(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x0020 | 0x1680 | 0x205F | 0x3000)
        || ((0x2000..=0x200A).contains(&unit) && unit != 0x2007)
}

/// Whether the code unit separates words for justification.
pub(crate) fn is_word_space(unit: u16) -> bool {
    unit == 0x0020 || unit == 0x00A0
}

/// Whether the code unit forces a line break (line-break class `BK` or `LF`).
pub(crate) fn is_hard_break(unit: u16) -> bool {
    let Some(ch) = char::from_u32(u32::from(unit)) else {
        return false;
    };
    let class = CodePointMapData::<LineBreak>::new().get(ch);
    class == LineBreak::MandatoryBreak || class == LineBreak::LineFeed
}

pub(crate) fn is_bidi_control(ch: char) -> bool {
    CodePointSetData::new::<BidiControl>().contains(ch)
}

pub(crate) fn is_white_space(ch: char) -> bool {
    CodePointSetData::new::<WhiteSpace>().contains(ch)
}

/// Returns the code point containing the code unit at `index`.
///
/// A trailing surrogate is decoded together with the leading surrogate before it; unpaired
/// surrogates decode to U+FFFD.
pub(crate) fn char_at(text: &[u16], index: usize) -> Option<char> {
    let unit = *text.get(index)?;
    let start = if (0xDC00..0xE000).contains(&unit)
        && index > 0
        && (0xD800..0xDC00).contains(&text[index - 1])
    {
        index - 1
    } else {
        index
    };
    Some(decode(&mut &text[start..]))
}

/// Decodes one code point from the front of `cursor`, advancing it by at least one code unit.
pub(crate) fn decode(cursor: &mut &[u16]) -> char {
    let units = *cursor;
    let value = txt_utf::next_utf16(cursor);
    if value < 0 {
        // Skip just the offending unit instead of the rest of the buffer.
        *cursor = units.get(1..).unwrap_or_default();
        return char::REPLACEMENT_CHARACTER;
    }
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_breaks() {
        assert!(is_hard_break(u16::from(b'\n')));
        assert!(is_hard_break(0x2028));
        assert!(is_hard_break(0x2029));
        assert!(!is_hard_break(u16::from(b' ')));
        assert!(!is_hard_break(0xD800));
    }

    #[test]
    fn decodes_around_surrogates() {
        let text: Vec<u16> = "a\u{1F600}b".encode_utf16().collect();
        assert_eq!(char_at(&text, 1), Some('\u{1F600}'));
        assert_eq!(char_at(&text, 2), Some('\u{1F600}'));
        assert_eq!(char_at(&text, 3), Some('b'));
        assert_eq!(char_at(&text, 4), None);

        let lone = [0xD800_u16, 0x0041];
        let mut cursor = &lone[..];
        assert_eq!(decode(&mut cursor), char::REPLACEMENT_CHARACTER);
        assert_eq!(decode(&mut cursor), 'A');
        assert!(cursor.is_empty());
    }
}
