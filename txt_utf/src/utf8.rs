// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::INVALID;

/// Classification of a single UTF-8 byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ByteKind {
    /// Never valid in UTF-8 (`C0`, `C1`, `F5..=FF`).
    Invalid,
    /// `10xxxxxx`.
    Continuation,
    /// First byte of a sequence of the given length (1 to 4).
    Leading(usize),
}

fn classify(byte: u8) -> ByteKind {
    match byte {
        0x00..=0x7F => ByteKind::Leading(1),
        0x80..=0xBF => ByteKind::Continuation,
        0xC0 | 0xC1 | 0xF5..=0xFF => ByteKind::Invalid,
        0xC2..=0xDF => ByteKind::Leading(2),
        0xE0..=0xEF => ByteKind::Leading(3),
        0xF0..=0xF4 => ByteKind::Leading(4),
    }
}

/// Returns the number of code points in `bytes`, or `-1` if the buffer is not well formed.
///
/// A buffer is rejected when it contains a byte that can never appear in UTF-8, when a sequence
/// is cut short by the end of the buffer, or when a leading byte is not followed by the expected
/// number of continuation bytes.
///
/// ```
/// use txt_utf::count_utf8;
///
/// assert_eq!(count_utf8(b"\xe0\xa4\xa8"), 1);
/// assert_eq!(count_utf8(b"\xe0\xa4"), -1);
/// ```
pub fn count_utf8(bytes: &[u8]) -> i32 {
    let mut count = 0_i32;
    let mut i = 0;
    while i < bytes.len() {
        let ByteKind::Leading(len) = classify(bytes[i]) else {
            return INVALID;
        };
        if i + len > bytes.len() {
            return INVALID;
        }
        if bytes[i + 1..i + len]
            .iter()
            .any(|b| classify(*b) != ByteKind::Continuation)
        {
            return INVALID;
        }
        i += len;
        count += 1;
    }
    count
}

/// Decodes the code point at the front of `cursor` and advances the cursor past it.
///
/// Returns `-1` and moves the cursor to the end of the buffer when the cursor is already empty,
/// starts on a byte that cannot begin a sequence, or holds a truncated sequence.
///
/// Overlong encodings are decoded rather than rejected.
pub fn next_utf8(cursor: &mut &[u8]) -> i32 {
    let bytes = *cursor;
    let Some(&first) = bytes.first() else {
        return fail(cursor);
    };
    let len = match classify(first) {
        ByteKind::Leading(len) => len,
        _ => return fail(cursor),
    };
    if len == 1 {
        *cursor = &bytes[1..];
        return i32::from(first);
    }
    // Payload bits of the leading byte: 5, 4 or 3 for sequences of length 2, 3 or 4.
    let mut value = u32::from(first) & (0x7F >> len);
    for i in 1..len {
        match bytes.get(i) {
            Some(&b) if classify(b) == ByteKind::Continuation => {
                value = (value << 6) | u32::from(b & 0x3F);
            }
            _ => return fail(cursor),
        }
    }
    *cursor = &bytes[len..];
    // At most 21 significant bits.
    value as i32
}

fn fail(cursor: &mut &[u8]) -> i32 {
    *cursor = &cursor[cursor.len()..];
    INVALID
}
