// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::INVALID;

fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// Returns the number of code points in `units`, or `-1` if the buffer contains an unpaired
/// surrogate.
///
/// ```
/// use txt_utf::count_utf16;
///
/// assert_eq!(count_utf16(&[0x48, 0xD83D, 0xDE00]), 2);
/// assert_eq!(count_utf16(&[0xDE00]), -1);
/// ```
pub fn count_utf16(units: &[u16]) -> i32 {
    let mut count = 0_i32;
    let mut iter = units.iter();
    while let Some(&unit) = iter.next() {
        if is_low_surrogate(unit) {
            return INVALID;
        }
        if is_high_surrogate(unit) {
            match iter.next() {
                Some(&low) if is_low_surrogate(low) => {}
                _ => return INVALID,
            }
        }
        count += 1;
    }
    count
}

/// Counts the code points of native-endian UTF-16 stored in a byte buffer.
///
/// Returns `-1` when the buffer has an odd length, does not start on a two-byte boundary, or
/// contains an unpaired surrogate.
pub fn count_utf16_bytes(bytes: &[u8]) -> i32 {
    if bytes.len() % 2 != 0 || bytes.as_ptr().align_offset(2) != 0 {
        return INVALID;
    }
    let mut count = 0_i32;
    let mut pending_high = false;
    for pair in bytes.chunks_exact(2) {
        let unit = u16::from_ne_bytes([pair[0], pair[1]]);
        if pending_high {
            if !is_low_surrogate(unit) {
                return INVALID;
            }
            pending_high = false;
            count += 1;
        } else if is_low_surrogate(unit) {
            return INVALID;
        } else if is_high_surrogate(unit) {
            pending_high = true;
        } else {
            count += 1;
        }
    }
    if pending_high {
        return INVALID;
    }
    count
}

/// Decodes the code point at the front of `cursor` and advances the cursor past it.
///
/// Returns `-1` and moves the cursor to the end of the buffer when the cursor is empty, starts on
/// a low surrogate, or holds a high surrogate that is not followed by a low surrogate.
pub fn next_utf16(cursor: &mut &[u16]) -> i32 {
    let units = *cursor;
    let Some(&first) = units.first() else {
        return fail(cursor);
    };
    if is_low_surrogate(first) {
        return fail(cursor);
    }
    if !is_high_surrogate(first) {
        *cursor = &units[1..];
        return i32::from(first);
    }
    match units.get(1) {
        Some(&low) if is_low_surrogate(low) => {
            *cursor = &units[2..];
            let high = i32::from(first) - 0xD800;
            let low = i32::from(low) - 0xDC00;
            (high << 10) + low + 0x10000
        }
        _ => fail(cursor),
    }
}

fn fail(cursor: &mut &[u16]) -> i32 {
    *cursor = &cursor[cursor.len()..];
    INVALID
}
