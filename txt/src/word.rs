// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use icu_segmenter::options::WordBreakInvariantOptions;
use icu_segmenter::WordSegmenter;

use crate::util;

/// Finds word boundaries for selection.
pub trait WordBreaker: Send + Sync {
    /// Returns every word boundary offset of `text` in ascending order, including `0` and
    /// `text.len()`, or `None` if boundaries cannot be computed.
    fn boundaries(&self, text: &[u16]) -> Option<Vec<usize>>;
}

/// [`WordBreaker`] using the ICU4X word segmenter.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcuWordBreaker;

impl WordBreaker for IcuWordBreaker {
    fn boundaries(&self, text: &[u16]) -> Option<Vec<usize>> {
        let segmenter = WordSegmenter::new_auto(WordBreakInvariantOptions::default());
        Some(segmenter.segment_utf16(text).collect())
    }
}

/// The word around `offset`: the last boundary at or before `offset` and the boundary after it.
///
/// Falls back to the empty range at `offset` when boundaries are unavailable, the text is empty
/// or `offset` is past its end.
pub(crate) fn word_boundary(breaker: &dyn WordBreaker, text: &[u16], offset: usize) -> Range<usize> {
    if text.is_empty() || offset > text.len() {
        return offset..offset;
    }
    let Some(boundaries) = breaker.boundaries(text) else {
        return offset..offset;
    };
    let preceding = boundaries
        .iter()
        .copied()
        .take_while(|&boundary| boundary <= offset)
        .last()
        .unwrap_or(offset);
    let next = boundaries
        .iter()
        .copied()
        .find(|&boundary| boundary > preceding)
        .unwrap_or(offset);
    preceding..next
}

/// Splits `text[range]` into words separated by spaces, for justification.
pub(crate) fn find_words(text: &[u16], range: Range<usize>) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut word_start = None;
    for index in range.clone() {
        let is_space = util::is_word_space(text[index]);
        match (word_start, is_space) {
            (None, false) => word_start = Some(index),
            (Some(start), true) => {
                words.push(start..index);
                word_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = word_start {
        words.push(start..range.end);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn words_split_on_spaces() {
        let text = utf16("  ab cd\u{a0}ef  ");
        assert_eq!(find_words(&text, 0..text.len()), vec![2..4, 5..7, 8..10]);
        assert_eq!(find_words(&text, 3..6), vec![3..4, 5..6]);
        assert!(find_words(&text, 0..2).is_empty());
    }

    #[test]
    fn boundary_of_a_word() {
        let text = utf16("hello world");
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 0), 0..5);
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 3), 0..5);
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 5), 5..6);
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 8), 6..11);
    }

    #[test]
    fn empty_text_yields_empty_range() {
        assert_eq!(word_boundary(&IcuWordBreaker, &[], 4), 4..4);
    }

    #[test]
    fn offsets_past_the_end_yield_empty_range() {
        let text = utf16("hello");
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 100), 100..100);
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 6), 6..6);
        assert_eq!(word_boundary(&IcuWordBreaker, &text, 5), 5..5);
    }

    #[derive(Debug)]
    struct Unavailable;

    impl WordBreaker for Unavailable {
        fn boundaries(&self, _: &[u16]) -> Option<Vec<usize>> {
            None
        }
    }

    #[test]
    fn unavailable_breaker_yields_empty_range() {
        let text = utf16("hello");
        assert_eq!(word_boundary(&Unavailable, &text, 2), 2..2);
    }
}
