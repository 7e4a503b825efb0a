// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of the CSS font matching algorithm.

use crate::style::FontStyle;

/// How well a face matches a requested style; larger is better.
///
/// Scores compare lexicographically: width first, then slant, then weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchScore {
    /// Score for the width class.
    pub width: u32,
    /// Score for the slant.
    pub slant: u32,
    /// Score for the weight.
    pub weight: u32,
}

// Rows are the requested slant, columns the candidate's: normal, italic, oblique.
const SLANT_SCORES: [[u32; 3]; 3] = [[3, 1, 2], [1, 3, 2], [1, 2, 3]];

impl MatchScore {
    /// Scores `candidate` against the requested `pattern`.
    ///
    /// - Width: for requests of normal width or narrower, narrower faces are preferred over
    ///   wider ones; for wider requests the reverse.
    /// - Slant: an exact match wins, then oblique for italic and italic for oblique.
    /// - Weight: an exact match wins. Below 400, lighter weights are tried first in descending
    ///   order; between 400 and 500, heavier weights up to 500 come first, then lighter ones;
    ///   above 500, heavier weights are tried first in ascending order.
    pub fn new(candidate: FontStyle, pattern: FontStyle) -> Self {
        Self {
            width: width_score(
                u32::from(candidate.width.value()),
                u32::from(pattern.width.value()),
            ),
            slant: SLANT_SCORES[pattern.slant.index()][candidate.slant.index()],
            weight: weight_score(candidate.weight.class(), pattern.weight.class()),
        }
    }
}

fn width_score(current: u32, wanted: u32) -> u32 {
    if wanted <= 5 {
        if current <= wanted {
            10 - wanted + current
        } else {
            10 - current
        }
    } else if current > wanted {
        10 + wanted - current
    } else {
        current
    }
}

fn weight_score(current: i32, wanted: i32) -> u32 {
    let score = if current == wanted {
        1000
    } else if wanted < 400 {
        if current <= wanted {
            1000 - wanted + current
        } else {
            1000 - current
        }
    } else if wanted <= 500 {
        if current >= wanted && current <= 500 {
            1000 + wanted - current
        } else if current <= wanted {
            500 + current
        } else {
            1000 - current
        }
    } else if current > wanted {
        1000 + wanted - current
    } else {
        current
    };
    score.max(0).unsigned_abs()
}

/// Returns the index of the best match for `pattern`, preferring the earliest face on ties.
pub(crate) fn match_style(
    candidates: impl Iterator<Item = FontStyle>,
    pattern: FontStyle,
) -> Option<usize> {
    let mut best: Option<(usize, MatchScore)> = None;
    for (index, candidate) in candidates.enumerate() {
        let score = MatchScore::new(candidate, pattern);
        if best.is_none_or(|(_, best_score)| best_score < score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}
