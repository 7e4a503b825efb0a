// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a placeholder is positioned vertically relative to the surrounding text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaceholderAlignment {
    /// The placeholder's baseline offset is aligned with the text baseline.
    Baseline,
    /// The bottom of the placeholder sits on the baseline.
    AboveBaseline,
    /// The top of the placeholder sits on the baseline.
    BelowBaseline,
    /// The top of the placeholder is aligned with the top of the text.
    Top,
    /// The bottom of the placeholder is aligned with the bottom of the text.
    Bottom,
    /// The placeholder is centered on the middle of the text.
    #[default]
    Middle,
}

/// The baseline a placeholder is measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    #[default]
    Alphabetic,
    /// The ideographic baseline, approximated as half the descent below the alphabetic one.
    Ideographic,
}

/// A box to be laid out inline with text.
///
/// Each placeholder occupies a single U+FFFC code unit in the paragraph text and reserves
/// `width` pixels on its line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaceholderRun {
    /// The width of the box in pixels.
    pub width: f32,
    /// The height of the box in pixels.
    pub height: f32,
    /// Vertical alignment relative to the text.
    pub alignment: PlaceholderAlignment,
    /// Baseline used by [`PlaceholderAlignment::Baseline`] and the above/below alignments.
    pub baseline: TextBaseline,
    /// Distance from the top of the box to its baseline, for [`PlaceholderAlignment::Baseline`].
    pub baseline_offset: f32,
}

impl PlaceholderRun {
    /// Creates a placeholder.
    pub fn new(
        width: f32,
        height: f32,
        alignment: PlaceholderAlignment,
        baseline: TextBaseline,
        baseline_offset: f32,
    ) -> Self {
        Self {
            width,
            height,
            alignment,
            baseline,
            baseline_offset,
        }
    }

    /// Converts the ascent and descent of the surrounding font into the ascent and descent the
    /// placeholder contributes to its line.
    ///
    /// The returned ascent is also the resolved distance from the top of the box to the line's
    /// baseline.
    pub fn adjust_metrics(&self, ascent: f32, descent: f32) -> (f32, f32) {
        let baseline_adjustment = match self.baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Ideographic => -descent / 2.0,
        };
        match self.alignment {
            PlaceholderAlignment::Baseline => (
                baseline_adjustment + self.baseline_offset,
                -baseline_adjustment + self.height - self.baseline_offset,
            ),
            PlaceholderAlignment::AboveBaseline => {
                (baseline_adjustment + self.height, -baseline_adjustment)
            }
            PlaceholderAlignment::BelowBaseline => {
                (-baseline_adjustment, baseline_adjustment + self.height)
            }
            PlaceholderAlignment::Top => (ascent, self.height - ascent),
            PlaceholderAlignment::Bottom => (self.height - descent, descent),
            PlaceholderAlignment::Middle => {
                let mid = (ascent - descent) / 2.0;
                (mid + self.height / 2.0, -mid + self.height / 2.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(alignment: PlaceholderAlignment) -> PlaceholderRun {
        PlaceholderRun::new(50.0, 50.0, alignment, TextBaseline::Alphabetic, 38.0)
    }

    #[test]
    fn every_alignment_spans_the_box_height() {
        for alignment in [
            PlaceholderAlignment::Baseline,
            PlaceholderAlignment::AboveBaseline,
            PlaceholderAlignment::BelowBaseline,
            PlaceholderAlignment::Top,
            PlaceholderAlignment::Bottom,
            PlaceholderAlignment::Middle,
        ] {
            let (ascent, descent) = placeholder(alignment).adjust_metrics(16.0, 4.0);
            assert_eq!(ascent + descent, 50.0, "{alignment:?}");
        }
    }

    #[test]
    fn alignment_positions() {
        assert_eq!(
            placeholder(PlaceholderAlignment::Baseline).adjust_metrics(16.0, 4.0),
            (38.0, 12.0)
        );
        assert_eq!(
            placeholder(PlaceholderAlignment::AboveBaseline).adjust_metrics(16.0, 4.0),
            (50.0, 0.0)
        );
        assert_eq!(
            placeholder(PlaceholderAlignment::BelowBaseline).adjust_metrics(16.0, 4.0),
            (0.0, 50.0)
        );
        assert_eq!(
            placeholder(PlaceholderAlignment::Top).adjust_metrics(16.0, 4.0),
            (16.0, 34.0)
        );
        assert_eq!(
            placeholder(PlaceholderAlignment::Bottom).adjust_metrics(16.0, 4.0),
            (46.0, 4.0)
        );
        assert_eq!(
            placeholder(PlaceholderAlignment::Middle).adjust_metrics(16.0, 4.0),
            (31.0, 19.0)
        );
    }

    #[test]
    fn ideographic_baseline_shifts_by_half_the_descent() {
        let mut run = placeholder(PlaceholderAlignment::AboveBaseline);
        run.baseline = TextBaseline::Ideographic;
        assert_eq!(run.adjust_metrics(16.0, 4.0), (48.0, 2.0));
    }
}
