// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::bidi::{BidiResolver, UnicodeBidiResolver};
use crate::line_break::{IcuLineBreaker, LineBreaker};
use crate::word::{IcuWordBreaker, WordBreaker};

/// Text analysis capabilities shared by paragraphs.
///
/// The default context breaks lines and words with ICU4X segmenters and orders text with
/// `unicode-bidi`. Any of them can be replaced.
pub struct LayoutContext {
    pub(crate) line_breaker: Box<dyn LineBreaker>,
    pub(crate) bidi: Box<dyn BidiResolver>,
    pub(crate) words: Box<dyn WordBreaker>,
}

impl LayoutContext {
    /// Creates a context with the default capabilities.
    pub fn new() -> Self {
        Self {
            line_breaker: Box::new(IcuLineBreaker),
            bidi: Box::new(UnicodeBidiResolver),
            words: Box::new(IcuWordBreaker),
        }
    }

    /// Replaces the line breaker.
    pub fn with_line_breaker(mut self, line_breaker: impl LineBreaker + 'static) -> Self {
        self.line_breaker = Box::new(line_breaker);
        self
    }

    /// Replaces the bidi resolver.
    pub fn with_bidi_resolver(mut self, bidi: impl BidiResolver + 'static) -> Self {
        self.bidi = Box::new(bidi);
        self
    }

    /// Replaces the word breaker.
    pub fn with_word_breaker(mut self, words: impl WordBreaker + 'static) -> Self {
        self.words = Box::new(words);
        self
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayoutContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContext").finish_non_exhaustive()
    }
}
