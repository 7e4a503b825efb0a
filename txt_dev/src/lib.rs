// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Txt Dev
//!
//! This crate provides utilities for developing Txt.

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

impl Sample {
    /// The sample encoded as UTF-16 code units.
    pub fn utf16(&self) -> Vec<u16> {
        self.text.encode_utf16().collect()
    }
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// The Latin text sample.
    pub latin: Sample,
    /// The Arabic text sample, right-to-left only.
    pub arabic: Sample,
    /// Latin words around a Hebrew word.
    pub mixed: Sample,
    /// Latin words with decomposed accents (base letter followed by a combining mark).
    pub combining: Sample,
    /// The Japanese text sample, without spaces.
    pub japanese: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        Self {
            latin: Sample {
                name: "latin",
                text: include_str!("../assets/text_samples/latin.txt"),
            },
            arabic: Sample {
                name: "arabic",
                text: include_str!("../assets/text_samples/arabic.txt"),
            },
            mixed: Sample {
                name: "mixed",
                text: include_str!("../assets/text_samples/mixed.txt"),
            },
            combining: Sample {
                name: "combining",
                text: include_str!("../assets/text_samples/combining.txt"),
            },
            japanese: Sample {
                name: "japanese",
                text: include_str!("../assets/text_samples/japanese.txt"),
            },
        }
    }

    /// Iterates over every sample.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        [
            &self.latin,
            &self.arabic,
            &self.mixed,
            &self.combining,
            &self.japanese,
        ]
        .into_iter()
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
