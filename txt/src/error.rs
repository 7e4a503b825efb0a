// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a paragraph cannot be laid out, or a font cannot be loaded.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whatever context was available at the point of
/// failure: the requested family list and locale for font resolution, or the offending code unit
/// offset for text that no style run covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Font families involved in the failure, in request order.
    families: Vec<String>,

    /// Locale tag involved in the failure.
    locale: String,

    /// Code unit offset involved in the failure.
    offset: Option<usize>,

    /// Free-form detail reported by a capability.
    detail: Option<String>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The font families that could not be resolved, for
    /// [`ErrorKind::FontCollectionNotFound`].
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// The locale used for font resolution.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The code unit offset at which the failure was detected, if any.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Extra detail reported by the failing capability, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub(crate) fn font_collection_not_found(families: &[String], locale: &str) -> Self {
        Self {
            kind: ErrorKind::FontCollectionNotFound,
            families: families.to_vec(),
            locale: locale.into(),
            offset: None,
            detail: None,
        }
    }

    /// Creates an error describing a failure of a [`BidiResolver`](crate::BidiResolver).
    pub fn bidi_failed(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::BidiFailed,
            families: Vec::new(),
            locale: String::new(),
            offset: None,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn uncovered_text(offset: usize) -> Self {
        Self {
            kind: ErrorKind::UncoveredText,
            families: Vec::new(),
            locale: String::new(),
            offset: Some(offset),
            detail: None,
        }
    }

    #[cfg(feature = "skrifa")]
    pub(crate) fn invalid_font(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidFont,
            families: Vec::new(),
            locale: String::new(),
            offset: None,
            detail: Some(detail.into()),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::FontCollectionNotFound => write!(
                f,
                "could not find a font collection for families \"{}\" (locale \"{}\")",
                self.families.join(","),
                self.locale
            ),
            ErrorKind::BidiFailed => match &self.detail {
                Some(detail) => write!(f, "bidi resolution failed: {detail}"),
                None => f.write_str("bidi resolution failed"),
            },
            ErrorKind::UncoveredText => match self.offset {
                Some(offset) => write!(f, "code unit {offset} is not covered by a style run"),
                None => f.write_str("text is not covered by a style run"),
            },
            ErrorKind::InvalidFont => match &self.detail {
                Some(detail) => write!(f, "invalid font data: {detail}"),
                None => f.write_str("invalid font data"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Neither the requested font families nor the collection's default families could be found.
    FontCollectionNotFound,

    /// The bidi capability could not order the paragraph.
    BidiFailed,

    /// Part of the text is not covered by any styled run.
    UncoveredText,

    /// Font data could not be parsed.
    InvalidFont,
}
