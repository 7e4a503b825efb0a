// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph layout.
//!
//! Txt turns a run of styled text into a line-broken, bidirectionally ordered and
//! glyph-positioned [`Paragraph`] that can be queried for metrics, selection rectangles,
//! caret positions and word boundaries.
//!
//! Paragraphs are assembled with a [`ParagraphBuilder`], which collects text, a stack of
//! [`TextStyle`]s and inline [`PlaceholderRun`]s. Fonts come from a shared [`FontCollection`],
//! which resolves family lists through registered [`FontProvider`]s into [`FontResource`]s.
//! Line-break opportunities, bidi ordering and word boundaries are computed by the capabilities
//! held in a [`LayoutContext`].
//!
//! ## Features
//!
//! - `skrifa` (enabled by default): [`SkrifaFont`], a [`FontResource`] that reads OpenType data.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use txt::{FontCollection, ParagraphBuilder, ParagraphStyle, TextStyle, TypefaceProvider};
//!
//! # fn load_fonts(_: &mut TypefaceProvider) {}
//! let mut provider = TypefaceProvider::new();
//! load_fonts(&mut provider);
//! let fonts = Arc::new(FontCollection::new());
//! fonts.add_provider(Arc::new(provider));
//!
//! let mut builder = ParagraphBuilder::new(ParagraphStyle::default(), fonts);
//! builder.push_style(&TextStyle {
//!     font_size: 16.0,
//!     ..TextStyle::default()
//! });
//! builder.add_text("Hello, world!");
//! let mut paragraph = builder.build();
//! paragraph.layout(200.0).expect("fonts were registered");
//! println!("{} lines, {}px tall", paragraph.line_count(), paragraph.height());
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bidi;
mod builder;
mod context;
mod error;
mod placeholder;
mod shape;
mod styled_runs;
mod util;
mod word;

pub mod font;
pub mod layout;
pub mod line_break;
pub mod style;

#[cfg(test)]
mod tests;

pub use bidi::{BidiResolver, UnicodeBidiResolver, VisualRun};
pub use builder::ParagraphBuilder;
pub use context::LayoutContext;
pub use error::{Error, ErrorKind};
pub use font::{
    FakedFont, FontCollection, FontFamily, FontMetrics, FontProvider, FontResource, GlyphBounds,
    GlyphId, ResolvedFonts, Synthesis, TypefaceProvider,
};
#[cfg(feature = "skrifa")]
pub use font::SkrifaFont;
pub use layout::{
    Affinity, CodeUnitRun, Extent, GlyphPosition, LineMetrics, PaintRecord, Paragraph,
    PositionWithAffinity, Rect, RectHeightStyle, RectWidthStyle, TextBox,
};
pub use line_break::{BreakOptions, IcuLineBreaker, LineBreak, LineBreaker};
pub use placeholder::{PlaceholderAlignment, PlaceholderRun, TextBaseline};
pub use style::{
    BreakStrategy, FontSlant, FontStyle, FontWeight, FontWidth, ParagraphStyle, TextAlign,
    TextDirection, TextHeightBehavior, TextStyle,
};
pub use styled_runs::{StyledRun, StyledRunTable};
pub use word::{IcuWordBreaker, WordBreaker};
