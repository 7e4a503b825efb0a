// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use crate::context::LayoutContext;
use crate::font::FontCollection;
use crate::layout::Paragraph;
use crate::placeholder::PlaceholderRun;
use crate::style::{ParagraphStyle, TextStyle};
use crate::styled_runs::StyledRunTable;
use crate::util::OBJECT_REPLACEMENT;

/// Builder for a [`Paragraph`].
///
/// Text is styled with the style on top of a stack, or with the paragraph's base style when
/// the stack is empty.
#[derive(Debug)]
pub struct ParagraphBuilder {
    style: ParagraphStyle,
    fonts: Arc<FontCollection>,
    context: Arc<LayoutContext>,
    text: Vec<u16>,
    runs: StyledRunTable,
    base_style: TextStyle,
    base_style_index: usize,
    style_stack: Vec<usize>,
    placeholders: Vec<PlaceholderRun>,
    placeholder_offsets: Vec<usize>,
}

impl ParagraphBuilder {
    /// Creates a builder with the default layout context.
    pub fn new(style: ParagraphStyle, fonts: Arc<FontCollection>) -> Self {
        Self::with_context(style, fonts, Arc::new(LayoutContext::new()))
    }

    /// Creates a builder whose paragraphs use `context` for text analysis.
    pub fn with_context(
        style: ParagraphStyle,
        fonts: Arc<FontCollection>,
        context: Arc<LayoutContext>,
    ) -> Self {
        let mut runs = StyledRunTable::new();
        let base_style = style.text_style();
        let base_style_index = runs.add_style(&base_style);
        runs.start_run(base_style_index, 0);
        Self {
            style,
            fonts,
            context,
            text: Vec::new(),
            runs,
            base_style,
            base_style_index,
            style_stack: Vec::new(),
            placeholders: Vec::new(),
            placeholder_offsets: Vec::new(),
        }
    }

    /// Styles the text added next with `style`, until the matching [`pop`](Self::pop).
    pub fn push_style(&mut self, style: &TextStyle) {
        let index = self.runs.add_style(style);
        self.style_stack.push(index);
        self.runs.start_run(index, self.text.len());
    }

    /// Removes the style on top of the stack. Does nothing if the stack is empty.
    pub fn pop(&mut self) {
        if self.style_stack.pop().is_none() {
            return;
        }
        self.runs.start_run(self.current_style_index(), self.text.len());
    }

    /// The style text added next is styled with.
    pub fn peek_style(&self) -> &TextStyle {
        self.runs
            .style(self.current_style_index())
            .unwrap_or(&self.base_style)
    }

    /// Appends text.
    ///
    /// A U+FFFC in `text` is kept as is and laid out as ordinary text; only
    /// [`add_placeholder`](Self::add_placeholder) reserves space for an inline object.
    pub fn add_text(&mut self, text: &str) {
        self.text.extend(text.encode_utf16());
    }

    /// Appends text given as UTF-16 code units.
    pub fn add_text_utf16(&mut self, text: &[u16]) {
        self.text.extend_from_slice(text);
    }

    /// Appends a placeholder for an inline object, standing in the text as one U+FFFC.
    pub fn add_placeholder(&mut self, placeholder: PlaceholderRun) {
        let index = self.current_style_index();
        self.placeholder_offsets.push(self.text.len());
        self.runs.start_run(index, self.text.len());
        self.text.push(OBJECT_REPLACEMENT);
        self.runs.start_run(index, self.text.len());
        self.placeholders.push(placeholder);
    }

    /// The text added so far.
    pub fn text(&self) -> &[u16] {
        &self.text
    }

    /// Builds the paragraph and resets the builder, keeping its paragraph style.
    pub fn build(&mut self) -> Paragraph {
        self.runs.end_run_if_needed(self.text.len());
        let fresh = Self::with_context(
            self.style.clone(),
            self.fonts.clone(),
            self.context.clone(),
        );
        let built = core::mem::replace(self, fresh);
        Paragraph::new(
            built.text,
            built.runs,
            built.placeholders,
            built.placeholder_offsets,
            built.style,
            built.fonts,
            built.context,
        )
    }

    fn current_style_index(&self) -> usize {
        self.style_stack
            .last()
            .copied()
            .unwrap_or(self.base_style_index)
    }
}
