// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use hashbrown::HashMap;

use super::{FontFamily, FontProvider, FontResource};
use crate::style::FontStyle;

#[derive(Debug)]
struct RegisteredFamily {
    name: String,
    fonts: Vec<Arc<dyn FontResource>>,
}

/// A [`FontProvider`] over fonts registered by the application.
///
/// Families are looked up case-insensitively. A font can be registered under its own family name
/// or under an alias.
#[derive(Debug, Default)]
pub struct TypefaceProvider {
    families: HashMap<String, RegisteredFamily>,
    order: Vec<String>,
}

impl TypefaceProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a font under its own family name.
    pub fn register(&mut self, font: Arc<dyn FontResource>) {
        let name = font.family_name().to_string();
        self.register_with_alias(font, &name);
    }

    /// Registers a font under `family_name`.
    pub fn register_with_alias(&mut self, font: Arc<dyn FontResource>, family_name: &str) {
        if family_name.is_empty() {
            return;
        }
        let key = canonical_name(family_name);
        let family = self.families.entry(key.clone()).or_insert_with(|| {
            self.order.push(key);
            RegisteredFamily {
                name: family_name.to_string(),
                fonts: Vec::new(),
            }
        });
        family.fonts.push(font);
    }
}

fn canonical_name(name: &str) -> String {
    name.to_lowercase()
}

impl FontProvider for TypefaceProvider {
    fn family_count(&self) -> usize {
        self.order.len()
    }

    fn family_name(&self, index: usize) -> Option<String> {
        let key = self.order.get(index)?;
        self.families.get(key).map(|family| family.name.clone())
    }

    fn match_family(&self, name: &str) -> Option<FontFamily> {
        let family = self.families.get(&canonical_name(name))?;
        Some(FontFamily::new(family.name.clone(), family.fonts.clone()))
    }

    fn match_character(&self, ch: char, _style: FontStyle, _locale: &str) -> Option<String> {
        self.order.iter().find_map(|key| {
            let family = self.families.get(key)?;
            family
                .fonts
                .iter()
                .any(|font| font.glyph_id(ch).is_some())
                .then(|| family.name.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::TestFont;

    fn provider() -> TypefaceProvider {
        let mut provider = TypefaceProvider::new();
        provider.register(TestFont::with_coverage(
            "Latin",
            FontStyle::default(),
            vec!['a'..='z'],
        ));
        provider.register(TestFont::with_coverage(
            "Hebrew",
            FontStyle::default(),
            vec!['\u{5d0}'..='\u{5ea}'],
        ));
        provider.register_with_alias(TestFont::new("Latin", FontStyle::default()), "Body");
        provider
    }

    #[test]
    fn families_are_listed_in_registration_order() {
        let provider = provider();
        assert_eq!(provider.family_count(), 3);
        assert_eq!(provider.family_name(0), Some("Latin".into()));
        assert_eq!(provider.family_name(1), Some("Hebrew".into()));
        assert_eq!(provider.family_name(2), Some("Body".into()));
        assert_eq!(provider.family_name(3), None);
    }

    #[test]
    fn families_match_case_insensitively() {
        let provider = provider();
        let family = provider.match_family("lAtIn").unwrap();
        assert_eq!(family.name(), "Latin");
        assert_eq!(family.fonts().len(), 1);
        assert_eq!(provider.match_family("BODY").unwrap().name(), "Body");
        assert!(provider.match_family("Missing").is_none());
    }

    #[test]
    fn registering_under_an_empty_name_is_ignored() {
        let mut provider = TypefaceProvider::new();
        provider.register(TestFont::new("", FontStyle::default()));
        assert_eq!(provider.family_count(), 0);
        assert_eq!(provider.family_name(0), None);
    }

    #[test]
    fn characters_fall_back_to_the_first_covering_family() {
        let provider = provider();
        let style = FontStyle::default();
        assert_eq!(provider.match_character('q', style, ""), Some("Latin".into()));
        assert_eq!(provider.match_character('\u{5d1}', style, ""), Some("Hebrew".into()));
        // The alias covers everything, so it is the last resort.
        assert_eq!(provider.match_character('\u{4e00}', style, ""), Some("Body".into()));
    }
}
