// Copyright 2026 the Txt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashbrown::HashMap;

use super::{FakedFont, FontFamily};
use crate::style::FontStyle;

/// A source of font families, such as a platform font manager or a set of registered fonts.
pub trait FontProvider: fmt::Debug + Send + Sync {
    /// Number of families the provider can enumerate.
    fn family_count(&self) -> usize;

    /// Name of the family at `index`.
    fn family_name(&self, index: usize) -> Option<String>;

    /// Returns the family with the given name.
    fn match_family(&self, name: &str) -> Option<FontFamily>;

    /// Returns the name of a family that can render `ch`, for font fallback.
    fn match_character(&self, _ch: char, _style: FontStyle, _locale: &str) -> Option<String> {
        None
    }
}

/// The families resolved for one family list, in order of preference.
#[derive(Debug)]
pub struct ResolvedFonts {
    families: Vec<Arc<FontFamily>>,
}

impl ResolvedFonts {
    /// Creates a resolved collection from its families.
    pub fn new(families: Vec<Arc<FontFamily>>) -> Self {
        Self { families }
    }

    /// The families in order of preference.
    pub fn families(&self) -> &[Arc<FontFamily>] {
        &self.families
    }

    /// The face of the first family that best matches `style`.
    pub fn base_font(&self, style: FontStyle) -> Option<FakedFont> {
        self.families
            .iter()
            .find_map(|family| family.match_style(style))
    }

    /// The best face for `style` in the first family that has a glyph for `ch`.
    pub fn font_for_char(&self, ch: char, style: FontStyle) -> Option<FakedFont> {
        self.families
            .iter()
            .filter_map(|family| family.match_style(style))
            .find(|faked| faked.font.glyph_id(ch).is_some())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FamilyKey {
    families: String,
    locale: String,
}

impl FamilyKey {
    fn new(families: &[String], locale: &str) -> Self {
        let mut joined = String::new();
        for family in families {
            joined.push_str(family);
            joined.push(',');
        }
        Self {
            families: joined,
            locale: locale.into(),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    providers: Vec<Arc<dyn FontProvider>>,
    default_families: Vec<String>,
    fallback_enabled: bool,
    collections: HashMap<FamilyKey, Option<Arc<ResolvedFonts>>>,
    fallback_matches: HashMap<(char, String), Option<Arc<FontFamily>>>,
    fallback_families: HashMap<String, Arc<FontFamily>>,
    fallback_families_for_locale: HashMap<String, Vec<String>>,
}

impl State {
    fn find_family(&self, name: &str) -> Option<Arc<FontFamily>> {
        self.providers
            .iter()
            .filter_map(|provider| provider.match_family(name))
            .find(|family| !family.is_empty())
            .map(Arc::new)
    }

    fn resolve(&mut self, families: &[String], locale: &str) -> Option<Arc<ResolvedFonts>> {
        let key = FamilyKey::new(families, locale);
        if let Some(cached) = self.collections.get(&key) {
            return cached.clone();
        }
        log::debug!("resolving font families {families:?} for locale {locale:?}");

        let mut resolved: Vec<Arc<FontFamily>> = families
            .iter()
            .filter_map(|name| self.find_family(name))
            .collect();
        if resolved.is_empty() {
            // Only the first available default family is used.
            resolved.extend(
                self.default_families
                    .iter()
                    .find_map(|name| self.find_family(name)),
            );
        }
        if resolved.is_empty() {
            self.collections.insert(key, None);
            return None;
        }
        if self.fallback_enabled {
            if let Some(names) = self.fallback_families_for_locale.get(locale) {
                resolved.extend(
                    names
                        .iter()
                        .filter_map(|name| self.fallback_families.get(name).cloned()),
                );
            }
        }
        let fonts = Arc::new(ResolvedFonts::new(resolved));
        self.collections.insert(key, Some(fonts.clone()));
        Some(fonts)
    }

    fn match_fallback(&mut self, ch: char, locale: &str) -> Option<Arc<FontFamily>> {
        let key = (ch, locale.to_string());
        if let Some(cached) = self.fallback_matches.get(&key) {
            return cached.clone();
        }
        let name = self
            .providers
            .iter()
            .find_map(|provider| provider.match_character(ch, FontStyle::default(), locale));
        let family = name.and_then(|name| {
            let names = self
                .fallback_families_for_locale
                .entry(locale.to_string())
                .or_default();
            if !names.contains(&name) {
                names.push(name.clone());
            }
            if let Some(family) = self.fallback_families.get(&name) {
                return Some(family.clone());
            }
            let family = self.find_family(&name)?;
            self.fallback_families.insert(name, family.clone());
            Some(family)
        });
        if let Some(family) = &family {
            log::debug!(
                "fallback family {:?} for U+{:04X} in locale {locale:?}",
                family.name(),
                u32::from(ch)
            );
        }
        self.fallback_matches.insert(key, family.clone());
        family
    }
}

/// The font environment shared by paragraphs.
///
/// A collection resolves family lists against its [`FontProvider`]s and caches the result per
/// family list and locale. When none of the requested families exist, the first available
/// family from [`set_default_families`](Self::set_default_families) is used instead. With font
/// fallback enabled, characters that no resolved family covers are matched through the
/// providers and the matched families are appended to later resolutions for the same locale.
///
/// The collection is meant to be shared through an [`Arc`]; its caches are guarded by a mutex
/// that is held while a family list is resolved, so each key is resolved at most once at a
/// time.
#[derive(Default)]
pub struct FontCollection {
    state: Mutex<State>,
}

impl FontCollection {
    /// Creates an empty collection with font fallback disabled.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a provider. Providers are searched in the order they were added.
    pub fn add_provider(&self, provider: Arc<dyn FontProvider>) {
        let mut state = self.state();
        state.providers.push(provider);
        clear_caches(&mut state);
    }

    /// Sets the families used when none of a requested list can be found.
    pub fn set_default_families(&self, families: Vec<String>) {
        let mut state = self.state();
        state.default_families = families;
        state.collections.clear();
    }

    /// Enables matching of fallback families for characters no resolved family covers.
    pub fn enable_font_fallback(&self) {
        let mut state = self.state();
        state.fallback_enabled = true;
        state.collections.clear();
    }

    /// Disables font fallback.
    pub fn disable_font_fallback(&self) {
        let mut state = self.state();
        state.fallback_enabled = false;
        state.collections.clear();
    }

    /// Whether font fallback is enabled.
    pub fn font_fallback_enabled(&self) -> bool {
        self.state().fallback_enabled
    }

    /// Drops every cached resolution.
    pub fn clear_font_family_cache(&self) {
        clear_caches(&mut self.state());
    }

    /// Resolves a family list for a locale, or `None` if neither the list nor the default
    /// families are available.
    pub fn resolve(&self, families: &[String], locale: &str) -> Option<Arc<ResolvedFonts>> {
        self.state().resolve(families, locale)
    }

    /// Finds a face for `ch` outside the resolved families, when fallback is enabled.
    pub fn fallback_font(&self, ch: char, style: FontStyle, locale: &str) -> Option<FakedFont> {
        let mut state = self.state();
        if !state.fallback_enabled {
            return None;
        }
        let family = state.match_fallback(ch, locale)?;
        family
            .match_style(style)
            .filter(|faked| faked.font.glyph_id(ch).is_some())
    }
}

fn clear_caches(state: &mut State) {
    state.collections.clear();
    state.fallback_matches.clear();
    state.fallback_families.clear();
    state.fallback_families_for_locale.clear();
}

impl fmt::Debug for FontCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("FontCollection")
            .field("providers", &state.providers.len())
            .field("default_families", &state.default_families)
            .field("fallback_enabled", &state.fallback_enabled)
            .field("cached_collections", &state.collections.len())
            .finish_non_exhaustive()
    }
}
