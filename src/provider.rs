//! Text providers: where field text comes from.
//!
//! The printer/parser is decoupled from any particular data source through
//! the [`TextProvider`] capability. Two variants exist: the standard
//! provider over a [`LocaleSource`], and a provider over a single
//! caller-supplied map.

use std::sync::Arc;

use crate::cache::StoreCache;
use crate::error::TextError;
use crate::field::Field;
use crate::locale::{BuiltinSource, Locale, LocaleSource};
use crate::store::{Candidate, TextMapping, TextStore};
use crate::style::TextStyle;

/// Capability mapping (field, value, style, locale) to display text.
///
/// Implementations are pure over immutable backing data: identical arguments
/// always produce identical results, which is what makes caching sound.
pub trait TextProvider: Send + Sync {
    /// The display text for `value`, or `None` when no mapping exists.
    fn text(
        &self,
        field: Field,
        value: i64,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, TextError>;

    /// All (text, value) candidates for parsing, longest first.
    ///
    /// The returned slice is restartable: a parser may scan it once per
    /// input offset.
    fn candidates(
        &self,
        field: Field,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Arc<[Candidate]>, TextError>;
}

/// Provider backed by a [`LocaleSource`], building and caching one
/// [`TextStore`] per (field, locale) pair on first use.
pub struct StandardTextProvider {
    source: Arc<dyn LocaleSource>,
    cache: StoreCache,
}

impl StandardTextProvider {
    /// A provider over the built-in English tables.
    pub fn new() -> Self {
        Self::with_source(Arc::new(BuiltinSource))
    }

    pub fn with_source(source: Arc<dyn LocaleSource>) -> Self {
        StandardTextProvider {
            source,
            cache: StoreCache::new(),
        }
    }

    fn store(&self, field: Field, locale: &Locale) -> Result<Arc<TextStore>, TextError> {
        self.cache.get_or_build(field, locale, || {
            let mappings = TextStyle::ALL.iter().filter_map(|&style| {
                self.source
                    .mapping(field, style, locale)
                    .map(|mapping| (style, mapping))
            });
            TextStore::build(mappings)
        })
    }

    /// Styles tried for a lookup: the requested style, then its base form
    /// when the requested style is standalone.
    fn lookup_styles(style: TextStyle) -> Vec<TextStyle> {
        if style.is_standalone() {
            vec![style, style.base()]
        } else {
            vec![style]
        }
    }
}

impl Default for StandardTextProvider {
    fn default() -> Self {
        StandardTextProvider::new()
    }
}

impl TextProvider for StandardTextProvider {
    fn text(
        &self,
        field: Field,
        value: i64,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, TextError> {
        let store = self.store(field, locale)?;
        for lookup in Self::lookup_styles(style) {
            if let Some(text) = store.text_for(value, lookup) {
                return Ok(Some(text.to_string()));
            }
        }
        Ok(None)
    }

    fn candidates(
        &self,
        field: Field,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Arc<[Candidate]>, TextError> {
        let store = self.store(field, locale)?;
        let styles = Self::lookup_styles(style);
        Ok(Arc::from(store.candidates(&styles)))
    }
}

/// Provider over a single caller-supplied value→text map.
///
/// Only [`TextStyle::Full`] is supported; asking for any other style fails
/// with [`TextError::UnsupportedStyle`].
pub struct CustomTextProvider {
    candidates: Arc<[Candidate]>,
    store: TextStore,
}

impl CustomTextProvider {
    /// Validates the map up front: duplicate text and empty text fail here,
    /// before the map is ever used for printing or parsing.
    pub fn new(mapping: TextMapping) -> Result<Self, TextError> {
        let store = TextStore::build([(TextStyle::Full, mapping)])?;
        let candidates = Arc::from(store.candidates(&[TextStyle::Full]));
        Ok(CustomTextProvider { candidates, store })
    }
}

impl TextProvider for CustomTextProvider {
    fn text(
        &self,
        _field: Field,
        value: i64,
        style: TextStyle,
        _locale: &Locale,
    ) -> Result<Option<String>, TextError> {
        if style != TextStyle::Full {
            return Err(TextError::UnsupportedStyle { style });
        }
        Ok(self
            .store
            .text_for(value, TextStyle::Full)
            .map(str::to_string))
    }

    fn candidates(
        &self,
        _field: Field,
        style: TextStyle,
        _locale: &Locale,
    ) -> Result<Arc<[Candidate]>, TextError> {
        if style != TextStyle::Full {
            return Err(TextError::UnsupportedStyle { style });
        }
        Ok(Arc::clone(&self.candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let provider = StandardTextProvider::new();
        let text = provider
            .text(Field::MonthOfYear, 3, TextStyle::Full, &Locale::EN_US)
            .unwrap();
        assert_eq!(text.as_deref(), Some("March"));
    }

    #[test]
    fn test_standalone_falls_back_to_base_style() {
        let provider = StandardTextProvider::new();
        let text = provider
            .text(
                Field::MonthOfYear,
                3,
                TextStyle::FullStandalone,
                &Locale::EN_US,
            )
            .unwrap();
        assert_eq!(text.as_deref(), Some("March"));
    }

    #[test]
    fn test_missing_mapping_is_none_not_error() {
        let provider = StandardTextProvider::new();
        let text = provider
            .text(Field::DayOfMonth, 17, TextStyle::Full, &Locale::EN_US)
            .unwrap();
        assert_eq!(text, None);
    }

    #[test]
    fn test_unknown_locale_has_no_candidates() {
        let provider = StandardTextProvider::new();
        let candidates = provider
            .candidates(Field::MonthOfYear, TextStyle::Full, &Locale::new("fr-FR"))
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_custom_provider_is_full_only() {
        let mapping: TextMapping = [(1, "JNY"), (2, "FBY")].into_iter().collect();
        let provider = CustomTextProvider::new(mapping).unwrap();

        let text = provider
            .text(Field::MonthOfYear, 1, TextStyle::Full, &Locale::EN_US)
            .unwrap();
        assert_eq!(text.as_deref(), Some("JNY"));

        let err = provider
            .text(Field::MonthOfYear, 1, TextStyle::Short, &Locale::EN_US)
            .unwrap_err();
        assert_eq!(
            err,
            TextError::UnsupportedStyle {
                style: TextStyle::Short,
            }
        );
    }

    #[test]
    fn test_custom_provider_rejects_ambiguous_map() {
        let mapping: TextMapping = [(1, "X"), (2, "X")].into_iter().collect();
        assert!(matches!(
            CustomTextProvider::new(mapping),
            Err(TextError::DuplicateText { .. })
        ));
    }
}
