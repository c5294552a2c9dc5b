use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use caltext::{
    BuiltinSource, CustomTextProvider, Field, Locale, LocaleSource, StandardTextProvider,
    TextMapping, TextProvider, TextStyle,
};

/// Delegates to the built-in tables and counts how often the source is hit.
struct CountingSource {
    hits: AtomicUsize,
}

impl LocaleSource for CountingSource {
    fn mapping(&self, field: Field, style: TextStyle, locale: &Locale) -> Option<TextMapping> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        BuiltinSource.mapping(field, style, locale)
    }
}

#[test]
fn test_store_is_built_once_per_field_and_locale() {
    let source = Arc::new(CountingSource {
        hits: AtomicUsize::new(0),
    });
    let counting: Arc<dyn LocaleSource> = source.clone();
    let provider = StandardTextProvider::with_source(counting);

    provider
        .text(Field::MonthOfYear, 1, TextStyle::Full, &Locale::EN_US)
        .unwrap();
    let hits_after_first = source.hits.load(Ordering::SeqCst);
    assert!(hits_after_first > 0);

    // Different value and style, same (field, locale): served from cache.
    provider
        .text(Field::MonthOfYear, 7, TextStyle::Short, &Locale::EN_US)
        .unwrap();
    provider
        .candidates(Field::MonthOfYear, TextStyle::Full, &Locale::EN_US)
        .unwrap();
    assert_eq!(source.hits.load(Ordering::SeqCst), hits_after_first);

    // A different locale builds its own store.
    provider
        .text(Field::MonthOfYear, 1, TextStyle::Full, &Locale::new("en-GB"))
        .unwrap();
    assert!(source.hits.load(Ordering::SeqCst) > hits_after_first);
}

#[test]
fn test_repeated_lookups_are_identical() {
    let provider = StandardTextProvider::new();
    let first = provider
        .text(Field::DayOfWeek, 7, TextStyle::Full, &Locale::EN_US)
        .unwrap();
    let second = provider
        .text(Field::DayOfWeek, 7, TextStyle::Full, &Locale::EN_US)
        .unwrap();

    assert_eq!(first.as_deref(), Some("Sunday"));
    assert_eq!(first, second);
}

#[test]
fn test_candidates_are_longest_first() {
    let provider = StandardTextProvider::new();
    let candidates = provider
        .candidates(Field::MonthOfYear, TextStyle::Full, &Locale::EN_US)
        .unwrap();

    assert!(!candidates.is_empty());
    let lengths: Vec<usize> = candidates.iter().map(|c| c.text.chars().count()).collect();
    let mut sorted = lengths.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(lengths, sorted);
    assert_eq!(candidates[0].text, "September");
}

#[test]
fn test_candidates_are_restartable() {
    let provider = StandardTextProvider::new();
    let first = provider
        .candidates(Field::Era, TextStyle::Short, &Locale::EN_US)
        .unwrap();
    let second = provider
        .candidates(Field::Era, TextStyle::Short, &Locale::EN_US)
        .unwrap();

    assert_eq!(first.iter().count(), 2);
    assert_eq!(&*first, &*second);
}

#[test]
fn test_custom_provider_candidates_for_non_full_style_fail() {
    let mapping: TextMapping = [(1, "JNY")].into_iter().collect();
    let provider = CustomTextProvider::new(mapping).unwrap();

    let err = provider
        .candidates(Field::MonthOfYear, TextStyle::Narrow, &Locale::EN_US)
        .unwrap_err();
    assert_eq!(
        err,
        caltext::TextError::UnsupportedStyle {
            style: TextStyle::Narrow,
        }
    );
}

#[test]
fn test_custom_provider_ignores_locale() {
    let mapping: TextMapping = [(1, "JNY")].into_iter().collect();
    let provider = CustomTextProvider::new(mapping).unwrap();

    let en = provider
        .text(Field::MonthOfYear, 1, TextStyle::Full, &Locale::EN_US)
        .unwrap();
    let fr = provider
        .text(Field::MonthOfYear, 1, TextStyle::Full, &Locale::new("fr-FR"))
        .unwrap();
    assert_eq!(en, fr);
}
