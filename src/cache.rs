//! Text store caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use crate::error::TextError;
use crate::field::Field;
use crate::locale::Locale;
use crate::store::TextStore;

const CACHE_SIZE: usize = 100;

/// Cache of built text stores, keyed by field and locale.
///
/// Owned by the provider that fills it. Entries are immutable once built and
/// never invalidated; a rebuild of the same key produces an equal store.
pub(crate) struct StoreCache {
    inner: Mutex<LruCache<(Field, Locale), Arc<TextStore>>>,
}

impl StoreCache {
    pub(crate) fn new() -> Self {
        StoreCache {
            inner: Mutex::new(LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap())),
        }
    }

    /// Get the store for `(field, locale)`, building it on first use.
    pub(crate) fn get_or_build<F>(
        &self,
        field: Field,
        locale: &Locale,
        build: F,
    ) -> Result<Arc<TextStore>, TextError>
    where
        F: FnOnce() -> Result<TextStore, TextError>,
    {
        let mut cache = self.inner.lock().unwrap();

        if let Some(store) = cache.get(&(field, locale.clone())) {
            return Ok(Arc::clone(store));
        }

        let store = Arc::new(build()?);
        cache.put((field, locale.clone()), Arc::clone(&store));
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_once_per_key() {
        let cache = StoreCache::new();
        let mut builds = 0;

        for _ in 0..3 {
            cache
                .get_or_build(Field::MonthOfYear, &Locale::EN_US, || {
                    builds += 1;
                    TextStore::build([])
                })
                .unwrap();
        }

        assert_eq!(builds, 1);
    }

    #[test]
    fn test_build_errors_are_not_cached() {
        let cache = StoreCache::new();

        let err = cache.get_or_build(Field::Era, &Locale::EN_US, || {
            Err(TextError::InvalidArgument {
                reason: "broken source".to_string(),
            })
        });
        assert!(err.is_err());

        // A later successful build still runs.
        let store = cache.get_or_build(Field::Era, &Locale::EN_US, || TextStore::build([]));
        assert!(store.is_ok());
    }
}
