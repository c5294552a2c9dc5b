//! Locale identifiers and the locale text source seam.

mod builtin;

pub use builtin::BuiltinSource;

use std::borrow::Cow;
use std::fmt;

use crate::field::Field;
use crate::store::TextMapping;
use crate::style::TextStyle;

/// A language/region identifier, e.g. `en-US`.
///
/// The text core treats this as an opaque key: it only selects which
/// mappings a [`LocaleSource`] returns, and keys the store cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: Cow<'static, str>,
}

impl Locale {
    /// US English, the default locale.
    pub const EN_US: Locale = Locale {
        id: Cow::Borrowed("en-US"),
    };

    pub fn new(id: impl Into<String>) -> Self {
        Locale {
            id: Cow::Owned(id.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The primary language subtag: "en" for "en-US".
    pub fn language(&self) -> &str {
        self.id.split(['-', '_']).next().unwrap_or(&self.id)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A source of value→text mappings per field, style and locale.
///
/// Implementations must be immutable for the process lifetime. Returning
/// `None` is a normal outcome, not an error; downstream lookups fall back to
/// plain numbers.
pub trait LocaleSource: Send + Sync {
    fn mapping(&self, field: Field, style: TextStyle, locale: &Locale) -> Option<TextMapping>;
}
