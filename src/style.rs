//! Text styles: the requested verbosity of field text.

use std::fmt;

/// How verbose field text should be.
///
/// Standalone variants are the grammatical forms some languages use when the
/// text stands on its own rather than inside a date phrase. English has no
/// distinct standalone forms, so lookups for a standalone style fall back to
/// the base style at the provider level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextStyle {
    /// Full name, e.g. "January"
    Full,
    /// Full name for standalone use
    FullStandalone,
    /// Abbreviated name, e.g. "Jan"
    Short,
    /// Abbreviated name for standalone use
    ShortStandalone,
    /// Single letter or minimal form, e.g. "J"
    Narrow,
    /// Narrow form for standalone use
    NarrowStandalone,
}

impl TextStyle {
    /// All styles, in fallback order (narrow before short before full).
    pub const ALL: [TextStyle; 6] = [
        TextStyle::Narrow,
        TextStyle::NarrowStandalone,
        TextStyle::Short,
        TextStyle::ShortStandalone,
        TextStyle::Full,
        TextStyle::FullStandalone,
    ];

    /// True for the standalone variants.
    pub fn is_standalone(self) -> bool {
        matches!(
            self,
            TextStyle::FullStandalone | TextStyle::ShortStandalone | TextStyle::NarrowStandalone
        )
    }

    /// The standalone counterpart of this style.
    pub fn standalone(self) -> TextStyle {
        match self {
            TextStyle::Full | TextStyle::FullStandalone => TextStyle::FullStandalone,
            TextStyle::Short | TextStyle::ShortStandalone => TextStyle::ShortStandalone,
            TextStyle::Narrow | TextStyle::NarrowStandalone => TextStyle::NarrowStandalone,
        }
    }

    /// The non-standalone counterpart of this style.
    pub fn base(self) -> TextStyle {
        match self {
            TextStyle::Full | TextStyle::FullStandalone => TextStyle::Full,
            TextStyle::Short | TextStyle::ShortStandalone => TextStyle::Short,
            TextStyle::Narrow | TextStyle::NarrowStandalone => TextStyle::Narrow,
        }
    }

    /// Lower-case name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TextStyle::Full => "full",
            TextStyle::FullStandalone => "full-standalone",
            TextStyle::Short => "short",
            TextStyle::ShortStandalone => "short-standalone",
            TextStyle::Narrow => "narrow",
            TextStyle::NarrowStandalone => "narrow-standalone",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
