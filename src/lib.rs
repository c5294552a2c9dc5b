//! caltext - locale-aware text for calendar fields
//!
//! This crate prints and parses calendar field values (month, day-of-week,
//! era, am/pm, quarter) as locale-aware text instead of raw numbers. Where a
//! field has no text for the requested style and locale, printing falls back
//! to an unpadded signed decimal and parsing falls back to the numeric
//! parser, so every pipeline is total over its fields.

pub mod error;
pub mod field;
pub mod format;
pub mod provider;
pub mod store;
pub mod style;

mod cache;
mod locale;

pub use error::{ParseError, PrintError, TextError};
pub use field::Field;
pub use format::{FieldValues, Formatter, FormatterBuilder};
pub use locale::{BuiltinSource, Locale, LocaleSource};
pub use provider::{CustomTextProvider, StandardTextProvider, TextProvider};
pub use store::{Candidate, TextMapping, TextStore};
pub use style::TextStyle;
