//! Formatter construction and the print/parse pipeline.

mod pipeline;
mod text;

pub use pipeline::{
    FieldPrinterParser, FieldValues, LiteralPrinterParser, NumberPrinterParser, ParseContext,
    PrintContext,
};
pub use text::TextPrinterParser;

use std::sync::Arc;

use crate::error::{ParseError, PrintError, TextError};
use crate::field::Field;
use crate::locale::Locale;
use crate::provider::{CustomTextProvider, StandardTextProvider, TextProvider};
use crate::store::TextMapping;
use crate::style::TextStyle;

/// Builds a [`Formatter`] from a sequence of printer/parser units.
///
/// Text units appended through the same builder share one standard provider,
/// so each (field, locale) table is built at most once per builder session.
pub struct FormatterBuilder {
    units: Vec<Box<dyn FieldPrinterParser>>,
    provider: Arc<StandardTextProvider>,
}

impl FormatterBuilder {
    pub fn new() -> Self {
        Self::with_provider(Arc::new(StandardTextProvider::new()))
    }

    /// Build against a specific standard provider, e.g. one over a custom
    /// [`crate::LocaleSource`].
    pub fn with_provider(provider: Arc<StandardTextProvider>) -> Self {
        FormatterBuilder {
            units: Vec::new(),
            provider,
        }
    }

    /// Append field text in the full style.
    pub fn append_text(self, field: Field) -> Self {
        self.append_text_styled(field, TextStyle::Full)
    }

    /// Append field text in an explicit style.
    pub fn append_text_styled(mut self, field: Field, style: TextStyle) -> Self {
        let provider: Arc<dyn TextProvider> = self.provider.clone();
        self.units
            .push(Box::new(TextPrinterParser::new(field, style, provider)));
        self
    }

    /// Append field text from a caller-supplied value→text map, printed and
    /// parsed in the full style only.
    ///
    /// The map is validated here: values outside the field's range fail with
    /// [`TextError::InvalidArgument`], duplicate and empty text with
    /// [`TextError::DuplicateText`] and [`TextError::EmptyText`]. Values the
    /// map does not cover print and parse as plain numbers.
    pub fn append_text_map<I, S>(mut self, field: Field, pairs: I) -> Result<Self, TextError>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mapping: TextMapping = pairs.into_iter().collect();
        let range = field.range();
        for (value, _) in mapping.iter() {
            if !range.contains(&value) {
                return Err(TextError::InvalidArgument {
                    reason: format!("value {value} out of range for {field}"),
                });
            }
        }
        let provider: Arc<dyn TextProvider> = Arc::new(CustomTextProvider::new(mapping)?);
        self.units.push(Box::new(TextPrinterParser::new(
            field,
            TextStyle::Full,
            provider,
        )));
        Ok(self)
    }

    /// Append a field printed and parsed as an unpadded signed decimal.
    pub fn append_value(mut self, field: Field) -> Self {
        self.units.push(Box::new(NumberPrinterParser::new(field)));
        self
    }

    /// Append literal text, emitted and expected verbatim.
    pub fn append_literal(mut self, text: impl Into<String>) -> Self {
        self.units.push(Box::new(LiteralPrinterParser::new(text)));
        self
    }

    /// Localized offset text, e.g. "GMT+2". Not implemented; always fails.
    pub fn append_localized_offset(self) -> Result<Self, TextError> {
        Err(TextError::NotImplemented {
            operation: "localized offset text",
        })
    }

    /// Localized time-zone names, e.g. "Pacific Standard Time". Not
    /// implemented; always fails.
    pub fn append_zone_text(self) -> Result<Self, TextError> {
        Err(TextError::NotImplemented {
            operation: "localized zone names",
        })
    }

    /// Finish building. The formatter uses `en-US` until
    /// [`Formatter::with_locale`] overrides it.
    pub fn build(self) -> Formatter {
        Formatter {
            units: self.units.into(),
            locale: Locale::default(),
        }
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        FormatterBuilder::new()
    }
}

impl std::fmt::Debug for FormatterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterBuilder")
            .field("units", &self.units.len())
            .finish()
    }
}

/// An immutable sequence of printer/parser units.
///
/// Cheap to clone via [`Formatter::with_locale`]; safe to share across
/// threads.
pub struct Formatter {
    units: Arc<[Box<dyn FieldPrinterParser>]>,
    locale: Locale,
}

impl Formatter {
    /// The same pipeline with a different locale.
    pub fn with_locale(&self, locale: Locale) -> Formatter {
        Formatter {
            units: Arc::clone(&self.units),
            locale,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Print `values`, validating each against its field's range first.
    pub fn format(&self, values: &FieldValues) -> Result<String, PrintError> {
        for (field, value) in values.iter() {
            if !field.range().contains(&value) {
                return Err(PrintError::OutOfRange { field, value });
            }
        }
        let ctx = PrintContext::new(values, &self.locale);
        let mut out = String::new();
        for unit in self.units.iter() {
            unit.print(&ctx, &mut out)?;
        }
        Ok(out)
    }

    /// Parse `input` completely; trailing input is an error.
    pub fn parse(&self, input: &str) -> Result<FieldValues, ParseError> {
        let (values, consumed) = self.parse_partial(input)?;
        if consumed < input.len() {
            return Err(ParseError::TrailingInput { position: consumed });
        }
        Ok(values)
    }

    /// Parse a prefix of `input`; returns the values and the bytes consumed.
    pub fn parse_partial(&self, input: &str) -> Result<(FieldValues, usize), ParseError> {
        let mut ctx = ParseContext::new(input, &self.locale);
        for unit in self.units.iter() {
            unit.parse(&mut ctx)?;
        }
        let consumed = ctx.position();
        Ok((ctx.into_values(), consumed))
    }
}
