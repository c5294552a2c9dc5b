//! The field text pipeline unit.

use std::sync::Arc;

use super::pipeline::{
    FieldPrinterParser, NumberPrinterParser, ParseContext, PrintContext,
};
use crate::error::{ParseError, PrintError};
use crate::field::Field;
use crate::provider::TextProvider;
use crate::style::TextStyle;

/// Prints a field through a text provider, falling back to a plain number
/// when no text mapping exists; parses by longest-match against the
/// provider's candidates, falling back to the numeric parser.
///
/// Holds no mutable state; a single unit serves concurrent print and parse
/// operations.
pub struct TextPrinterParser {
    field: Field,
    style: TextStyle,
    provider: Arc<dyn TextProvider>,
    fallback: NumberPrinterParser,
}

impl TextPrinterParser {
    pub fn new(field: Field, style: TextStyle, provider: Arc<dyn TextProvider>) -> Self {
        TextPrinterParser {
            field,
            style,
            provider,
            fallback: NumberPrinterParser::new(field),
        }
    }
}

impl FieldPrinterParser for TextPrinterParser {
    fn print(&self, ctx: &PrintContext<'_>, out: &mut String) -> Result<(), PrintError> {
        let value = ctx.value(self.field)?;
        match self
            .provider
            .text(self.field, value, self.style, ctx.locale())?
        {
            Some(text) => out.push_str(&text),
            None => out.push_str(&value.to_string()),
        }
        Ok(())
    }

    fn parse(&self, ctx: &mut ParseContext<'_>) -> Result<(), ParseError> {
        let start = ctx.position();

        // A provider error surfaces as a failed match at the anchor.
        let candidates = self
            .provider
            .candidates(self.field, self.style, ctx.locale())
            .map_err(|_| ParseError::NoMatch {
                field: self.field,
                position: start,
            })?;

        // Candidates are longest-first, so a prefix of a longer valid
        // candidate can never pre-empt it.
        for candidate in candidates.iter() {
            if let Some(matched) = match_ignore_case(ctx.remaining(), &candidate.text) {
                ctx.advance(matched);
                ctx.set(self.field, candidate.value);
                return Ok(());
            }
        }

        // Runs even when the candidate set is empty; anchors its failure at
        // the same position.
        self.fallback.parse(ctx)
    }
}

/// Case-insensitive prefix match; returns the matched length in bytes of
/// `input`, or `None` if `input` does not start with `candidate`.
fn match_ignore_case(input: &str, candidate: &str) -> Option<usize> {
    let mut input_chars = input.char_indices();
    let mut end = 0;
    for want in candidate.chars() {
        let (index, got) = input_chars.next()?;
        if got != want && !got.to_lowercase().eq(want.to_lowercase()) {
            return None;
        }
        end = index + got.len_utf8();
    }
    Some(end)
}
