//! Printer/parser pipeline units and the contexts they run in.

use std::collections::BTreeMap;

use crate::error::{ParseError, PrintError};
use crate::field::Field;
use crate::locale::Locale;

/// Field values being printed, or recovered by a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<Field, i64>,
}

impl FieldValues {
    pub fn new() -> Self {
        FieldValues::default()
    }

    pub fn set(&mut self, field: Field, value: i64) {
        self.values.insert(field, value);
    }

    /// `set` in builder position.
    pub fn with(mut self, field: Field, value: i64) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> Option<i64> {
        self.values.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, i64)> + '_ {
        self.values.iter().map(|(&field, &value)| (field, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for FieldValues {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        let year = i64::from(date.year());
        let mut values = FieldValues::new();
        values.set(Field::Era, i64::from(date.year() >= 1));
        values.set(Field::Year, year);
        values.set(Field::QuarterOfYear, i64::from(date.month0() / 3 + 1));
        values.set(Field::MonthOfYear, i64::from(date.month()));
        values.set(Field::DayOfMonth, i64::from(date.day()));
        values.set(
            Field::DayOfWeek,
            i64::from(date.weekday().number_from_monday()),
        );
        values
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveTime> for FieldValues {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        let mut values = FieldValues::new();
        values.set(Field::AmPmOfDay, i64::from(time.hour() / 12));
        values.set(Field::HourOfDay, i64::from(time.hour()));
        values.set(Field::MinuteOfHour, i64::from(time.minute()));
        values.set(Field::SecondOfMinute, i64::from(time.second()));
        values
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for FieldValues {
    fn from(datetime: chrono::NaiveDateTime) -> Self {
        let mut values = FieldValues::from(datetime.date());
        for (field, value) in FieldValues::from(datetime.time()).iter() {
            values.set(field, value);
        }
        values
    }
}

/// What a unit sees while printing.
pub struct PrintContext<'a> {
    values: &'a FieldValues,
    locale: &'a Locale,
}

impl<'a> PrintContext<'a> {
    pub fn new(values: &'a FieldValues, locale: &'a Locale) -> Self {
        PrintContext { values, locale }
    }

    pub fn value(&self, field: Field) -> Result<i64, PrintError> {
        self.values
            .get(field)
            .ok_or(PrintError::MissingField { field })
    }

    pub fn locale(&self) -> &Locale {
        self.locale
    }
}

/// Cursor over the input while parsing, plus the values recovered so far.
pub struct ParseContext<'a> {
    input: &'a str,
    position: usize,
    locale: &'a Locale,
    values: FieldValues,
}

impl<'a> ParseContext<'a> {
    pub fn new(input: &'a str, locale: &'a Locale) -> Self {
        ParseContext {
            input,
            position: 0,
            locale,
            values: FieldValues::new(),
        }
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn advance(&mut self, bytes: usize) {
        self.position += bytes;
    }

    pub fn set(&mut self, field: Field, value: i64) {
        self.values.set(field, value);
    }

    pub fn locale(&self) -> &Locale {
        self.locale
    }

    pub fn into_values(self) -> FieldValues {
        self.values
    }
}

/// One unit of a formatter pipeline.
///
/// Units are stateless between invocations; a unit may be shared across
/// concurrent print and parse operations.
pub trait FieldPrinterParser: Send + Sync {
    fn print(&self, ctx: &PrintContext<'_>, out: &mut String) -> Result<(), PrintError>;

    fn parse(&self, ctx: &mut ParseContext<'_>) -> Result<(), ParseError>;
}

/// Maximum digits the numeric parser consumes; 18 digits always fit in i64.
const MAX_PARSE_DIGITS: usize = 18;

/// Prints a field as an unpadded signed decimal; parses an optional minus
/// sign followed by decimal digits.
#[derive(Debug, Clone, Copy)]
pub struct NumberPrinterParser {
    field: Field,
}

impl NumberPrinterParser {
    pub fn new(field: Field) -> Self {
        NumberPrinterParser { field }
    }
}

impl FieldPrinterParser for NumberPrinterParser {
    fn print(&self, ctx: &PrintContext<'_>, out: &mut String) -> Result<(), PrintError> {
        let value = ctx.value(self.field)?;
        // Only negative values carry a sign; no padding.
        out.push_str(&value.to_string());
        Ok(())
    }

    fn parse(&self, ctx: &mut ParseContext<'_>) -> Result<(), ParseError> {
        let start = ctx.position();
        let rest = ctx.remaining();
        let bytes = rest.as_bytes();

        let mut end = usize::from(bytes.first() == Some(&b'-'));
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() && end - digits_start < MAX_PARSE_DIGITS
        {
            end += 1;
        }
        if end == digits_start {
            return Err(ParseError::NoMatch {
                field: self.field,
                position: start,
            });
        }

        let value: i64 = rest[..end].parse().map_err(|_| ParseError::NoMatch {
            field: self.field,
            position: start,
        })?;
        ctx.advance(end);
        ctx.set(self.field, value);
        Ok(())
    }
}

/// Emits and expects a fixed literal, matched exactly.
#[derive(Debug, Clone)]
pub struct LiteralPrinterParser {
    text: String,
}

impl LiteralPrinterParser {
    pub fn new(text: impl Into<String>) -> Self {
        LiteralPrinterParser { text: text.into() }
    }
}

impl FieldPrinterParser for LiteralPrinterParser {
    fn print(&self, _ctx: &PrintContext<'_>, out: &mut String) -> Result<(), PrintError> {
        out.push_str(&self.text);
        Ok(())
    }

    fn parse(&self, ctx: &mut ParseContext<'_>) -> Result<(), ParseError> {
        if !ctx.remaining().starts_with(&self.text) {
            return Err(ParseError::ExpectedLiteral {
                expected: self.text.clone(),
                position: ctx.position(),
            });
        }
        ctx.advance(self.text.len());
        Ok(())
    }
}
