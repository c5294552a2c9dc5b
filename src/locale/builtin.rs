//! Built-in locale data.

use crate::field::Field;
use crate::locale::{Locale, LocaleSource};
use crate::store::TextMapping;
use crate::style::TextStyle;

const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// 1 = Monday
const DAYS_FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const AMPM: [&str; 2] = ["AM", "PM"];
const AMPM_NARROW: [&str; 2] = ["A", "P"];

const ERAS_FULL: [&str; 2] = ["Before Christ", "Anno Domini"];
const ERAS_SHORT: [&str; 2] = ["BC", "AD"];
const ERAS_NARROW: [&str; 2] = ["B", "A"];

const QUARTERS_FULL: [&str; 4] = ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"];
const QUARTERS_SHORT: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

/// English text tables.
///
/// Serves any `en` or `en-*` locale; other locales report no data. Narrow
/// month and day forms are omitted: their single-letter names collide within
/// one style, which the store rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    fn table(field: Field, style: TextStyle) -> Option<(&'static [&'static str], i64)> {
        let table: (&[&str], i64) = match (field, style) {
            (Field::MonthOfYear, TextStyle::Full) => (&MONTHS_FULL, 1),
            (Field::MonthOfYear, TextStyle::Short) => (&MONTHS_SHORT, 1),
            (Field::DayOfWeek, TextStyle::Full) => (&DAYS_FULL, 1),
            (Field::DayOfWeek, TextStyle::Short) => (&DAYS_SHORT, 1),
            (Field::AmPmOfDay, TextStyle::Full) => (&AMPM, 0),
            (Field::AmPmOfDay, TextStyle::Short) => (&AMPM, 0),
            (Field::AmPmOfDay, TextStyle::Narrow) => (&AMPM_NARROW, 0),
            (Field::Era, TextStyle::Full) => (&ERAS_FULL, 0),
            (Field::Era, TextStyle::Short) => (&ERAS_SHORT, 0),
            (Field::Era, TextStyle::Narrow) => (&ERAS_NARROW, 0),
            (Field::QuarterOfYear, TextStyle::Full) => (&QUARTERS_FULL, 1),
            (Field::QuarterOfYear, TextStyle::Short) => (&QUARTERS_SHORT, 1),
            _ => return None,
        };
        Some(table)
    }
}

impl LocaleSource for BuiltinSource {
    fn mapping(&self, field: Field, style: TextStyle, locale: &Locale) -> Option<TextMapping> {
        if locale.language() != "en" {
            return None;
        }
        let (names, first) = Self::table(field, style)?;
        Some(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| (first + i as i64, name.to_string()))
                .collect(),
        )
    }
}
