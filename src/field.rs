//! Calendar field identifiers.

use std::fmt;
use std::ops::RangeInclusive;

/// A calendar unit that can be printed or parsed.
///
/// A field is an opaque key as far as text lookup is concerned; the valid
/// range is enforced by the formatting pipeline, not by the text tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Era of the proleptic calendar (0 = before the epoch, 1 = after)
    Era,
    /// Proleptic year, possibly negative
    Year,
    /// Quarter of the year (1-4)
    QuarterOfYear,
    /// Month of the year (1-12)
    MonthOfYear,
    /// Day of the month (1-31)
    DayOfMonth,
    /// Day of the week (1 = Monday ... 7 = Sunday)
    DayOfWeek,
    /// Half of the day (0 = AM, 1 = PM)
    AmPmOfDay,
    /// Hour of the day (0-23)
    HourOfDay,
    /// Minute of the hour (0-59)
    MinuteOfHour,
    /// Second of the minute (0-59)
    SecondOfMinute,
}

impl Field {
    /// Valid values for this field, inclusive.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Field::Era => 0..=1,
            Field::Year => -999_999_999..=999_999_999,
            Field::QuarterOfYear => 1..=4,
            Field::MonthOfYear => 1..=12,
            Field::DayOfMonth => 1..=31,
            Field::DayOfWeek => 1..=7,
            Field::AmPmOfDay => 0..=1,
            Field::HourOfDay => 0..=23,
            Field::MinuteOfHour => 0..=59,
            Field::SecondOfMinute => 0..=59,
        }
    }

    /// Lower-case name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Era => "era",
            Field::Year => "year",
            Field::QuarterOfYear => "quarter-of-year",
            Field::MonthOfYear => "month-of-year",
            Field::DayOfMonth => "day-of-month",
            Field::DayOfWeek => "day-of-week",
            Field::AmPmOfDay => "am-pm-of-day",
            Field::HourOfDay => "hour-of-day",
            Field::MinuteOfHour => "minute-of-hour",
            Field::SecondOfMinute => "second-of-minute",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
