#![cfg(feature = "chrono")]

use caltext::{Field, FieldValues, FormatterBuilder, TextStyle};
use chrono::{NaiveDate, NaiveTime};

#[test]
fn test_format_a_chrono_date() {
    let formatter = FormatterBuilder::new()
        .append_text(Field::DayOfWeek)
        .append_literal(", ")
        .append_text(Field::MonthOfYear)
        .append_literal(" ")
        .append_value(Field::DayOfMonth)
        .append_literal(", ")
        .append_value(Field::Year)
        .build();

    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let values = FieldValues::from(date);
    assert_eq!(formatter.format(&values).unwrap(), "Friday, August 7, 2026");
}

#[test]
fn test_format_a_chrono_time() {
    let formatter = FormatterBuilder::new()
        .append_value(Field::HourOfDay)
        .append_literal(":")
        .append_value(Field::MinuteOfHour)
        .append_literal(" ")
        .append_text(Field::AmPmOfDay)
        .build();

    let morning = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
    assert_eq!(
        formatter.format(&FieldValues::from(morning)).unwrap(),
        "9:5 AM"
    );

    let evening = NaiveTime::from_hms_opt(21, 5, 0).unwrap();
    assert_eq!(
        formatter.format(&FieldValues::from(evening)).unwrap(),
        "21:5 PM"
    );
}

#[test]
fn test_datetime_carries_date_and_time_fields() {
    let datetime = NaiveDate::from_ymd_opt(2026, 8, 7)
        .unwrap()
        .and_hms_opt(21, 5, 0)
        .unwrap();
    let values = FieldValues::from(datetime);

    assert_eq!(values.get(Field::MonthOfYear), Some(8));
    assert_eq!(values.get(Field::DayOfWeek), Some(5));
    assert_eq!(values.get(Field::HourOfDay), Some(21));
    assert_eq!(values.get(Field::AmPmOfDay), Some(1));
    assert_eq!(values.get(Field::SecondOfMinute), Some(0));
}

#[test]
fn test_bc_date_era() {
    // 44 BC is year -43 in the proleptic calendar chrono uses.
    let ides = NaiveDate::from_ymd_opt(-43, 3, 15).unwrap();
    let values = FieldValues::from(ides);
    assert_eq!(values.get(Field::Era), Some(0));

    let formatter = FormatterBuilder::new()
        .append_text(Field::MonthOfYear)
        .append_literal(" ")
        .append_value(Field::DayOfMonth)
        .append_literal(" ")
        .append_text_styled(Field::Era, TextStyle::Short)
        .build();
    assert_eq!(formatter.format(&values).unwrap(), "March 15 BC");
}
