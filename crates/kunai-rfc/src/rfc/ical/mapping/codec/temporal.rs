//! DATE, DATE-TIME, DURATION and EXDATE/RDATE values.

use super::{EncodedValue, PropertyValue, ValueKind, expect_value_type};
use crate::rfc::ical::core::{
    ContentLine, DateTime, DateTimeList, Duration, Parameter, RecurrenceDate, Temporal,
};
use crate::rfc::ical::parse::{
    FormatError, FormatErrorKind, FormatResult, parse_date, parse_datetime, parse_duration,
    parse_period,
};

const DATE: &str = "DATE";
const DATE_TIME: &str = "DATE-TIME";
const PERIOD: &str = "PERIOD";

fn tzid_param(tzid: Option<&str>) -> Option<Parameter> {
    tzid.map(Parameter::tzid)
}

impl PropertyValue for DateTime {
    const KIND: ValueKind = ValueKind::DateTime;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string()).with_opt_param(tzid_param(self.tzid()))
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &[DATE_TIME])?;
        parse_datetime(&line.raw_value, line.tzid())
    }
}

impl PropertyValue for Temporal {
    const KIND: ValueKind = ValueKind::DateOrDateTime;

    fn to_property(&self) -> EncodedValue {
        match self {
            Self::Date(date) => {
                EncodedValue::new(date.to_string()).with_param(Parameter::value_type(DATE))
            }
            Self::DateTime(dt) => dt.to_property(),
        }
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &[DATE, DATE_TIME])?;
        let value = line.raw_value.as_str();

        let date_only = match line.value_type() {
            Some(value_type) => value_type.eq_ignore_ascii_case(DATE),
            // Tolerate a missing VALUE=DATE on bare dates
            None => !value.contains('T'),
        };

        if date_only {
            parse_date(value).map(Self::Date)
        } else {
            parse_datetime(value, line.tzid()).map(Self::DateTime)
        }
    }
}

impl PropertyValue for Duration {
    const KIND: ValueKind = ValueKind::Duration;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &["DURATION"])?;
        parse_duration(&line.raw_value)
    }

    fn is_empty(&self) -> bool {
        self.is_zero()
    }
}

impl PropertyValue for DateTimeList {
    const KIND: ValueKind = ValueKind::DateList;

    fn to_property(&self) -> EncodedValue {
        let value = self
            .entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let value_type = self.value_type();
        let mut encoded = EncodedValue::new(value);
        if value_type != DATE_TIME {
            encoded = encoded.with_param(Parameter::value_type(value_type));
        }
        encoded.with_opt_param(tzid_param(self.tzid()))
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        let value_type = line
            .value_type()
            .map_or_else(|| DATE_TIME.to_string(), str::to_ascii_uppercase);
        let tzid = line.tzid();

        if line.raw_value.trim().is_empty() {
            return Ok(Self::default());
        }

        line.raw_value
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                match value_type.as_str() {
                    DATE => parse_date(entry).map(RecurrenceDate::Date),
                    DATE_TIME => parse_datetime(entry, tzid).map(RecurrenceDate::DateTime),
                    PERIOD => parse_period(entry, tzid).map(RecurrenceDate::Period),
                    _ => Err(FormatError::new(
                        FormatErrorKind::UnsupportedValueType,
                        value_type.as_str(),
                    )),
                }
            })
            .collect::<FormatResult<Vec<_>>>()
            .map(|entries| Self { entries })
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
