//! TEXT, INTEGER, URI and enumerated values.

use url::Url;

use super::{EncodedValue, PropertyValue, ValueKind, expect_value_type};
use crate::rfc::ical::build::escape_text;
use crate::rfc::ical::core::{
    Classification, ContentLine, EventStatus, TodoStatus, Transparency,
};
use crate::rfc::ical::parse::{FormatError, FormatErrorKind, FormatResult, parse_integer, unescape_text};

impl PropertyValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(escape_text(self))
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        Ok(unescape_text(&line.raw_value))
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl PropertyValue for u32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &["INTEGER"])?;
        parse_integer(&line.raw_value)
    }

    fn is_empty(&self) -> bool {
        *self == 0
    }
}

impl PropertyValue for i32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.to_string())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &["INTEGER"])?;
        parse_integer(&line.raw_value)
    }

    fn is_empty(&self) -> bool {
        *self == 0
    }
}

impl PropertyValue for Url {
    const KIND: ValueKind = ValueKind::Uri;

    fn to_property(&self) -> EncodedValue {
        EncodedValue::new(self.as_str())
    }

    fn from_property(line: &ContentLine) -> FormatResult<Self> {
        expect_value_type(line, &["URI"])?;
        Url::parse(line.raw_value.trim())
            .map_err(|_| FormatError::new(FormatErrorKind::InvalidUri, &line.raw_value))
    }
}

macro_rules! enumerated_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PropertyValue for $ty {
                const KIND: ValueKind = ValueKind::Enumerated;

                fn to_property(&self) -> EncodedValue {
                    EncodedValue::new(escape_text(self.as_str()))
                }

                fn from_property(line: &ContentLine) -> FormatResult<Self> {
                    Ok(<$ty>::parse(unescape_text(&line.raw_value).trim()))
                }
            }
        )+
    };
}

enumerated_value!(Classification, EventStatus, TodoStatus, Transparency);
