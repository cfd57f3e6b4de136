//! Value codecs.
//!
//! Every field type that can appear in a component record implements
//! [`PropertyValue`]: a bidirectional contract between the typed value and
//! the parameters plus value text of one content line.

mod scalar;
mod structured;
mod temporal;

use std::fmt;

use crate::rfc::ical::core::{ContentLine, Parameter};
use crate::rfc::ical::parse::{FormatError, FormatErrorKind, FormatResult};

/// RFC 5545 value types (§3.3), plus the composite kinds used by
/// individual properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Binary,
    Boolean,
    CalAddress,
    Date,
    DateTime,
    Duration,
    Float,
    Integer,
    Period,
    Recur,
    Text,
    Time,
    Uri,
    UtcOffset,
    /// DATE or DATE-TIME, selected by the VALUE parameter.
    DateOrDateTime,
    /// Comma-separated DATE, DATE-TIME or PERIOD values (EXDATE, RDATE).
    DateList,
    /// Two floats separated by `;` (GEO).
    Geo,
    /// Comma-separated TEXT values.
    TextList,
    /// Related component UID with RELTYPE.
    Relation,
    /// A TEXT token from a closed set with extension values.
    Enumerated,
}

impl ValueKind {
    /// Returns the RFC 5545 name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::CalAddress => "CAL-ADDRESS",
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
            Self::Duration => "DURATION",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Period => "PERIOD",
            Self::Recur => "RECUR",
            Self::Text | Self::Enumerated => "TEXT",
            Self::Time => "TIME",
            Self::Uri => "URI",
            Self::UtcOffset => "UTC-OFFSET",
            Self::DateOrDateTime => "DATE-TIME|DATE",
            Self::DateList => "DATE-TIME|DATE|PERIOD",
            Self::Geo => "FLOAT;FLOAT",
            Self::TextList => "TEXT,TEXT",
            Self::Relation => "TEXT;RELTYPE",
        }
    }

    /// Returns whether the engine can map fields of this kind.
    #[must_use]
    pub const fn has_codec(self) -> bool {
        !matches!(self, Self::Binary | Self::Time | Self::UtcOffset)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters and value text produced for one property line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedValue {
    pub params: Vec<Parameter>,
    pub value: String,
}

impl EncodedValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            params: Vec::new(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Adds a parameter when the value is present.
    #[must_use]
    pub fn with_opt_param(mut self, param: Option<Parameter>) -> Self {
        self.params.extend(param);
        self
    }

    /// Builds the content line for a property name.
    #[must_use]
    pub fn into_line(self, name: &str) -> ContentLine {
        ContentLine::with_params(name, self.params, self.value)
    }
}

/// A value that maps to and from one property line.
pub trait PropertyValue: Sized + Send + Sync + 'static {
    /// Value kind; checked when field tables are built.
    const KIND: ValueKind;

    /// Whether several lines of the same property fold into one value.
    const MERGES: bool = false;

    /// Renders the value and its parameters. Never fails for a well-typed
    /// value.
    fn to_property(&self) -> EncodedValue;

    /// Parses the value from a content line.
    ///
    /// ## Errors
    /// Returns a `FormatError` if the value text (or a parameter the value
    /// depends on) does not match the kind's grammar.
    fn from_property(line: &ContentLine) -> FormatResult<Self>;

    /// Returns whether this is the type's empty value.
    fn is_empty(&self) -> bool {
        false
    }

    /// Folds another occurrence into this value. Only called when
    /// [`Self::MERGES`] is set.
    fn merge(&mut self, _other: Self) {}
}

/// Rejects a VALUE parameter outside the accepted set.
fn expect_value_type(line: &ContentLine, accepted: &[&str]) -> FormatResult<()> {
    match line.value_type() {
        Some(value_type) if !accepted.iter().any(|a| a.eq_ignore_ascii_case(value_type)) => {
            Err(FormatError::new(
                FormatErrorKind::UnsupportedValueType,
                value_type,
            ))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
