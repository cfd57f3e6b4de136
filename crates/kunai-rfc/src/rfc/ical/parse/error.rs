//! Errors raised while reading iCalendar text.
//!
//! [`ParseError`] is about the shape of content lines and BEGIN/END framing.
//! [`FormatError`] is about one property value that does not match the
//! grammar of its value kind.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

pub type FormatResult<T> = Result<T, FormatError>;

/// A grammar error at a position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}{}", suffix(": ", .context.as_deref()))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line.
    pub line: usize,
    /// 1-based byte column within the unfolded line.
    pub column: usize,
    pub context: Option<String>,
}

impl ParseError {
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("missing property name")]
    MissingPropertyName,
    #[error("invalid property name")]
    InvalidPropertyName,
    #[error("missing colon separator")]
    MissingColon,
    #[error("invalid parameter format")]
    InvalidParameter,
    #[error("unclosed quoted string")]
    UnclosedQuote,
    #[error("missing BEGIN line")]
    MissingBegin,
    #[error("missing END line")]
    MissingEnd,
    #[error("mismatched BEGIN/END")]
    MismatchedComponent,
    /// A component of another kind than the caller asked for.
    #[error("unexpected component")]
    UnexpectedComponent,
}

/// A property value whose text does not match its value kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {token:?}{} (expected {})", suffix(" in ", .property.as_deref()), .kind.expected())]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// The offending text.
    pub token: String,
    /// Filled in by the codec layer once the property is known.
    pub property: Option<String>,
}

impl FormatError {
    #[must_use]
    pub fn new(kind: FormatErrorKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
            property: None,
        }
    }

    /// Names the property the token was read from.
    #[must_use]
    pub fn in_property(self, name: impl Into<String>) -> Self {
        Self {
            property: Some(name.into()),
            ..self
        }
    }

    #[must_use]
    pub const fn expected(&self) -> &'static str {
        self.kind.expected()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("invalid date format")]
    InvalidDate,
    #[error("invalid time format")]
    InvalidTime,
    #[error("invalid date-time format")]
    InvalidDateTime,
    #[error("invalid duration format")]
    InvalidDuration,
    #[error("invalid period format")]
    InvalidPeriod,
    #[error("invalid recurrence rule")]
    InvalidRRule,
    #[error("invalid frequency")]
    InvalidFrequency,
    #[error("invalid weekday")]
    InvalidWeekday,
    #[error("UNTIL and COUNT are mutually exclusive")]
    UntilCountConflict,
    #[error("invalid integer value")]
    InvalidInteger,
    #[error("invalid float value")]
    InvalidFloat,
    #[error("invalid boolean value")]
    InvalidBoolean,
    #[error("invalid geographic position")]
    InvalidGeo,
    #[error("invalid URI")]
    InvalidUri,
    /// The VALUE parameter names a type the property does not accept.
    #[error("unsupported value type")]
    UnsupportedValueType,
}

impl FormatErrorKind {
    /// The ABNF-ish grammar a token of this kind must match.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::InvalidDate => "YYYYMMDD",
            Self::InvalidTime => "HHMMSS[Z]",
            Self::InvalidDateTime => "YYYYMMDD\"T\"HHMMSS[Z]",
            Self::InvalidDuration => "[+|-]P(nW | [nD][T[nH][nM][nS]])",
            Self::InvalidPeriod => "date-time \"/\" (date-time | duration)",
            Self::InvalidRRule => "recur-rule-part *(\";\" recur-rule-part)",
            Self::InvalidFrequency => {
                "SECONDLY | MINUTELY | HOURLY | DAILY | WEEKLY | MONTHLY | YEARLY"
            }
            Self::InvalidWeekday => "[+|-][ordwk] (SU | MO | TU | WE | TH | FR | SA)",
            Self::UntilCountConflict => "at most one of UNTIL or COUNT",
            Self::InvalidInteger => "[+|-]1*DIGIT",
            Self::InvalidFloat => "[+|-]1*DIGIT[\".\"1*DIGIT]",
            Self::InvalidBoolean => "TRUE | FALSE",
            Self::InvalidGeo => "float \";\" float",
            Self::InvalidUri => "URI (RFC 3986)",
            Self::UnsupportedValueType => "a VALUE type accepted by the property",
        }
    }
}

fn suffix(separator: &str, detail: Option<&str>) -> String {
    detail.map_or_else(String::new, |d| format!("{separator}{d}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message() {
        let plain = ParseError::new(ParseErrorKind::MissingColon, 2, 9);
        assert_eq!(plain.to_string(), "missing colon separator at line 2, column 9");

        let with_context = ParseError::new(ParseErrorKind::MismatchedComponent, 7, 1)
            .with_context("END:VTODO");
        assert_eq!(
            with_context.to_string(),
            "mismatched BEGIN/END at line 7, column 1: END:VTODO"
        );
    }

    #[test]
    fn format_error_names_token_and_grammar() {
        let error = FormatError::new(FormatErrorKind::InvalidGeo, "north;west").in_property("GEO");
        assert_eq!(
            error.to_string(),
            "invalid geographic position \"north;west\" in GEO (expected float \";\" float)"
        );

        let bare = FormatError::new(FormatErrorKind::InvalidDuration, "P1Y");
        assert!(!bare.to_string().contains(" in "));
        assert!(bare.to_string().ends_with("(expected [+|-]P(nW | [nD][T[nH][nM][nS]]))"));
    }
}
