//! iCalendar parsing primitives (RFC 5545).
//!
//! This module provides parsers for iCalendar content:
//! - Lexer: Content line parsing with unfolding
//! - Values: Value type parsing (DATE, DATE-TIME, DURATION, etc.)
//! - Document: BEGIN/END framing into raw component trees

mod document;
mod error;
mod lexer;
mod values;

pub use document::{parse_calendars, parse_component};
pub use error::{
    FormatError, FormatErrorKind, FormatResult, ParseError, ParseErrorKind, ParseResult,
};
pub use lexer::{parse_content_line, split_lines, tokenize};
pub use values::{
    parse_boolean, parse_date, parse_datetime, parse_duration, parse_float, parse_geo,
    parse_integer, parse_period, parse_rrule, parse_time, split_text_list, unescape_text,
};
