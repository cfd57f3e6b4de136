//! Content line lexing (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Unfolds `input` into logical lines.
///
/// CRLF and bare LF both end a physical line. A line that starts with a space
/// or tab continues the previous one with that one character removed. Blank
/// lines are skipped. Each logical line carries the 1-based physical line it
/// started on.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    input
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .fold(Vec::new(), |mut lines: Vec<(usize, String)>, (index, line)| {
            match (line.strip_prefix([' ', '\t']), lines.last_mut()) {
                (Some(rest), Some((_, previous))) => previous.push_str(rest),
                (Some(rest), None) => lines.push((index + 1, rest.to_string())),
                (None, _) => lines.push((index + 1, line.to_string())),
            }
            lines
        })
}

/// Unfolds and lexes a whole text, pairing each content line with the
/// physical line it started on.
///
/// ## Errors
/// Returns the first malformed line's error.
pub fn tokenize(input: &str) -> ParseResult<Vec<(usize, ContentLine)>> {
    split_lines(input)
        .into_iter()
        .map(|(number, line)| Ok((number, parse_content_line(&line, number)?)))
        .collect()
}

/// Lexes one unfolded line of the form `name *(";" param) ":" value`.
///
/// Names are upper-cased. The value is everything after the first `:` that
/// is not inside a quoted parameter value, kept verbatim.
///
/// ## Errors
/// Returns a [`ParseError`] positioned at the offending byte.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let mut cursor = Cursor {
        text: line,
        pos: 0,
        line: line_num,
    };

    let name = cursor.name();
    match cursor.peek() {
        Some(b';' | b':') if name.is_empty() => {
            return Err(ParseError::new(ParseErrorKind::MissingPropertyName, line_num, 1));
        }
        Some(b';' | b':') | None => {}
        Some(_) => return Err(cursor.error(ParseErrorKind::InvalidPropertyName)),
    }

    let mut params = Vec::new();
    while cursor.eat(b';') {
        params.push(cursor.parameter()?);
    }

    match cursor.peek() {
        Some(b':') => Ok(ContentLine {
            name: name.to_ascii_uppercase(),
            params,
            raw_value: line[cursor.pos + 1..].to_string(),
        }),
        None => Err(
            ParseError::new(ParseErrorKind::MissingColon, line_num, line.len())
                .with_context(line),
        ),
        Some(_) => {
            let found = line[cursor.pos..].chars().next().unwrap_or_default();
            Err(cursor
                .error(ParseErrorKind::InvalidParameter)
                .with_context(format!("unexpected character '{found}'")))
        }
    }
}

/// Byte cursor over one unfolded line. Every delimiter is ASCII, so slicing
/// at a delimiter position never splits a character.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        let matched = self.peek() == Some(byte);
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.pos + 1)
    }

    /// Consumes a run of `ALPHA / DIGIT / "-"`.
    fn name(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// `param-name "=" param-value *("," param-value)`
    fn parameter(&mut self) -> ParseResult<Parameter> {
        let name = self.name();
        if name.is_empty() || !self.eat(b'=') {
            return Err(self.error(ParseErrorKind::InvalidParameter));
        }

        let mut values = vec![self.parameter_value()?];
        while self.eat(b',') {
            values.push(self.parameter_value()?);
        }
        Ok(Parameter::with_values(name, values))
    }

    fn parameter_value(&mut self) -> ParseResult<String> {
        let rest = &self.text[self.pos..];

        if let Some(quoted) = rest.strip_prefix('"') {
            let Some(len) = quoted.find('"') else {
                return Err(self.error(ParseErrorKind::UnclosedQuote));
            };
            self.pos += len + 2;
            return Ok(decode_carets(&quoted[..len]));
        }

        let len = rest.find([',', ';', ':']).unwrap_or(rest.len());
        self.pos += len;
        Ok(rest[..len].to_string())
    }
}

/// Decodes RFC 6868 `^^`, `^n` and `^'`. Any other caret is literal.
fn decode_carets(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c != '^' {
            out.push(c);
            continue;
        }
        match chars.clone().next() {
            Some('^') => out.push('^'),
            Some('n') => out.push('\n'),
            Some('\'') => out.push('"'),
            _ => {
                out.push('^');
                continue;
            }
        }
        chars.next();
    }
    out
}
