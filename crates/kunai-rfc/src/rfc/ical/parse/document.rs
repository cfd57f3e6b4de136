//! BEGIN/END framing (RFC 5545 §3.4, §3.6).
//!
//! Turns lexed content lines into a tree of [`RawComponent`]s. Property
//! values are left untouched; mapping them onto records happens later.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::tokenize;
use crate::rfc::ical::core::{ComponentKind, ContentLine, RawComponent, prop_names};

type Lines = std::iter::Peekable<std::vec::IntoIter<(usize, ContentLine)>>;

/// Parses one or more VCALENDAR objects.
///
/// Several calendars may be concatenated in one stream; each must be a
/// complete `BEGIN:VCALENDAR` ... `END:VCALENDAR` block.
///
/// ## Errors
/// Returns an error on malformed content lines, unbalanced BEGIN/END, or a
/// top-level component other than VCALENDAR.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_calendars(input: &str) -> ParseResult<Vec<RawComponent>> {
    tracing::debug!("Parsing iCalendar stream");

    let mut iter = lex(input)?;
    let calendars = read_top_level(&mut iter)?;

    if let Some(other) = calendars
        .iter()
        .find(|c| c.kind() != ComponentKind::Calendar)
    {
        tracing::warn!(component = %other.name, "Top-level component is not VCALENDAR");
        return Err(
            ParseError::new(ParseErrorKind::UnexpectedComponent, 1, 1)
                .with_context(format!("expected VCALENDAR, got {}", other.name)),
        );
    }

    tracing::debug!(count = calendars.len(), "Parsed calendars");
    Ok(calendars)
}

/// Parses the text of a single component of the given kind.
///
/// Accepts either a framed block (`BEGIN:VEVENT` ... `END:VEVENT`) or the
/// bare property lines of the component body. Nested blocks such as VALARM
/// become children either way.
///
/// ## Errors
/// Returns an error on malformed content lines, unbalanced BEGIN/END, or a
/// framed block of another kind.
#[tracing::instrument(skip(input), fields(input_len = input.len(), kind = %expected))]
pub fn parse_component(input: &str, expected: ComponentKind) -> ParseResult<RawComponent> {
    let mut iter = lex(input)?;

    let framed = iter
        .peek()
        .is_some_and(|(_, line)| line.name == prop_names::BEGIN);

    if !framed {
        tracing::trace!("Reading unframed component body");
        return read_body(&mut iter, RawComponent::new(expected));
    }

    let mut components = read_top_level(&mut iter)?;
    if components.len() != 1 {
        return Err(
            ParseError::new(ParseErrorKind::UnexpectedComponent, 1, 1).with_context(format!(
                "expected a single {expected}, got {} components",
                components.len()
            )),
        );
    }

    let component = components.remove(0);
    if component.kind() != expected {
        return Err(
            ParseError::new(ParseErrorKind::UnexpectedComponent, 1, 1)
                .with_context(format!("expected {expected}, got {}", component.name)),
        );
    }

    Ok(component)
}

/// Lexes input, rejecting text with no content lines at all.
fn lex(input: &str) -> ParseResult<Lines> {
    let lines = tokenize(input)?;
    if lines.is_empty() {
        return Err(ParseError::new(ParseErrorKind::UnexpectedEof, 1, 1));
    }
    tracing::trace!(count = lines.len(), "Lexed content lines");
    Ok(lines.into_iter().peekable())
}

/// Reads a sequence of complete components.
fn read_top_level(iter: &mut Lines) -> ParseResult<Vec<RawComponent>> {
    let mut components = Vec::new();

    while let Some((line_num, line)) = iter.next() {
        if line.name != prop_names::BEGIN {
            return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                .with_context(format!("{} outside of any component", line.name)));
        }
        let name = line.raw_value.to_ascii_uppercase();
        components.push(read_component(iter, RawComponent::named(name), line_num)?);
    }

    Ok(components)
}

/// Reads a component body after its BEGIN line, up to the matching END.
fn read_component(
    iter: &mut Lines,
    mut component: RawComponent,
    begin_line: usize,
) -> ParseResult<RawComponent> {
    loop {
        let Some((line_num, line)) = iter.next() else {
            return Err(ParseError::new(ParseErrorKind::MissingEnd, begin_line, 1)
                .with_context(format!("missing END:{}", component.name)));
        };

        match line.name.as_str() {
            prop_names::BEGIN => {
                let name = line.raw_value.to_ascii_uppercase();
                let nested = read_component(iter, RawComponent::named(name), line_num)?;
                component.children.push(nested);
            }
            prop_names::END => {
                let end_name = line.raw_value.to_ascii_uppercase();
                if end_name != component.name {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{end_name}",
                                component.name
                            )),
                    );
                }
                return Ok(component);
            }
            _ => component.properties.push(line),
        }
    }
}

/// Reads an unframed body up to the end of input.
fn read_body(iter: &mut Lines, mut component: RawComponent) -> ParseResult<RawComponent> {
    while let Some((line_num, line)) = iter.next() {
        match line.name.as_str() {
            prop_names::BEGIN => {
                let name = line.raw_value.to_ascii_uppercase();
                let nested = read_component(iter, RawComponent::named(name), line_num)?;
                component.children.push(nested);
            }
            prop_names::END => {
                return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                    .with_context(format!("END:{} without BEGIN", line.raw_value)));
            }
            _ => component.properties.push(line),
        }
    }

    Ok(component)
}
