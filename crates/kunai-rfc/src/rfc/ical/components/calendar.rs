//! VCALENDAR documents (RFC 5545 §3.4, §3.6).

use kunai_core::constants::PRODID;

use super::{Event, Todo};
use crate::error::RfcResult;
use crate::rfc::ical::build::{SerializeOptions, serialize_component};
use crate::rfc::ical::core::{ComponentKind, ContentLine, RawComponent, prop_names};
use crate::rfc::ical::mapping::{decode_component, encode_component};
use crate::rfc::ical::parse::parse_calendars;

const VERSION: &str = "2.0";

/// One VCALENDAR object with its events and to-dos decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarDocument {
    /// Calendar properties (VERSION, PRODID, METHOD, ...).
    pub properties: Vec<ContentLine>,
    pub events: Vec<Event>,
    pub todos: Vec<Todo>,
    /// Components without a record type (VTIMEZONE, VJOURNAL, ...), kept
    /// verbatim.
    pub other_components: Vec<RawComponent>,
    /// Kinds of the decoded children in stream order. Encoding replays it,
    /// so interleaved events and to-dos keep their positions.
    pub child_order: Vec<ComponentKind>,
}

impl CalendarDocument {
    /// Decodes the children of a VCALENDAR component.
    ///
    /// ## Errors
    /// Returns the first error raised while decoding an event or to-do.
    pub fn from_component(calendar: &RawComponent) -> RfcResult<Self> {
        let mut document = Self {
            properties: calendar.properties.clone(),
            ..Self::default()
        };

        for child in &calendar.children {
            document.child_order.push(child.kind());
            match child.kind() {
                ComponentKind::Event => document.events.push(decode_component(child)?),
                ComponentKind::Todo => document.todos.push(decode_component(child)?),
                _ => document.other_components.push(child.clone()),
            }
        }

        Ok(document)
    }

    /// Encodes the document as a VCALENDAR component tree.
    ///
    /// VERSION and PRODID are added when missing. Children follow
    /// `child_order`; whatever it does not cover is appended with unmapped
    /// components first, so time zone definitions precede their use, then
    /// events, then to-dos.
    ///
    /// ## Errors
    /// Returns the first error raised while encoding an event or to-do.
    pub fn to_component(&self) -> RfcResult<RawComponent> {
        let mut calendar = RawComponent::new(ComponentKind::Calendar);

        let has = |name: &str| self.properties.iter().any(|p| p.is(name));
        if !has(prop_names::VERSION) {
            calendar
                .properties
                .push(ContentLine::new(prop_names::VERSION, VERSION));
        }
        if !has(prop_names::PRODID) {
            calendar
                .properties
                .push(ContentLine::new(prop_names::PRODID, PRODID));
        }
        calendar.properties.extend(self.properties.iter().cloned());

        let mut events = self.events.iter();
        let mut todos = self.todos.iter();
        let mut others = self.other_components.iter();
        for kind in &self.child_order {
            let child = match kind {
                ComponentKind::Event => events.next().map(encode_component).transpose()?,
                ComponentKind::Todo => todos.next().map(encode_component).transpose()?,
                _ => others.next().cloned(),
            };
            calendar.children.extend(child);
        }

        calendar.children.extend(others.cloned());
        for event in events {
            calendar.children.push(encode_component(event)?);
        }
        for todo in todos {
            calendar.children.push(encode_component(todo)?);
        }

        Ok(calendar)
    }
}

/// Decodes every VCALENDAR object in a stream.
///
/// ## Errors
/// Returns a `Parse` error for malformed text, or the first error raised
/// while decoding an event or to-do.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn decode_document(input: &str) -> RfcResult<Vec<CalendarDocument>> {
    let documents = parse_calendars(input)?
        .iter()
        .map(CalendarDocument::from_component)
        .collect::<RfcResult<Vec<_>>>()?;

    tracing::debug!(
        calendars = documents.len(),
        events = documents.iter().map(|d| d.events.len()).sum::<usize>(),
        todos = documents.iter().map(|d| d.todos.len()).sum::<usize>(),
        "Decoded calendar stream"
    );
    Ok(documents)
}

/// Encodes a document as framed, folded VCALENDAR text.
///
/// ## Errors
/// Returns the first error raised while encoding an event or to-do.
pub fn encode_document(document: &CalendarDocument, options: &SerializeOptions) -> RfcResult<String> {
    Ok(serialize_component(&document.to_component()?, options))
}
