//! iCalendar (RFC 5545).
//!
//! - [`core`]: value types, content lines and raw component trees
//! - [`parse`]: unfolding, lexing, value grammars and BEGIN/END framing
//! - [`build`]: escaping, folding and serialization
//! - [`mapping`]: the engine mapping typed records to and from content lines
//! - [`components`]: the VEVENT and VTODO records

pub mod build;
pub mod components;
pub mod core;
pub mod mapping;
pub mod parse;

pub use components::{CalendarDocument, Event, Todo, decode_document, encode_document};
pub use mapping::{decode, decode_component, decode_str, encode, encode_component, encode_to_string};
pub use crate::rfc::validation::validate;

#[cfg(test)]
mod tests;
