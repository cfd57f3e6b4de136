//! RFC implementations.
//!
//! - [`ical`] - iCalendar text framing, value codecs and component mapping
//! - [`validation`] - Structural invariants for component records

pub mod ical;
pub mod validation;
