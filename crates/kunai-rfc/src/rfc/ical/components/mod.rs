//! Component records.
//!
//! - [`Event`] (VEVENT) and [`Todo`] (VTODO), with their field declarations
//!   and structural checks
//! - Recurrence sub-records embedded by both
//! - [`CalendarDocument`] for whole VCALENDAR streams

mod calendar;
mod event;
mod recurrence;
mod todo;

pub use calendar::{CalendarDocument, decode_document, encode_document};
pub use event::Event;
pub use recurrence::{ExceptionDateTimes, RecurrenceDateTimes, RecurrenceRule};
pub use todo::Todo;
