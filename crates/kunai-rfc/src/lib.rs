//! iCalendar (RFC 5545) component mapping engine.
//!
//! Typed component records (`Event`, `Todo`) declare how each of their
//! fields maps onto a property line. The engine resolves those declarations
//! into cached field tables and uses them to encode records into content
//! lines, decode content lines back into records, and check cross-field
//! invariants.

pub mod error;
pub mod rfc;

pub use error::{RfcError, RfcResult};
