//! Text entry points: records to and from framed iCalendar text.

use super::decode::decode_component;
use super::descriptor::IcalComponent;
use super::encode::encode_component;
use crate::error::RfcResult;
use crate::rfc::ical::build::{SerializeOptions, serialize_component};
use crate::rfc::ical::parse::parse_component;

/// Encodes a record as a framed, folded component (`BEGIN:VEVENT` ...
/// `END:VEVENT`), nested components included.
///
/// ## Errors
/// Same as [`super::encode`].
pub fn encode_to_string<R: IcalComponent>(
    record: &R,
    options: &SerializeOptions,
) -> RfcResult<String> {
    let component = encode_component(record)?;
    Ok(serialize_component(&component, options))
}

/// Decodes a record from component text.
///
/// The text is unfolded and lexed; a `BEGIN`/`END` wrapper of the record's
/// component kind is optional. Nested components are kept in extras.
///
/// ## Errors
/// Returns a `Parse` error for malformed text, otherwise the same errors as
/// [`super::decode`].
#[tracing::instrument(skip(input), fields(input_len = input.len(), component = %R::KIND))]
pub fn decode_str<R: IcalComponent>(input: &str) -> RfcResult<R> {
    let component = parse_component(input, R::KIND)?;
    decode_component(&component)
}
