//! Component mapping engine.
//!
//! - Codec: per-value-kind text contract ([`PropertyValue`])
//! - Descriptor: per-type field tables built from [`PropertySet::declare`]
//! - Encode / Decode: records to and from ordered content lines
//! - Text: framed component text in and out

mod codec;
mod decode;
mod descriptor;
mod encode;
mod error;
mod field;
mod text;

pub use codec::{EncodedValue, PropertyValue, ValueKind};
pub use decode::{decode, decode_component};
pub use descriptor::{
    Extras, FieldDescriptor, FieldOptions, FieldTable, Fields, IcalComponent, PropertySet,
    TableCell, cached_table, normalize_name,
};
pub use encode::{encode, encode_component};
pub use error::{MissingPropertyError, UnsupportedFieldError};
pub use text::{decode_str, encode_to_string};
