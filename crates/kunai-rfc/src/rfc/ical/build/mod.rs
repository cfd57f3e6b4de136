//! iCalendar text output (RFC 5545).
//!
//! - Escape: TEXT escaping and parameter quoting
//! - Fold: 75-octet line folding
//! - Serializer: content lines and component trees

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text, join_text_list};
pub use fold::{DEFAULT_LINE_OCTETS, fold_line, unfolded_line};
pub use serializer::{SerializeOptions, serialize_component, serialize_line, serialize_parameter};
