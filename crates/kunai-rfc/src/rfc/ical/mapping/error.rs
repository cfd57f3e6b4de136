//! Mapping errors.

use thiserror::Error;

/// A required property is absent.
///
/// Raised on decode when no line carries the property, and on encode when a
/// required optional field holds `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{component} is missing required property {property} (field `{field}`)")]
pub struct MissingPropertyError {
    pub component: String,
    pub property: String,
    pub field: &'static str,
}

/// A field declaration the engine cannot map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{component} field `{field}` cannot be mapped: {reason}")]
pub struct UnsupportedFieldError {
    pub component: String,
    pub field: &'static str,
    pub reason: String,
}
