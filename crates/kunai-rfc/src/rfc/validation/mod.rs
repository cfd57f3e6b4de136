//! Structural validation for component records.
//!
//! The property grammar cannot express cross-field constraints such as
//! "DTEND and DURATION are mutually exclusive". Component records implement
//! [`Validate`] to check them; callers invoke it explicitly, usually right
//! after decoding or before encoding.

pub mod rules;

use thiserror::Error;

/// A broken cross-field constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{component}: {message} ({})", fields.join(", "))]
pub struct InvariantError {
    /// Component name (`VEVENT`, `VTODO`).
    pub component: String,
    /// Property names of the offending fields.
    pub fields: Vec<String>,
    pub message: String,
}

impl InvariantError {
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        fields: &[&str],
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            message: message.into(),
        }
    }

    /// Returns whether the given property is among the offending fields.
    #[must_use]
    pub fn involves(&self, property: &str) -> bool {
        self.fields.iter().any(|f| f.eq_ignore_ascii_case(property))
    }
}

/// Cross-field checks for a record.
pub trait Validate {
    /// ## Errors
    /// Returns the first broken constraint.
    fn validate(&self) -> Result<(), InvariantError>;
}

/// Validates a record.
///
/// ## Errors
/// Returns the first broken constraint.
pub fn validate<R: Validate>(record: &R) -> Result<(), InvariantError> {
    record.validate()
}
