use thiserror::Error;

use crate::rfc::ical::mapping::{MissingPropertyError, UnsupportedFieldError};
use crate::rfc::ical::parse::{FormatError, ParseError};
use crate::rfc::validation::InvariantError;

/// Errors raised while mapping, parsing or validating components
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    MissingProperty(#[from] MissingPropertyError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    UnsupportedField(#[from] UnsupportedFieldError),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
