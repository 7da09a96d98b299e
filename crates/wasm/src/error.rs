//! Errors surfaced to JavaScript, each with a stable kind code.
//!
//! Kind codes:
//! - `invalid-color`: the main color string did not parse
//! - `invariant`: a derived color had no displayable form
//! - `options`: the options JSON was malformed or mistyped
//! - `serialization`: the result could not be encoded as JSON

use std::fmt;
use tonal_ramp_core::RampError;

/// Errors produced by the binding layer.
#[derive(Debug)]
pub enum BindingError {
    /// An error from the core.
    Ramp(RampError),
    /// The options JSON could not be read.
    Options(String),
    /// The result could not be serialized.
    Serialization(String),
}

impl BindingError {
    /// Stable code the front end can match on.
    pub fn kind(&self) -> &'static str {
        match self {
            BindingError::Ramp(RampError::InvalidColor(_)) => "invalid-color",
            BindingError::Ramp(_) => "invariant",
            BindingError::Options(_) => "options",
            BindingError::Serialization(_) => "serialization",
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::Ramp(e) => write!(f, "{}: {e}", self.kind()),
            BindingError::Options(msg) | BindingError::Serialization(msg) => {
                write!(f, "{}: {msg}", self.kind())
            }
        }
    }
}

impl std::error::Error for BindingError {}

impl From<RampError> for BindingError {
    fn from(e: RampError) -> Self {
        BindingError::Ramp(e)
    }
}
