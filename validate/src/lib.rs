//! Validation for Polish PESEL numbers and surname fields.
//!
//! Pure functions and value types: no IO, no async. Typed entry points
//! ([`Pesel::parse`], [`check_name`]) return structured errors; the
//! `validate_*` wrappers collapse those into a [`ValidationResult`] for
//! callers that only need a verdict and a message.

mod name;
mod pesel;

pub use name::{NAME_MIN_CHARS, NameError, check_name};
pub use pesel::{Century, Pesel, PeselError};

use std::fmt::Display;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: String },
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { reason } => Some(reason),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for ValidationResult {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => ValidationResult::Valid,
            Err(err) => ValidationResult::Invalid {
                reason: err.to_string(),
            },
        }
    }
}

/// Validate an 11-digit PESEL: encoded birth date and check digit.
#[must_use]
pub fn validate_identity_number(input: &str) -> ValidationResult {
    Pesel::parse(input).into()
}

/// Validate a surname. The input is not trimmed.
#[must_use]
pub fn validate_name(input: &str) -> ValidationResult {
    check_name(input).into()
}
