//! Creation-payload validation.
//!
//! The `Create*` DTOs in [`crate::catalog`] derive `validator::Validate`;
//! this module supplies the shared custom rules and the conversion of
//! validator output into [`CoreError::Validation`] so every vertical
//! reports field problems the same way.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Reject empty and whitespace-only strings.
///
/// `length(min = 1)` alone would accept `"   "`, which the listing forms
/// treat as unfilled.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}

/// Run a payload's derived validators, folding failures into one
/// [`CoreError::Validation`] whose message names each offending field.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), CoreError> {
    payload
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Flatten a `ValidationErrors` into `"field: reason; field: reason"`,
/// fields in alphabetical order so messages are deterministic.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let reasons: Vec<String> = field_errors.iter().map(describe_one).collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn describe_one(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
