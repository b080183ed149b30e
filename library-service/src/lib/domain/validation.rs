use std::collections::BTreeMap;

use thiserror::Error;

/// A single field constraint violation.
///
/// Messages name the offending field in quotes, e.g. `"email" must be a valid email`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{0}\" is required")]
    Required(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{0}\" must be a valid email")]
    InvalidEmail(&'static str),

    #[error("\"{0}\" must be a valid id")]
    InvalidId(&'static str),

    #[error("\"{0}\" must be a number")]
    NotANumber(&'static str),

    #[error("\"{0}\" must be an integer")]
    NotAnInteger(&'static str),

    #[error("\"{0}\" is out of range")]
    OutOfRange(&'static str),

    #[error("\"{0}\" is not allowed")]
    NotAllowed(String),
}

/// Unwrap a field that must be present in the request body.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Required(field))
}

/// Reject empty strings for fields that must carry text.
pub fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty(field))
    } else {
        Ok(value)
    }
}

/// Reject a payload carrying keys outside its known fields, naming the first one.
pub fn no_unknown_fields<V>(extra: &BTreeMap<String, V>) -> Result<(), ValidationError> {
    match extra.keys().next() {
        Some(key) => Err(ValidationError::NotAllowed(key.clone())),
        None => Ok(()),
    }
}

/// Narrow a numeric value to an `i32`, refusing fractions and overflow.
pub fn whole_number(field: &'static str, value: f64) -> Result<i32, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(field));
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger(field));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(ValidationError::OutOfRange(field));
    }
    Ok(value as i32)
}
