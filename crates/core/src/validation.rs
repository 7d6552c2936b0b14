//! Field-level validation helpers shared by the entity payload DTOs.
//!
//! The payload structs derive [`validator::Validate`]; the functions here
//! back the `custom`, `regex`, and `schema` rules that the derive macro
//! cannot express on its own.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// Egyptian national id: exactly 14 digits, nothing else.
pub static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14}$").expect("valid regex"));

/// Phone numbers: digits with an optional leading `+`, 8 to 15 digits.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("valid regex"));

/// Reject course / qualification codes that are empty or whitespace-only.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// [`non_blank`] applied to every element of a code list.
pub fn non_blank_all(values: &[String]) -> Result<(), ValidationError> {
    for value in values {
        non_blank(value)?;
    }
    Ok(())
}

/// Extract the first violated field's message from a set of validation
/// errors, for the transient form banner. Per-field messages stay attached
/// to the [`ValidationErrors`] value itself.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field}: invalid value"),
            })
        })
        .next()
}
