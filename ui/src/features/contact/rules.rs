//! Per-field validation rules
//!
//! Each rule is a pure function of the raw value. The `Display` of the
//! returned error is the inline message shown under the field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::contact::types::{Field, SERVICE_OPTIONS};
use crate::services::errors::{ContactError, ContactResult};

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// Letters (Latin-1 accented included) and spaces, 2-50 characters
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]{2,50}$").expect("name pattern compiles"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn validate_name(value: &str) -> ContactResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::RequiredFieldMissing { field: Field::Name });
    }

    if !NAME_PATTERN.is_match(value) {
        return Err(ContactError::FormatInvalid {
            field: Field::Name,
            message: "Name has an invalid format: use only letters and spaces (2-50 characters)."
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_email(value: &str) -> ContactResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::RequiredFieldMissing {
            field: Field::Email,
        });
    }

    if !EMAIL_PATTERN.is_match(value) {
        return Err(ContactError::FormatInvalid {
            field: Field::Email,
            message: "Please enter a valid email address (invalid email).".to_string(),
        });
    }

    Ok(())
}

/// An empty or unknown option counts as no selection
pub fn validate_service(value: &str) -> ContactResult<()> {
    if value.is_empty() || !SERVICE_OPTIONS.iter().any(|option| option.value == value) {
        return Err(ContactError::SelectionMissing {
            field: Field::Service,
        });
    }

    Ok(())
}

pub fn validate_message(value: &str) -> ContactResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::RequiredFieldMissing {
            field: Field::Message,
        });
    }

    let length = value.chars().count();
    if length < MESSAGE_MIN_CHARS {
        return Err(ContactError::LengthOutOfRange {
            field: Field::Message,
            length,
            message: format!("Message must be at least {MESSAGE_MIN_CHARS} characters."),
        });
    }

    if length > MESSAGE_MAX_CHARS {
        return Err(ContactError::LengthOutOfRange {
            field: Field::Message,
            length,
            message: format!("Message exceeds {MESSAGE_MAX_CHARS} characters."),
        });
    }

    Ok(())
}

/// Dispatch to the rule for `field`
pub fn validate_value(field: Field, value: &str) -> ContactResult<()> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Service => validate_service(value),
        Field::Message => validate_message(value),
    }
}
