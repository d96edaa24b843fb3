use tracing::debug;

use crate::features::contact::rules::validate_value;
use crate::features::contact::types::*;

/// Runs the rule for `field` and records the result in the error map
pub fn validate_field(state: &mut ContactState, field: Field) -> bool {
    match validate_value(field, state.values.get(field)) {
        Ok(()) => {
            state.errors.clear(field);
            true
        }
        Err(error) => {
            debug!(%field, %error, "field rejected");
            state.errors.set(field, error.to_string());
            false
        }
    }
}

/// Blanks the error for `field` without re-running its rule
pub fn clear_field_error(state: &mut ContactState, field: Field) {
    state.errors.clear(field);
}

/// Validates every field unconditionally; true only if all four pass
pub fn validate_form(state: &mut ContactState) -> bool {
    Field::ALL
        .iter()
        .map(|field| validate_field(state, *field))
        .fold(true, |all_valid, valid| all_valid && valid)
}

/// Derives the visual state of a field from its error entry and value
pub fn field_status(state: &ContactState, field: Field) -> FieldStatus {
    let error = state.errors.get(field);
    if !error.is_empty() {
        FieldStatus::Error(error.to_string())
    } else if !state.values.get(field).trim().is_empty() {
        FieldStatus::Success
    } else {
        FieldStatus::Neutral
    }
}

/// Gets the inline message for a field, if it currently has one
pub fn get_field_validation_message(state: &ContactState, field: Field) -> Option<String> {
    match field_status(state, field) {
        FieldStatus::Error(message) => Some(message),
        _ => None,
    }
}
