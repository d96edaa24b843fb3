use thiserror::Error;

use crate::features::contact::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{} is required.", .field.label())]
    RequiredFieldMissing { field: Field },

    #[error("{message}")]
    FormatInvalid { field: Field, message: String },

    #[error("{message}")]
    LengthOutOfRange {
        field: Field,
        length: usize,
        message: String,
    },

    #[error("You must select a {}.", .field.label().to_lowercase())]
    SelectionMissing { field: Field },

    #[error("Submission failed: {reason}")]
    SubmissionFailed { reason: String },

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

pub type ContactResult<T> = Result<T, ContactError>;

impl ContactError {
    /// The field an inline error belongs to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            ContactError::RequiredFieldMissing { field }
            | ContactError::FormatInvalid { field, .. }
            | ContactError::LengthOutOfRange { field, .. }
            | ContactError::SelectionMissing { field } => Some(*field),
            ContactError::SubmissionFailed { .. } | ContactError::Configuration { .. } => None,
        }
    }

    /// Field errors are shown inline and block submission; they never cross the async boundary
    pub fn is_field_error(&self) -> bool {
        self.field().is_some()
    }

    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContactError::SubmissionFailed { .. } => ErrorSeverity::Medium,
            ContactError::Configuration { .. } => ErrorSeverity::High,
            _ => ErrorSeverity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
