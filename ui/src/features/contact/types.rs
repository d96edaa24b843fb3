// Core types for the contact form - no dioxus imports needed here
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::contact::{form_validation, workflow};

/// One named control of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Service, Field::Message];

    /// DOM id of the control
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Service => "Service",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Selectable services offered in the form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 5] = [
    ServiceOption {
        value: "web-development",
        label: "Web Development",
    },
    ServiceOption {
        value: "mobile-apps",
        label: "Mobile Apps",
    },
    ServiceOption {
        value: "ui-ux-design",
        label: "UI/UX Design",
    },
    ServiceOption {
        value: "consulting",
        label: "Consulting",
    },
    ServiceOption {
        value: "digital-marketing",
        label: "Digital Marketing",
    },
];

/// Raw values as typed by the user
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }
}

/// Current error text per field; an empty string means no error
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ErrorMap {
    name: String,
    email: String,
    service: String,
    message: String,
}

impl ErrorMap {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, message: String) {
        match field {
            Field::Name => self.name = message,
            Field::Email => self.email = message,
            Field::Service => self.service = message,
            Field::Message => self.message = message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, String::new());
    }

    pub fn has_error(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_clear(&self) -> bool {
        Field::ALL.iter().all(|field| !self.has_error(*field))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Visual state of a field group
#[derive(Clone, PartialEq, Debug)]
pub enum FieldStatus {
    Neutral,
    Error(String),
    Success,
}

/// Immutable snapshot handed to the submitter once the form is valid
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionRequest {
    /// Snapshot the trimmed form values at the current instant
    pub fn from_values(values: &ContactFormValues) -> Self {
        Self {
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            service: values.service.clone(),
            message: values.message.trim().to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

// Action enum for state mutations
#[derive(Clone, PartialEq, Debug)]
pub enum ContactAction {
    // Field events
    FieldEdited(Field, String),
    FieldBlurred(Field),
    ServiceSelected(String),

    // Submission
    SubmissionFinished(SubmissionOutcome),

    // Notification banner
    ShowNotification(NotificationKind, String),
    DismissNotification(u64),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactState {
    pub values: ContactFormValues,
    pub errors: ErrorMap,
    pub submit_button: SubmitButton,
    // Button as it was before the in-flight submission, restored on every exit path
    pub saved_button: Option<SubmitButton>,
    pub notification: Option<Notification>,
    next_notification_id: u64,
}

impl ContactState {
    pub fn new(idle_label: &str) -> Self {
        Self {
            values: ContactFormValues::default(),
            errors: ErrorMap::default(),
            submit_button: SubmitButton {
                disabled: false,
                label: idle_label.to_string(),
            },
            saved_button: None,
            notification: None,
            next_notification_id: 0,
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::FieldEdited(field, value) => {
                self.values.set(field, value);
                form_validation::clear_field_error(self, field);
            }
            ContactAction::FieldBlurred(field) => {
                form_validation::validate_field(self, field);
            }
            ContactAction::ServiceSelected(value) => {
                self.values.set(Field::Service, value);
                form_validation::validate_field(self, Field::Service);
            }
            ContactAction::SubmissionFinished(outcome) => {
                workflow::finish_submission(self, outcome);
            }
            ContactAction::ShowNotification(kind, message) => {
                self.show_notification(kind, message);
            }
            ContactAction::DismissNotification(id) => {
                self.dismiss_notification(id);
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.saved_button.is_some()
    }

    /// Replace any visible banner with a new one and return its id
    pub fn show_notification(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the banner only if it is still the one with the given id
    pub fn dismiss_notification(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }

    /// Clear every value and error, leaving all fields neutral
    pub fn reset_form(&mut self) {
        self.values = ContactFormValues::default();
        self.errors.reset();
    }
}
