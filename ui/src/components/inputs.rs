//! Input components for form validation and display

use crate::features::contact::FieldStatus;
use crate::utils::field_input_style;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub status: FieldStatus,
    pub disabled: bool,
    pub on_input: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: "input-field",
            style: "{field_input_style(&props.status)}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_input.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedTextAreaProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub rows: u32,
    pub status: FieldStatus,
    pub disabled: bool,
    pub on_input: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedTextArea(props: ValidatedTextAreaProps) -> Element {
    rsx! {
        textarea {
            id: "{props.id}",
            name: "{props.id}",
            class: "input-field",
            style: "{field_input_style(&props.status)}",
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_input.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldFeedbackProps {
    pub status: FieldStatus,
}

/// Inline error text shown under a field in the error state
#[component]
pub fn FieldFeedback(props: FieldFeedbackProps) -> Element {
    match props.status {
        FieldStatus::Error(message) => rsx! {
            div {
                class: "error-message",
                style: "color: #dc2626; font-size: 0.875rem; margin-top: 0.5rem;",
                "{message}"
            }
        },
        _ => rsx! {},
    }
}
