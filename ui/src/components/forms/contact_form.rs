use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    forms::ServiceSelector,
    inputs::{FieldFeedback, InputType, ValidatedInput, ValidatedTextArea},
};
use crate::features::contact::*;
use crate::services::config::get_global_config;
use crate::services::submission::ContactSubmitter;
use crate::utils::field_group_class;
use crate::{console_error, console_info};

/// Shared handle to whichever submitter the page was built with
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

#[derive(Props, PartialEq, Clone)]
pub struct ContactFormProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
}

#[component]
pub fn ContactForm(props: ContactFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;
    let submitter = use_context::<SubmitterHandle>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let config = get_global_config();
        let Some(request) = state.with_mut(|s| begin_submission(s, &config)) else {
            console_info!("[ContactForm] Submit blocked, form has errors");
            return;
        };

        let submitter = submitter.0.clone();
        spawn(async move {
            console_info!("[ContactForm] Sending message via {} submitter", submitter.name());
            let outcome = run_submission(submitter.as_ref(), request).await;
            if let SubmissionOutcome::Failure(reason) = &outcome {
                console_error!("[ContactForm] Error sending form: {}", reason);
            }
            dispatch.call(ContactAction::SubmissionFinished(outcome));
        });
    };

    let current = state();
    let status = |field: Field| field_status(&current, field);
    let name_status = status(Field::Name);
    let email_status = status(Field::Email);
    let service_status = status(Field::Service);
    let message_status = status(Field::Message);

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            novalidate: true,
            onsubmit: on_submit,

            div {
                class: "{field_group_class(&name_status)}",
                label { r#for: "name", class: "input-label", "Name" }
                ValidatedInput {
                    id: "name".to_string(),
                    value: current.values.name.clone(),
                    placeholder: "Your full name".to_string(),
                    input_type: InputType::Text,
                    status: name_status.clone(),
                    disabled: false,
                    on_input: move |value: String| dispatch.call(ContactAction::FieldEdited(Field::Name, value)),
                    on_blur: move |_| dispatch.call(ContactAction::FieldBlurred(Field::Name))
                }
                FieldFeedback { status: name_status.clone() }
            }

            div {
                class: "{field_group_class(&email_status)}",
                label { r#for: "email", class: "input-label", "Email" }
                ValidatedInput {
                    id: "email".to_string(),
                    value: current.values.email.clone(),
                    placeholder: "you@example.com".to_string(),
                    input_type: InputType::Email,
                    status: email_status.clone(),
                    disabled: false,
                    on_input: move |value: String| dispatch.call(ContactAction::FieldEdited(Field::Email, value)),
                    on_blur: move |_| dispatch.call(ContactAction::FieldBlurred(Field::Email))
                }
                FieldFeedback { status: email_status.clone() }
            }

            div {
                class: "{field_group_class(&service_status)}",
                label { r#for: "service", class: "input-label", "Service" }
                ServiceSelector {
                    options: SERVICE_OPTIONS.to_vec(),
                    selected: current.values.service.clone(),
                    status: service_status.clone(),
                    disabled: false,
                    on_change: move |value: String| dispatch.call(ContactAction::ServiceSelected(value))
                }
                FieldFeedback { status: service_status.clone() }
            }

            div {
                class: "{field_group_class(&message_status)}",
                label { r#for: "message", class: "input-label", "Message" }
                ValidatedTextArea {
                    id: "message".to_string(),
                    value: current.values.message.clone(),
                    placeholder: "Tell us about your project".to_string(),
                    rows: 5,
                    status: message_status.clone(),
                    disabled: false,
                    on_input: move |value: String| dispatch.call(ContactAction::FieldEdited(Field::Message, value)),
                    on_blur: move |_| dispatch.call(ContactAction::FieldBlurred(Field::Message))
                }
                FieldFeedback { status: message_status.clone() }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: current.submit_button.disabled,
                    if current.is_submitting() {
                        LoadingIndicator { message: current.submit_button.label.clone() }
                    } else {
                        "{current.submit_button.label}"
                    }
                }
            }
        }
    }
}
