use std::rc::Rc;

use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::NotificationBanner;
use crate::components::forms::{ContactForm, SubmitterHandle};
use crate::features::contact::{ContactAction, ContactState};
use crate::services::config::get_global_config;
use crate::services::submission::SimulatedSubmitter;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

#[component]
pub fn ContactSection() -> Element {
    let config = use_hook(get_global_config);

    // Consolidated state management
    let mut state = use_signal(|| ContactState::new(&config.button.idle_label));

    let submission_config = config.submission.clone();
    use_context_provider(move || {
        console_info!(
            "[Contact] Using simulated submitter ({}ms delay, {:.0}% success)",
            submission_config.delay_ms,
            submission_config.success_rate * 100.0
        );
        SubmitterHandle(Rc::new(SimulatedSubmitter::new(submission_config)))
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: ContactAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section {
            id: "contact",
            class: "contact-section",

            div {
                class: "section-header",
                h2 { class: "section-title", "Get in Touch" }
                p {
                    class: "section-subtitle",
                    "Tell us about your project and we will get back to you shortly."
                }
            }

            ContactForm {
                state: state,
                dispatch: dispatch
            }

            NotificationBanner {
                state: state,
                dispatch: dispatch,
                dismiss_after_ms: config.notification.dismiss_after_ms
            }
        }
    }
}
