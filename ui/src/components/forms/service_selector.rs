use crate::features::contact::{FieldStatus, ServiceOption};
use crate::utils::field_input_style;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ServiceSelectorProps {
    pub options: Vec<ServiceOption>,
    pub selected: String,
    pub status: FieldStatus,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ServiceSelector(props: ServiceSelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            id: "service",
            name: "service",
            class: "input-field service-selector",
            style: "{field_input_style(&props.status)}",
            value: "{selected}",
            disabled: props.disabled,
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                selected: selected.is_empty(),
                "Select a service"
            }
            for service in props.options {
                option {
                    value: "{service.value}",
                    selected: service.value == selected,
                    "{service.label}"
                }
            }
        }
    }
}
