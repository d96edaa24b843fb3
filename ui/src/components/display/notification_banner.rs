use dioxus::prelude::*;

use crate::features::contact::{dismiss_after, ContactAction, ContactState};
use crate::utils::{notification_class, notification_icon, notification_style};

#[derive(Props, PartialEq, Clone)]
pub struct NotificationBannerProps {
    pub state: Signal<ContactState>,
    pub dispatch: EventHandler<ContactAction>,
    pub dismiss_after_ms: u64,
}

/// Transient toast for the latest form notification
#[component]
pub fn NotificationBanner(props: NotificationBannerProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let dismiss_after_ms = props.dismiss_after_ms;

    // Only changes when a new banner replaces the old one
    let current_id = use_memo(move || state.read().notification.as_ref().map(|n| n.id));

    use_effect(move || {
        if let Some(id) = current_id() {
            spawn(dismiss_after(id, dismiss_after_ms, move |action| {
                dispatch.call(action)
            }));
        }
    });

    let Some(notification) = state().notification else {
        return rsx! {};
    };
    let id = notification.id;

    rsx! {
        div {
            class: "{notification_class(notification.kind)}",
            style: "{notification_style(notification.kind)}",
            role: "status",
            span {
                class: "notification-icon",
                "{notification_icon(notification.kind)}"
            }
            span {
                class: "notification-message",
                "{notification.message}"
            }
            button {
                class: "notification-close",
                r#type: "button",
                "aria-label": "Close notification",
                onclick: move |_| dispatch.call(ContactAction::DismissNotification(id)),
                "✕"
            }
        }
    }
}
