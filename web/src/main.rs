use dioxus::prelude::*;
use ui::services::config::{init_global_config, ContactConfig};
use ui::{console_warn, ContactSection};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = init_global_config(ContactConfig::default()) {
        console_warn!("[Landing] Using default contact settings: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        header {
            class: "hero",
            h1 { class: "hero-title", "Technology that moves your business" }
            p {
                class: "hero-subtitle",
                "Web, mobile and design services built around your goals."
            }
            a { href: "#contact", class: "hero-cta", "Request a quote" }
        }
        main {
            ContactSection {}
        }
    }
}
