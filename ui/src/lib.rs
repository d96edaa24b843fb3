//! This crate contains the contact section of the landing page: form state,
//! validation, the submission workflow and the Dioxus components that render it.

pub mod app;
pub use app::ContactSection;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

// Paths the exported console macros expand to, so dependent crates need no
// direct gloo-console or js-sys dependency
#[doc(hidden)]
pub mod __macro_support {
    pub use gloo_console;
    pub use js_sys;
}
