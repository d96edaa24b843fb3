pub mod contact_form;
pub mod service_selector;

pub use contact_form::*;
pub use service_selector::*;
