pub mod contact_section;

pub use contact_section::ContactSection;
