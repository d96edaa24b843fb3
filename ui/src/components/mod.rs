//! User Interface Components
//!
//! This module contains the Dioxus components for the contact section:
//!
//! - **forms**: the contact form and its service selector
//! - **display**: notification banner and loading indicator
//! - **inputs**: validated input fields, text area and inline feedback

pub mod display;
pub mod forms;
pub mod inputs;
