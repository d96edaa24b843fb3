//! Infrastructure Services
//!
//! This module provides the infrastructure behind the contact form:
//!
//! - **submission**: the `ContactSubmitter` seam and the simulated submitter
//! - **config**: configuration defaults and the global accessor
//! - **errors**: the contact error taxonomy
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod config;
pub mod errors;
pub mod submission;
