pub mod form_validation;
pub mod rules;
pub mod types;
pub mod workflow;

pub use form_validation::*;
pub use types::*;
pub use workflow::{begin_submission, dismiss_after, finish_submission, run_submission};
