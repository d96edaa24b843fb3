//! Form Features
//!
//! - **contact**: contact form state, validation rules and the submission workflow

pub mod contact;
