//! Domain Policies
//!
//! Validation rules applied to user answers before they are stored.

mod validation;

pub use validation::{validate_domain, validate_email};
