//! Helpers shared by the service and route layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Acceptance rule for original URLs

pub mod code_generator;
pub mod url_validator;
