//! Helpers shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Syntactic checks for submitted URLs

pub mod code_generator;
pub mod url_validator;
