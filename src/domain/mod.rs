//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - DNS resolution trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod resolver;
