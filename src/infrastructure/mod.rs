//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod dns;
pub mod persistence;
