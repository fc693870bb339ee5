//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short URL mapping
//! - [`NewUrlRecord`] - Input for creating one

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
