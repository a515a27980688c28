//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. The service
//! has a single one:
//!
//! - [`UrlMapping`] - A stored original-URL / short-code pair

pub mod url_mapping;

pub use url_mapping::UrlMapping;
