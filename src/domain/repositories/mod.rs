//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations
//! live in `crate::infrastructure::persistence`. A `mockall` mock is
//! generated for unit tests.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
