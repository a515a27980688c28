//! Domain layer containing the business data model.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or HTTP concerns;
//! repository traits are implemented by the infrastructure layer.

pub mod entities;
pub mod repositories;
