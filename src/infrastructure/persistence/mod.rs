//! MySQL repository implementation and schema bootstrap.
//!
//! Concrete implementation of the domain repository trait using SQLx,
//! plus the startup routine that creates the database and table before
//! the server begins accepting requests.
//!
//! # Contents
//!
//! - [`MySqlUrlRepository`] - URL mapping storage and lookup
//! - [`schema`] - Create-if-absent bootstrap with bounded retry

pub mod mysql_url_repository;
pub mod schema;

pub use mysql_url_repository::MySqlUrlRepository;
pub use schema::{init_schema, init_schema_with_retry};
