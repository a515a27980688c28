//! # URL Shortener
//!
//! A minimal URL shortening service built with Axum and MySQL.
//!
//! Submitting a URL yields an 8-character code derived from the URL itself,
//! so the same input always maps to the same short link. Visiting the short
//! link answers `302 Found` with the original URL in `Location`.
//!
//! ## Architecture
//!
//! This crate separates concerns into layers:
//!
//! - **Domain Layer** ([`domain`]) - Core entity and repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - MySQL persistence and schema bootstrap
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at MySQL (every variable is optional)
//! export DB_HOST="mysql"
//! export DB_USER="admin"
//! export DB_PASS="root"
//! export DB_NAME="urlshortener"
//!
//! # Start the service (listens on 0.0.0.0:5000)
//! cargo run
//! ```
//!
//! The database and `urls` table are created at startup; there is no
//! separate migration step.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
