//! Repository trait for URL mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// Handlers depend on this trait rather than on a concrete database so they
/// can be exercised without a live MySQL server.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlUrlRepository`] - MySQL implementation
/// - In-memory doubles in `tests/common`; mock available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a mapping, leaving the existing row untouched when `original`
    /// is already present (insert-or-ignore-on-conflict semantics).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on connection or query failure.
    async fn upsert(&self, mapping: &UrlMapping) -> Result<(), AppError>;

    /// Looks up the original URL stored for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(original))` if a mapping exists
    /// - `Ok(None)` if the code is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on connection or query failure.
    async fn find_original(&self, short: &str) -> Result<Option<String>, AppError>;

    /// Connectivity probe used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
