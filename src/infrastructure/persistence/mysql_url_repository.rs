//! MySQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// MySQL repository for the `urls` table.
///
/// Uses SQLx prepared statements. Conflict resolution is delegated to the
/// store's `ON DUPLICATE KEY UPDATE` clause, so concurrent identical inserts
/// need no in-process coordination.
#[derive(Debug, Clone)]
pub struct MySqlUrlRepository {
    pool: MySqlPool,
}

impl MySqlUrlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for MySqlUrlRepository {
    async fn upsert(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        // `short = short` keeps the existing row when `original` is already
        // present, which makes resubmission a no-op.
        sqlx::query(
            r#"
            INSERT INTO urls (original, short)
            VALUES (?, ?)
            ON DUPLICATE KEY UPDATE short = short
            "#,
        )
        .bind(&mapping.original)
        .bind(&mapping.short)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_original(&self, short: &str) -> Result<Option<String>, AppError> {
        let original = sqlx::query_scalar::<_, String>(
            r#"
            SELECT original
            FROM urls
            WHERE short = ?
            "#,
        )
        .bind(short)
        .fetch_optional(&self.pool)
        .await?;

        Ok(original)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
