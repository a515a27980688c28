//! Database and table bootstrap.
//!
//! The service creates its own database and table on every boot
//! (create-if-absent, safe to repeat) instead of relying on offline
//! migrations: in a freshly orchestrated deployment there is nothing to
//! migrate against until the MySQL container has finished starting. The
//! whole sequence runs under a bounded fixed-interval retry and the process
//! refuses to serve traffic if it never succeeds.

use sqlx::{Connection, MySqlConnection, MySqlPool};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::config::Config;

/// Table DDL executed on every boot.
const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    original VARCHAR(255) PRIMARY KEY,
    short VARCHAR(255) UNIQUE
)
"#;

/// Single initialization attempt: ensure the database exists, connect a
/// pool to it, ensure the table exists.
///
/// The target database may not exist yet, so the first connection selects
/// no database at all. `db_name` is interpolated into the DDL; it is
/// restricted to identifier characters by [`Config::validate`].
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if the server is unreachable or
/// either DDL statement fails.
pub async fn init_schema(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(&config.server_connect_options()).await?;
    sqlx::query(&format!(
        "CREATE DATABASE IF NOT EXISTS `{}`",
        config.db_name
    ))
    .execute(&mut conn)
    .await?;
    conn.close().await?;

    let pool = MySqlPool::connect_with(config.db_connect_options()).await?;
    sqlx::query(CREATE_TABLE).execute(&pool).await?;

    Ok(pool)
}

/// Runs [`init_schema`] under a bounded fixed-interval retry.
///
/// Makes up to `max_attempts` attempts with `delay` between them and
/// returns the pool from the first success. Each failed attempt is logged
/// with its attempt number; when every attempt fails, the last error is
/// returned and the caller is expected to abort startup.
pub async fn init_schema_with_retry(
    config: &Config,
    max_attempts: u32,
    delay: Duration,
) -> Result<MySqlPool, sqlx::Error> {
    // The strategy yields the sleeps *between* attempts, hence one fewer
    // than the attempt budget.
    let strategy = FixedInterval::new(delay).take(max_attempts.saturating_sub(1) as usize);

    let mut attempt = 0u32;
    Retry::spawn(strategy, || {
        attempt += 1;
        let current = attempt;
        async move {
            match init_schema(config).await {
                Ok(pool) => Ok(pool),
                Err(e) => {
                    tracing::warn!(
                        attempt = current,
                        max_attempts,
                        error = %e,
                        "Database initialization failed"
                    );
                    Err(e)
                }
            }
        }
    })
    .await
}
