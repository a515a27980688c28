//! HTTP server initialization and runtime setup.
//!
//! Handles database bootstrap and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{MySqlUrlRepository, init_schema_with_retry};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MySQL database, table and connection pool (with bounded retry)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database initialization exhausts its retry budget
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = init_schema_with_retry(
        &config,
        config.db_init_attempts,
        Duration::from_secs(config.db_init_retry_delay),
    )
    .await
    .context("Database initialization failed")?;
    tracing::info!("Database schema ready");

    let repo = Arc::new(MySqlUrlRepository::new(pool));
    let state = AppState::new(repo, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
