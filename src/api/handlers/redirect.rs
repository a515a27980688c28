//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// Responds with `302 Found` and a `Location` header carrying the stored
/// URL exactly as it was submitted. The stored string is not validated as
/// a URL here; whatever was shortened is what the client is sent to.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match state.repo.find_original(&short).await? {
        Some(original) => {
            info!(short = %short, target = %original, "Redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, original)]))
        }
        None => {
            warn!(short = %short, "Unknown short code");
            Err(AppError::not_found())
        }
    }
}
