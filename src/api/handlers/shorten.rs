//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::generate_code;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:5000/c984d06a" }
/// ```
///
/// The code is derived from the URL, so resubmitting the same URL returns
/// the same short URL without creating a second row.
///
/// # Errors
///
/// Returns 400 Bad Request when the body is not JSON, has no usable `url`
/// field, or the `url` value is empty. Returns 500 Internal Server Error
/// when the database write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(map_rejection)?;

    if payload.url.is_empty() {
        return Err(AppError::validation("Missing URL"));
    }

    let code = generate_code(&payload.url);
    let mapping = UrlMapping::new(&payload.url, &code);
    state.repo.upsert(&mapping).await?;

    let short_url = short_url(&state.base_url, &code);
    info!(url = %payload.url, short_url = %short_url, "Stored short URL");

    Ok(Json(ShortenResponse { short_url }))
}

/// Builds the absolute short URL returned to the client.
fn short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

/// Maps body extraction failures onto the service's 400 contract.
///
/// A missing or non-JSON content type and a structurally wrong body are
/// the two cases with fixed message text; anything else (malformed JSON,
/// unreadable body) surfaces the extractor's own description.
fn map_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::validation("Content-Type must be application/json")
        }
        JsonRejection::JsonDataError(_) => AppError::validation("Missing URL"),
        rejection => AppError::validation(rejection.body_text()),
    }
}
