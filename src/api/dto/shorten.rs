//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// The submitted string is hashed verbatim: no trimming, no scheme
/// normalization. Two spellings of the same address produce two codes.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,
}

/// Response containing the absolute short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
