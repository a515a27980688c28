//! Shared application state.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;

/// State injected into every handler.
///
/// Carries the repository behind its trait so handlers never see the
/// concrete storage type; tests substitute an in-memory or mock
/// implementation through the same seam.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn UrlRepository>,
    pub base_url: String,
}

impl AppState {
    pub fn new(repo: Arc<dyn UrlRepository>, base_url: String) -> Self {
        Self { repo, base_url }
    }
}
