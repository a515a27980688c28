#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use urlshortener::domain::entities::UrlMapping;
use urlshortener::domain::repositories::UrlRepository;
use urlshortener::error::AppError;
use urlshortener::state::AppState;

/// In-memory stand-in for the MySQL repository.
///
/// Mirrors the storage semantics of the real table: `original` is the
/// primary key, `short` is unique, and inserting a duplicate of either
/// leaves the existing row untouched.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rows: Mutex<HashMap<String, String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert_row(&self, original: &str, short: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert(original.to_string(), short.to_string());
    }
}

#[async_trait]
impl UrlRepository for InMemoryRepository {
    async fn upsert(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let duplicate = rows.contains_key(&mapping.original)
            || rows.values().any(|short| short == &mapping.short);
        if !duplicate {
            rows.insert(mapping.original.clone(), mapping.short.clone());
        }
        Ok(())
    }

    async fn find_original(&self, short: &str) -> Result<Option<String>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(_, stored)| stored.as_str() == short)
            .map(|(original, _)| original.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Repository whose every operation fails, for exercising the 500 path.
#[derive(Debug, Default)]
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn upsert(&self, _mapping: &UrlMapping) -> Result<(), AppError> {
        Err(AppError::database("MySQL server has gone away"))
    }

    async fn find_original(&self, _short: &str) -> Result<Option<String>, AppError> {
        Err(AppError::database("MySQL server has gone away"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::database("MySQL server has gone away"))
    }
}

pub fn create_test_state(repo: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(repo, "http://localhost:5000".to_string())
}
