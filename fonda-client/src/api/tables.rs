//! Dining table API

use crate::{ClientResult, HttpClient};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

/// Dining table API service
#[derive(Debug, Clone, Copy)]
pub struct TablesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> TablesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<DiningTable>> {
        self.http.get("api/tables").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<DiningTable> {
        self.http.get(&format!("api/tables/{}", id)).await
    }

    /// Create a table; `existing` is the current list used for the
    /// number-uniqueness pre-flight check
    pub async fn create(
        &self,
        payload: &DiningTableCreate,
        existing: &[DiningTable],
    ) -> ClientResult<DiningTable> {
        payload.validate_against(existing)?;
        self.http.post("api/tables", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &DiningTableUpdate,
        existing: &[DiningTable],
    ) -> ClientResult<DiningTable> {
        payload.validate_against(existing, id)?;
        self.http.put(&format!("api/tables/{}", id), payload).await
    }

    /// Hard delete; tables have no dependent rows
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/tables/{}", id)).await
    }
}
