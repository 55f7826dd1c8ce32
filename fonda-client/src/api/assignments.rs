//! Waiter assignment API
//!
//! The serves-relation between an employee and a sale, maintained when a
//! sale is created or its waiter changes.

use crate::{ClientResult, HttpClient};
use serde::{Deserialize, Serialize};

/// Waiter-serves-sale relation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub sale_id: i64,
    pub employee_username: String,
}

/// Create/update assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub sale_id: i64,
    pub employee_username: String,
}

/// Assignment API service
#[derive(Debug, Clone, Copy)]
pub struct AssignmentsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AssignmentsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn create(&self, payload: &AssignmentCreate) -> ClientResult<Assignment> {
        self.http.post("api/assignments", payload).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Assignment> {
        self.http.get(&format!("api/assignments/{}", id)).await
    }

    pub async fn get_by_sale(&self, sale_id: i64) -> ClientResult<Assignment> {
        self.http
            .get(&format!("api/assignments/sale/{}", sale_id))
            .await
    }

    pub async fn update(&self, id: i64, payload: &AssignmentCreate) -> ClientResult<Assignment> {
        self.http
            .put(&format!("api/assignments/{}", id), payload)
            .await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/assignments/{}", id)).await
    }
}
