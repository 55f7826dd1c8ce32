//! Product category API

use crate::{ClientResult, HttpClient};
use shared::models::{ProductCategory, ProductCategoryCreate, ProductCategoryUpdate};

/// Product category API service
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CategoriesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<ProductCategory>> {
        self.http.get("api/categories").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<ProductCategory> {
        self.http.get(&format!("api/categories/{}", id)).await
    }

    pub async fn create(&self, payload: &ProductCategoryCreate) -> ClientResult<ProductCategory> {
        payload.validate()?;
        self.http.post("api/categories", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &ProductCategoryUpdate,
    ) -> ClientResult<ProductCategory> {
        self.http
            .put(&format!("api/categories/{}", id), payload)
            .await
    }

    /// Hard delete; rejected by the backend while products reference it
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/categories/{}", id)).await
    }
}
