//! Product API

use crate::{ClientResult, HttpClient};
use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate};

/// Render a [`ProductFilter`] as list-endpoint query parameters; only
/// set criteria are emitted
pub fn filter_params(filter: &ProductFilter) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(name) = &filter.name
        && !name.is_empty()
    {
        params.push(("name".to_string(), name.clone()));
    }
    if let Some(category_id) = filter.category_id {
        params.push(("category_id".to_string(), category_id.to_string()));
    }
    if let Some(min) = filter.min_price {
        params.push(("min_price".to_string(), min.to_string()));
    }
    if let Some(max) = filter.max_price {
        params.push(("max_price".to_string(), max.to_string()));
    }
    params
}

/// Product API service
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, filter: &ProductFilter) -> ClientResult<Vec<Product>> {
        self.http
            .get_with("api/products", &filter_params(filter))
            .await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Product> {
        self.http.get(&format!("api/products/{}", id)).await
    }

    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        payload.validate()?;
        self.http.post("api/products", payload).await
    }

    pub async fn update(&self, id: i64, payload: &ProductUpdate) -> ClientResult<Product> {
        payload.validate()?;
        self.http.put(&format!("api/products/{}", id), payload).await
    }

    /// Soft delete: the backend flips `is_active`
    pub async fn deactivate(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/products/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params() {
        let filter = ProductFilter {
            name: Some("tacos".to_string()),
            category_id: Some(3),
            min_price: Some(10.5),
            max_price: None,
        };
        assert_eq!(
            filter_params(&filter),
            vec![
                ("name".to_string(), "tacos".to_string()),
                ("category_id".to_string(), "3".to_string()),
                ("min_price".to_string(), "10.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filter_emits_nothing() {
        assert!(filter_params(&ProductFilter::default()).is_empty());
    }
}
