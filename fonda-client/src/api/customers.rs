//! Customer API

use crate::{ClientResult, HttpClient};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// Field the customer list search applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSearchField {
    #[default]
    Name,
    Phone,
    Email,
}

impl CustomerSearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerSearchField::Name => "name",
            CustomerSearchField::Phone => "phone",
            CustomerSearchField::Email => "email",
        }
    }
}

/// Customer API service
#[derive(Debug, Clone, Copy)]
pub struct CustomersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CustomersApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Customer>> {
        self.http.get("api/customers").await
    }

    /// List customers matching `text` on the given field
    pub async fn search(
        &self,
        text: &str,
        field: CustomerSearchField,
    ) -> ClientResult<Vec<Customer>> {
        let params = vec![
            ("search".to_string(), text.to_string()),
            ("field".to_string(), field.as_str().to_string()),
        ];
        self.http.get_with("api/customers", &params).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Customer> {
        self.http.get(&format!("api/customers/{}", id)).await
    }

    /// Resolve the customer record linked to a login account
    pub async fn get_by_username(&self, username: &str) -> ClientResult<Customer> {
        self.http
            .get(&format!("api/customers/by-username/{}", username))
            .await
    }

    pub async fn create(&self, payload: &CustomerCreate) -> ClientResult<Customer> {
        payload.validate()?;
        self.http.post("api/customers", payload).await
    }

    pub async fn update(&self, id: i64, payload: &CustomerUpdate) -> ClientResult<Customer> {
        payload.validate()?;
        self.http.put(&format!("api/customers/{}", id), payload).await
    }

    /// Soft delete: the backend flips `is_active`, the row survives
    pub async fn deactivate(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/customers/{}", id)).await
    }
}
