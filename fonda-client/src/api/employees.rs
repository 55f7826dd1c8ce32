//! Employee API

use crate::{ClientResult, HttpClient};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// Employee list filters, serialized as query parameters
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    /// Name substring
    pub text: Option<String>,
    /// Active flag filter (`None` = all)
    pub active: Option<bool>,
    /// Exact position filter
    pub position: Option<String>,
}

impl EmployeeQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(text) = &self.text
            && !text.is_empty()
        {
            params.push(("search".to_string(), text.clone()));
        }
        if let Some(active) = self.active {
            params.push(("active".to_string(), active.to_string()));
        }
        if let Some(position) = &self.position
            && !position.is_empty()
        {
            params.push(("position".to_string(), position.clone()));
        }
        params
    }
}

/// Employee API service
#[derive(Debug, Clone, Copy)]
pub struct EmployeesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> EmployeesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &EmployeeQuery) -> ClientResult<Vec<Employee>> {
        self.http
            .get_with("api/employees", &query.to_params())
            .await
    }

    /// Active employees only (waiter pickers)
    pub async fn list_active(&self) -> ClientResult<Vec<Employee>> {
        self.http.get("api/employees/active").await
    }

    /// Employees by active flag
    pub async fn by_status(&self, active: bool) -> ClientResult<Vec<Employee>> {
        let status = if active { "active" } else { "inactive" };
        self.http
            .get(&format!("api/employees/status/{}", status))
            .await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.http.get(&format!("api/employees/{}", id)).await
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        payload.validate()?;
        self.http.post("api/employees", payload).await
    }

    pub async fn update(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        payload.validate()?;
        self.http.put(&format!("api/employees/{}", id), payload).await
    }

    /// Soft delete: the backend flips `is_active`
    pub async fn deactivate(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("api/employees/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let query = EmployeeQuery {
            text: Some("luis".to_string()),
            active: Some(true),
            position: None,
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("search".to_string(), "luis".to_string()),
                ("active".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_emits_nothing() {
        assert!(EmployeeQuery::default().to_params().is_empty());
    }
}
