//! Employee Model

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// Job title, e.g. "Waiter", "Cashier"
    pub position: String,
    /// Login account, used for waiter assignment on sales
    pub username: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub position: String,
    pub username: String,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
}

impl EmployeeCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("name"));
        }
        if self.position.trim().is_empty() {
            return Err(AppError::required("position"));
        }
        if self.username.trim().is_empty() {
            return Err(AppError::required("username"));
        }
        Ok(())
    }
}

impl EmployeeUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::required("name"));
        }
        if let Some(position) = &self.position
            && position.trim().is_empty()
        {
            return Err(AppError::required("position"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_all_fields() {
        let payload = EmployeeCreate {
            name: "Luis Peña".to_string(),
            position: "Waiter".to_string(),
            username: "luis.p".to_string(),
        };
        assert!(payload.validate().is_ok());

        let missing = EmployeeCreate {
            name: String::new(),
            ..payload
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_update_allows_partial() {
        let update = EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
