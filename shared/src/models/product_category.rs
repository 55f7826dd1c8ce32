//! Product Category Model

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Product category entity (hard-deleted when empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryCreate {
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCategoryUpdate {
    pub name: Option<String>,
}

impl ProductCategoryCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let payload = ProductCategoryCreate {
            name: " ".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
