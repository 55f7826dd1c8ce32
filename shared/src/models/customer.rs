//! Customer Model

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Login account linked to this customer
    pub username: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl CustomerCreate {
    /// Field-level validation, performed before any network call
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name)?;
        validate_phone(&self.phone)?;
        validate_email(&self.email)?;
        if self.username.trim().is_empty() {
            return Err(AppError::required("username"));
        }
        Ok(())
    }
}

impl CustomerUpdate {
    /// Validate only the fields present in the payload
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::required("name"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> AppResult<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(AppError::required("phone"));
    }
    if phone.len() < 8 {
        return Err(
            AppError::validation("Phone number must be at least 8 characters")
                .with_detail("field", "phone"),
        );
    }
    Ok(())
}

/// Minimal shape check: user part, one `@`, dotted domain, no whitespace
fn validate_email(email: &str) -> AppResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::required("email"));
    }
    let valid = match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        return Err(
            AppError::validation("Email address has an invalid format")
                .with_detail("field", "email"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn payload() -> CustomerCreate {
        CustomerCreate {
            name: "Ana Torres".to_string(),
            phone: "55512345678".to_string(),
            email: "ana@example.com".to_string(),
            username: "ana.torres".to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut p = payload();
        p.name = "  ".to_string();
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut p = payload();
        p.phone = "1234567".to_string();
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@.com"] {
            let mut p = payload();
            p.email = email.to_string();
            assert!(p.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        let update = CustomerUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = CustomerUpdate {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
