//! Sale Model
//!
//! A sale is a customer transaction built from line items. Its lifecycle
//! (PENDING until finalized or cancelled) is enforced by
//! [`crate::sale::status`]; this module only defines the wire shapes.

use crate::util::{lenient_f64, lenient_i32};
use serde::{Deserialize, Serialize};

/// Sale status
///
/// Unknown or missing status strings fold to `Pending`, which carries the
/// most permissive capabilities; the backend is the source of truth for
/// anything stricter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Finalized,
    Cancelled,
    #[default]
    #[serde(other)]
    Pending,
}

impl SaleStatus {
    /// Wire spelling, as used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "PENDING",
            SaleStatus::Finalized => "FINALIZED",
            SaleStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Sale line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: Option<i64>,
    pub product_id: i64,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub quantity: i32,
    /// Unit price in currency unit; malformed wire values fold to 0
    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,
    #[serde(default)]
    pub status: SaleStatus,
}

/// Sale entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub customer_id: Option<i64>,
    /// Reservation this sale was opened from, if any
    pub reservation_id: Option<i64>,
    #[serde(default)]
    pub status: SaleStatus,
    #[serde(default)]
    pub lines: Vec<SaleLine>,
    /// Username of the waiter serving this sale
    pub assigned_username: Option<String>,
    pub created_at: Option<String>,
}

/// Sale upsert payload (create or update)
///
/// `lines` carries only the rows being added or changed; the backend
/// merges by product and returns the authoritative line list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleUpsert {
    pub id: Option<i64>,
    pub customer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<i64>,
    pub lines: Vec<SaleLineUpsert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_username: Option<String>,
}

/// Line item upsert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,
}

impl SaleUpsert {
    /// Field-level validation, performed before any network call
    pub fn validate(&self) -> crate::error::AppResult<()> {
        use crate::error::{AppError, ErrorCode};

        if self.customer_id <= 0 {
            return Err(AppError::new(ErrorCode::SaleNoCustomer));
        }
        for line in &self.lines {
            if line.product_id <= 0 {
                return Err(AppError::required("product"));
            }
            if line.quantity <= 0 {
                return Err(AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    "Quantity must be greater than 0",
                )
                .with_detail("product_id", line.product_id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&SaleStatus::Finalized).unwrap(),
            "\"FINALIZED\""
        );
        let status: SaleStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, SaleStatus::Cancelled);
    }

    #[test]
    fn test_unknown_status_folds_to_pending() {
        let status: SaleStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, SaleStatus::Pending);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let sale: Sale = serde_json::from_str(
            r#"{"id": 1, "customer_id": 2, "reservation_id": null,
                "lines": [], "assigned_username": null, "created_at": null}"#,
        )
        .unwrap();
        assert_eq!(sale.status, SaleStatus::Pending);
    }

    #[test]
    fn test_malformed_line_numbers_fold_to_zero() {
        let line: SaleLine = serde_json::from_str(
            r#"{"id": null, "product_id": 3, "quantity": "x", "unit_price": "bad"}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, 0);
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(line.status, SaleStatus::Pending);
    }

    #[test]
    fn test_upsert_validation() {
        let mut upsert = SaleUpsert {
            id: None,
            customer_id: 9,
            reservation_id: None,
            lines: vec![SaleLineUpsert {
                id: None,
                product_id: 3,
                quantity: 2,
                status: None,
            }],
            status: None,
            assigned_username: None,
        };
        assert!(upsert.validate().is_ok());

        upsert.lines[0].quantity = 0;
        assert!(upsert.validate().is_err());

        upsert.lines[0].quantity = 1;
        upsert.customer_id = 0;
        assert!(upsert.validate().is_err());
    }

    #[test]
    fn test_upsert_skips_absent_fields() {
        let upsert = SaleUpsert {
            id: None,
            customer_id: 9,
            reservation_id: None,
            lines: vec![SaleLineUpsert {
                id: None,
                product_id: 3,
                quantity: 2,
                status: None,
            }],
            status: None,
            assigned_username: None,
        };
        let json = serde_json::to_string(&upsert).unwrap();
        assert!(!json.contains("reservation_id"));
        assert!(!json.contains("assigned_username"));
        assert!(json.contains("\"product_id\":3"));
    }
}
