//! Sale status engine
//!
//! Capability queries and transitions for the sale state machine:
//!
//! ```text
//! PENDING ──finalize──▶ FINALIZED (terminal)
//!    └──────cancel────▶ CANCELLED (terminal)
//! ```
//!
//! Transitions are re-checked before every mutating call: the entity in
//! hand is server state fetched earlier, so a stale PENDING copy may
//! already be terminal on the backend.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::sale::{Sale, SaleLine, SaleStatus};

/// UI capabilities derived from a sale status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub label: &'static str,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl SaleStatus {
    /// Capability mapping. Exhaustive over known statuses; unknown wire
    /// statuses already folded to `Pending` at deserialization and get
    /// its permissions.
    pub fn info(&self) -> StatusInfo {
        match self {
            SaleStatus::Finalized => StatusInfo {
                label: "Finalized",
                can_edit: false,
                can_delete: false,
            },
            SaleStatus::Pending => StatusInfo {
                label: "Pending",
                can_edit: true,
                can_delete: true,
            },
            SaleStatus::Cancelled => StatusInfo {
                label: "Cancelled",
                can_edit: false,
                can_delete: false,
            },
        }
    }

    /// A receipt can be printed only once the sale is finalized
    pub fn can_print(&self) -> bool {
        matches!(self, SaleStatus::Finalized)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SaleStatus::Pending)
    }
}

/// Sum of `unit_price * quantity` over the line items.
///
/// Malformed numeric fields have already been folded to 0 at the wire
/// boundary; non-finite values are folded here as well so the total never
/// poisons downstream arithmetic.
pub fn compute_total(lines: &[SaleLine]) -> f64 {
    lines
        .iter()
        .map(|line| {
            let price = if line.unit_price.is_finite() {
                line.unit_price
            } else {
                0.0
            };
            price * line.quantity as f64
        })
        .sum()
}

impl Sale {
    /// Capabilities for this sale's current status
    pub fn status_info(&self) -> StatusInfo {
        self.status.info()
    }

    /// Total amount over the current line items
    pub fn total(&self) -> f64 {
        compute_total(&self.lines)
    }

    /// A sale can be finalized when it is still pending, has at least one
    /// line item, and has a customer assigned
    pub fn can_finalize(&self) -> bool {
        self.status == SaleStatus::Pending
            && !self.lines.is_empty()
            && self.customer_id.is_some()
    }

    /// Transition PENDING → FINALIZED.
    ///
    /// Fails without mutating on any other current status, and when the
    /// finalization preconditions are not met. On success every line is
    /// marked finalized as well; the line list is frozen from here on.
    pub fn finalize(&mut self) -> AppResult<()> {
        match self.status {
            SaleStatus::Finalized => Err(AppError::new(ErrorCode::SaleAlreadyFinalized)),
            SaleStatus::Cancelled => Err(AppError::new(ErrorCode::SaleAlreadyCancelled)),
            SaleStatus::Pending => {
                if self.lines.is_empty() {
                    return Err(AppError::new(ErrorCode::SaleEmpty));
                }
                if self.customer_id.is_none() {
                    return Err(AppError::new(ErrorCode::SaleNoCustomer));
                }
                self.status = SaleStatus::Finalized;
                for line in &mut self.lines {
                    line.status = SaleStatus::Finalized;
                }
                tracing::debug!(sale_id = self.id, "sale finalized");
                Ok(())
            }
        }
    }

    /// Transition PENDING → CANCELLED (soft delete).
    ///
    /// Fails without mutating whenever the current status does not permit
    /// deletion.
    pub fn cancel(&mut self) -> AppResult<()> {
        if !self.status_info().can_delete {
            return Err(match self.status {
                SaleStatus::Finalized => AppError::new(ErrorCode::SaleAlreadyFinalized),
                _ => AppError::new(ErrorCode::SaleAlreadyCancelled),
            });
        }
        self.status = SaleStatus::Cancelled;
        tracing::debug!(sale_id = self.id, "sale cancelled");
        Ok(())
    }
}
