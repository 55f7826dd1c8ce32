//! Draft cart aggregator
//!
//! In-memory reducer for the line items of a sale being built in the UI.
//! The flow is upsert-then-sync: every add is immediately persisted and
//! the backend answers with the authoritative merged line list, which
//! replaces local state via [`DraftCart::replace_lines`]. The local merge
//! rule exists so the cart can reason about idempotent re-adds without a
//! round trip.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::sale::{Sale, SaleLine, SaleStatus};
use crate::sale::status::compute_total;

/// Draft line items for a sale under construction
#[derive(Debug, Clone, Default)]
pub struct DraftCart {
    lines: Vec<SaleLine>,
    /// Frozen carts (snapshots of terminal sales) reject every mutation
    frozen: bool,
}

impl DraftCart {
    /// Empty cart for a new sale
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart snapshot of an existing sale, frozen when the sale is no
    /// longer editable
    pub fn for_sale(sale: &Sale) -> Self {
        Self {
            lines: sale.lines.clone(),
            frozen: !sale.status_info().can_edit,
        }
    }

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Add `quantity` of a product. If the product is already in the
    /// cart its quantity is incremented; a new line is appended
    /// otherwise.
    pub fn add_item(&mut self, product_id: i64, quantity: i32, unit_price: f64) -> AppResult<()> {
        self.ensure_editable()?;
        if product_id <= 0 {
            return Err(AppError::required("product"));
        }
        if quantity <= 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "Quantity must be greater than 0",
            )
            .with_detail("field", "quantity"));
        }

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(SaleLine {
                id: None,
                product_id,
                quantity,
                unit_price,
                status: SaleStatus::Pending,
            }),
        }
        Ok(())
    }

    /// Remove the line for `product_id`; no-op when absent
    pub fn remove_item(&mut self, product_id: i64) -> AppResult<()> {
        self.ensure_editable()?;
        self.lines.retain(|l| l.product_id != product_id);
        Ok(())
    }

    /// Replace local lines with the authoritative list returned by the
    /// backend after a persist round trip
    pub fn replace_lines(&mut self, lines: Vec<SaleLine>) -> AppResult<()> {
        self.ensure_editable()?;
        self.lines = lines;
        Ok(())
    }

    /// Total amount over the current lines
    pub fn total(&self) -> f64 {
        compute_total(&self.lines)
    }

    fn ensure_editable(&self) -> AppResult<()> {
        if self.frozen {
            return Err(AppError::new(ErrorCode::SaleNotEditable));
        }
        Ok(())
    }
}
