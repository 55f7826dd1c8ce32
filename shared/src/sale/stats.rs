//! Derived sale statistics
//!
//! Pure functions over the fetched sale list; recomputed on demand, never
//! cached (the lists are small).

use crate::models::sale::{Sale, SaleStatus};
use serde::Serialize;

/// Counts per status plus finalized revenue
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaleStats {
    pub total: usize,
    pub finalized: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Sum of totals over FINALIZED sales only
    pub revenue: f64,
}

impl SaleStats {
    pub fn collect(sales: &[Sale]) -> Self {
        let mut stats = Self {
            total: sales.len(),
            ..Self::default()
        };
        for sale in sales {
            match sale.status {
                SaleStatus::Finalized => {
                    stats.finalized += 1;
                    stats.revenue += sale.total();
                }
                SaleStatus::Pending => stats.pending += 1,
                SaleStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }

    /// Share of sales finalized, as a percentage; 0 for an empty list
    pub fn finalized_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.finalized as f64 * 100.0 / self.total as f64
    }
}
