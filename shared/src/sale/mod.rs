//! Sale lifecycle
//!
//! The sale state machine (`PENDING → FINALIZED`, `PENDING → CANCELLED`,
//! both terminal), the draft cart aggregator used while an order is being
//! built, and derived statistics/filters over fetched sale lists.
//!
//! Views consume the capability queries ([`status::StatusInfo`],
//! [`cart::DraftCart`]) rather than matching on raw status strings.

pub mod cart;
pub mod query;
pub mod stats;
pub mod status;

pub use cart::DraftCart;
pub use query::{SaleQuery, SaleSortKey};
pub use stats::SaleStats;
pub use status::{StatusInfo, compute_total};
