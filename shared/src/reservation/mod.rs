//! Reservation lifecycle
//!
//! The confirmation policy (same-day, lead-time gated), the status state
//! machine, business-hours slot generation, and pure list
//! filtering/statistics:
//!
//! ```text
//! PENDING ──confirm (gated)──▶ CONFIRMED ──cancel──▶ CANCELLED (terminal)
//!    └──────────cancel────────────────────────────▶ CANCELLED
//! COMPLETED is reached only by the backend (terminal)
//! ```

pub mod filter;
pub mod policy;
pub mod schedule;
pub mod stats;

pub use filter::{DateWindow, ReservationFilter, ReservationSortKey, partition_upcoming};
pub use policy::{ConfirmDenial, LEAD_TIME_MINUTES, parse_local_date};
pub use schedule::{BusinessHours, available_slots};
pub use stats::ReservationStats;
