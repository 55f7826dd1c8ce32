//! Shared types for the Fonda platform
//!
//! Domain model, unified error system, and the business-logic engines
//! (sale lifecycle, reservation lifecycle, draft cart) used by the
//! client crates.

pub mod error;
pub mod models;
pub mod reservation;
pub mod sale;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
