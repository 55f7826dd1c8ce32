//! Serde helpers for lenient numeric parsing
//!
//! The backend occasionally emits numeric fields as strings, nulls, or
//! garbage. List rendering and total computation must never fail on such
//! rows, so numeric sale fields deserialize through these adapters and
//! fold anything unusable to zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an `f64` from a number, a numeric string, or anything else
/// (including an absent value via `#[serde(default)]`), folding unusable
/// input to `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value_to_f64(value.as_ref()))
}

/// Deserialize an `i32` quantity with the same folding rules, truncating
/// fractional values.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value_to_f64(value.as_ref()) as i32)
}

fn value_to_f64(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
