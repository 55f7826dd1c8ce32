//! Dining Table Model

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Maximum seats a single table can be configured with
pub const MAX_TABLE_CAPACITY: i32 = 20;

/// Table status, backend-authoritative display data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    /// Display number, unique across the restaurant
    pub number: i32,
    pub capacity: i32,
    pub location: String,
    #[serde(default)]
    pub status: TableStatus,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: i32,
    pub capacity: i32,
    pub location: String,
    pub status: Option<TableStatus>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub number: Option<i32>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub status: Option<TableStatus>,
}

impl DiningTableCreate {
    /// Field-level validation (uniqueness is checked separately against
    /// the fetched table list)
    pub fn validate(&self) -> AppResult<()> {
        if self.number <= 0 {
            return Err(AppError::required("number"));
        }
        validate_capacity(self.capacity)?;
        if self.location.trim().is_empty() {
            return Err(AppError::required("location"));
        }
        Ok(())
    }

    /// Full pre-flight check including number uniqueness
    pub fn validate_against(&self, existing: &[DiningTable]) -> AppResult<()> {
        self.validate()?;
        validate_unique_number(existing, self.number, None)
    }
}

impl DiningTableUpdate {
    /// Validate the fields present; `table_id` excludes the table itself
    /// from the uniqueness check
    pub fn validate_against(&self, existing: &[DiningTable], table_id: i64) -> AppResult<()> {
        if let Some(capacity) = self.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(location) = &self.location
            && location.trim().is_empty()
        {
            return Err(AppError::required("location"));
        }
        if let Some(number) = self.number {
            validate_unique_number(existing, number, Some(table_id))?;
        }
        Ok(())
    }
}

fn validate_capacity(capacity: i32) -> AppResult<()> {
    if capacity <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Capacity must be greater than 0",
        )
        .with_detail("field", "capacity"));
    }
    if capacity > MAX_TABLE_CAPACITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Capacity cannot exceed {} seats", MAX_TABLE_CAPACITY),
        )
        .with_detail("field", "capacity"));
    }
    Ok(())
}

/// Check that `number` is not already used by another table.
///
/// The error message names the conflicting table's location so the user
/// can find it on the floor.
pub fn validate_unique_number(
    existing: &[DiningTable],
    number: i32,
    exclude_id: Option<i64>,
) -> AppResult<()> {
    let conflict = existing
        .iter()
        .find(|t| t.number == number && Some(t.id) != exclude_id);
    match conflict {
        Some(table) => Err(AppError::with_message(
            ErrorCode::TableNumberTaken,
            format!("Table #{} already exists in {}", number, table.location),
        )
        .with_detail("number", number)
        .with_detail("location", table.location.clone())),
        None => Ok(()),
    }
}

/// Derived table statistics, recomputed on demand from the current list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub maintenance: usize,
}

impl TableStats {
    pub fn collect(tables: &[DiningTable]) -> Self {
        let mut stats = Self {
            total: tables.len(),
            ..Self::default()
        };
        for table in tables {
            match table.status {
                TableStatus::Available => stats.available += 1,
                TableStatus::Occupied => stats.occupied += 1,
                TableStatus::Reserved => stats.reserved += 1,
                TableStatus::Maintenance => stats.maintenance += 1,
            }
        }
        stats
    }

    /// Share of tables currently occupied, as a percentage; 0 for an
    /// empty list
    pub fn occupancy_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.occupied as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, number: i32, location: &str, status: TableStatus) -> DiningTable {
        DiningTable {
            id,
            number,
            capacity: 4,
            location: location.to_string(),
            status,
        }
    }

    fn create(number: i32, capacity: i32) -> DiningTableCreate {
        DiningTableCreate {
            number,
            capacity,
            location: "Terrace".to_string(),
            status: None,
        }
    }

    #[test]
    fn test_valid_create() {
        assert!(create(7, 4).validate().is_ok());
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(create(7, 0).validate().is_err());
        assert!(create(7, -2).validate().is_err());
        assert!(create(7, 21).validate().is_err());
        assert!(create(7, 20).validate().is_ok());
    }

    #[test]
    fn test_unique_number_names_location() {
        let existing = vec![table(1, 5, "Main hall", TableStatus::Available)];
        let err = validate_unique_number(&existing, 5, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNumberTaken);
        assert!(err.message.contains("Main hall"));
    }

    #[test]
    fn test_unique_number_excludes_self_on_update() {
        let existing = vec![table(1, 5, "Main hall", TableStatus::Available)];
        assert!(validate_unique_number(&existing, 5, Some(1)).is_ok());
        assert!(validate_unique_number(&existing, 5, Some(2)).is_err());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        let existing = vec![table(1, 5, "Main hall", TableStatus::Available)];
        let update = DiningTableUpdate {
            status: Some(TableStatus::Maintenance),
            ..Default::default()
        };
        assert!(update.validate_against(&existing, 2).is_ok());
    }

    #[test]
    fn test_stats_counts_and_occupancy() {
        let tables = vec![
            table(1, 1, "Main hall", TableStatus::Available),
            table(2, 2, "Main hall", TableStatus::Occupied),
            table(3, 3, "Terrace", TableStatus::Occupied),
            table(4, 4, "Terrace", TableStatus::Reserved),
        ];
        let stats = TableStats::collect(&tables);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.reserved, 1);
        assert_eq!(stats.maintenance, 0);
        assert_eq!(stats.occupancy_percent(), 50.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = TableStats::collect(&[]);
        assert_eq!(stats.occupancy_percent(), 0.0);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&TableStatus::Maintenance).unwrap();
        assert_eq!(json, "\"MAINTENANCE\"");
    }
}
