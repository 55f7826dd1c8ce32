//! Reservation Model
//!
//! Wire shapes for table reservations. The confirmation gate and status
//! transitions live in [`crate::reservation::policy`].

use crate::error::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Reservation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    /// Set by the backend once the party has been seated; never produced
    /// client-side
    Completed,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub table_id: i64,
    /// Calendar date, wire format `YYYY-MM-DD`
    #[serde(with = "local_date")]
    pub date: NaiveDate,
    /// Local time of day, wire format `HH:MM` or `HH:MM:SS`
    #[serde(with = "local_time")]
    pub time: NaiveTime,
    pub party_size: Option<i32>,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_id: i64,
    pub table_id: i64,
    #[serde(with = "local_date")]
    pub date: NaiveDate,
    #[serde(with = "local_time")]
    pub time: NaiveTime,
    pub party_size: Option<i32>,
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub table_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "local_date_opt")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "local_time_opt")]
    pub time: Option<NaiveTime>,
    pub party_size: Option<i32>,
}

impl ReservationCreate {
    pub fn validate(&self) -> AppResult<()> {
        if self.customer_id <= 0 {
            return Err(AppError::required("customer"));
        }
        if self.table_id <= 0 {
            return Err(AppError::required("table"));
        }
        if let Some(size) = self.party_size
            && size <= 0
        {
            return Err(AppError::validation("Party size must be greater than 0")
                .with_detail("field", "party_size"));
        }
        Ok(())
    }
}

/// Serde adapter for `YYYY-MM-DD` dates going through the component-wise
/// local construction (see [`crate::reservation::policy::parse_local_date`]).
pub(crate) mod local_date {
    use crate::reservation::policy::parse_local_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_local_date(&raw)
            .ok_or_else(|| Error::custom(format!("invalid date string: {raw:?}")))
    }
}

pub(crate) mod local_date_opt {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => super::local_date::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => crate::reservation::policy::parse_local_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date string: {s:?}"))),
            None => Ok(None),
        }
    }
}

/// Serde adapter for `HH:MM` / `HH:MM:SS` local times
pub(crate) mod local_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| Error::custom(format!("invalid time string: {raw:?}")))
    }

    pub(crate) fn parse(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .ok()
    }
}

pub(crate) mod local_time_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => super::local_time::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => super::local_time::parse(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time string: {s:?}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        let json = r#"{
            "id": 1, "customer_id": 2, "table_id": 3,
            "date": "2024-01-01", "time": "12:30",
            "party_size": 4, "status": "PENDING"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(r.time, NaiveTime::from_hms_opt(12, 30, 0).unwrap());

        let back = serde_json::to_string(&r).unwrap();
        assert!(back.contains("\"2024-01-01\""));
        assert!(back.contains("\"12:30\""));
    }

    #[test]
    fn test_time_with_seconds_accepted() {
        let json = r#"{
            "id": 1, "customer_id": 2, "table_id": 3,
            "date": "2024-06-15", "time": "18:45:00",
            "party_size": null, "status": "CONFIRMED"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.time, NaiveTime::from_hms_opt(18, 45, 0).unwrap());
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"{
            "id": 1, "customer_id": 2, "table_id": 3,
            "date": "01/02/2024", "time": "12:00",
            "party_size": null, "status": "PENDING"
        }"#;
        assert!(serde_json::from_str::<Reservation>(json).is_err());
    }

    #[test]
    fn test_create_validation() {
        let payload = ReservationCreate {
            customer_id: 1,
            table_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            party_size: Some(0),
        };
        assert!(payload.validate().is_err());
    }
}
