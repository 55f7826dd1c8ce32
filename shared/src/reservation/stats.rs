//! Derived reservation statistics

use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Counts per status plus today's load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReservationStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
    /// Reservations dated today, any status
    pub today: usize,
}

impl ReservationStats {
    pub fn collect(reservations: &[Reservation], today: NaiveDate) -> Self {
        let mut stats = Self {
            total: reservations.len(),
            ..Self::default()
        };
        for r in reservations {
            match r.status {
                ReservationStatus::Pending => stats.pending += 1,
                ReservationStatus::Confirmed => stats.confirmed += 1,
                ReservationStatus::Cancelled => stats.cancelled += 1,
                ReservationStatus::Completed => stats.completed += 1,
            }
            if r.date == today {
                stats.today += 1;
            }
        }
        stats
    }

    /// Share of reservations confirmed, as a percentage; 0 for an empty
    /// list
    pub fn confirmed_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.confirmed as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn reservation(d: NaiveDate, status: ReservationStatus) -> Reservation {
        Reservation {
            id: 1,
            customer_id: 1,
            table_id: 1,
            date: d,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            party_size: None,
            status,
        }
    }

    #[test]
    fn test_collect() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let other = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let list = vec![
            reservation(today, ReservationStatus::Pending),
            reservation(today, ReservationStatus::Confirmed),
            reservation(other, ReservationStatus::Confirmed),
            reservation(other, ReservationStatus::Cancelled),
        ];
        let stats = ReservationStats::collect(&list, today);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.confirmed_percent(), 50.0);
    }

    #[test]
    fn test_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(ReservationStats::collect(&[], today).confirmed_percent(), 0.0);
    }
}
