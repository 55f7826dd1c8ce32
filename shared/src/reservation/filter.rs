//! Reservation list filtering and sorting
//!
//! Pure functions over the fetched reservation list; the views recompute
//! these on demand.

use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::{Days, NaiveDate};

/// Date window for reservation listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    /// Today through the next seven days
    ThisWeek,
    /// Today and later
    Upcoming,
    /// Strictly before today
    Past,
}

impl DateWindow {
    fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::Today => date == today,
            DateWindow::ThisWeek => {
                let end = today
                    .checked_add_days(Days::new(7))
                    .unwrap_or(NaiveDate::MAX);
                date >= today && date < end
            }
            DateWindow::Upcoming => date >= today,
            DateWindow::Past => date < today,
        }
    }
}

/// Sort key for reservation listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservationSortKey {
    #[default]
    Date,
    Time,
}

/// Filter and ordering over a reservation list
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub window: DateWindow,
    pub customer_id: Option<i64>,
    pub sort_by: ReservationSortKey,
    pub descending: bool,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation, today: NaiveDate) -> bool {
        if let Some(status) = self.status
            && reservation.status != status
        {
            return false;
        }
        if let Some(customer_id) = self.customer_id
            && reservation.customer_id != customer_id
        {
            return false;
        }
        self.window.contains(reservation.date, today)
    }

    /// Filtered, sorted view over the list
    pub fn apply<'a>(
        &self,
        reservations: &'a [Reservation],
        today: NaiveDate,
    ) -> Vec<&'a Reservation> {
        let mut matched: Vec<&Reservation> = reservations
            .iter()
            .filter(|r| self.matches(r, today))
            .collect();
        matched.sort_by_key(|r| match self.sort_by {
            ReservationSortKey::Date => (r.date, r.time),
            ReservationSortKey::Time => (NaiveDate::MIN, r.time),
        });
        if self.descending {
            matched.reverse();
        }
        matched
    }
}

/// Split a list into upcoming reservations (today or later, still
/// pending/confirmed) and history (everything else).
pub fn partition_upcoming<'a>(
    reservations: &'a [Reservation],
    today: NaiveDate,
) -> (Vec<&'a Reservation>, Vec<&'a Reservation>) {
    reservations.iter().partition(|r| {
        r.date >= today
            && matches!(
                r.status,
                ReservationStatus::Pending | ReservationStatus::Confirmed
            )
    })
}
