//! Business-hours slot generation
//!
//! The reservation form offers a 30-minute grid of times within opening
//! hours. For today the grid starts strictly after the current time; past
//! dates produce no slots.

use crate::error::{AppError, AppResult};
use crate::models::reservation::ReservationCreate;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Grid spacing for offered reservation times
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Opening hours for reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            opening: NaiveTime::from_hms_opt(9, 0, 0).expect("valid opening time"),
            closing: NaiveTime::from_hms_opt(18, 0, 0).expect("valid closing time"),
        }
    }
}

impl BusinessHours {
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.opening && time <= self.closing
    }
}

/// Reservation times offered for `date`.
///
/// Empty for past dates; truncated to strictly-after-now for today; the
/// full grid otherwise.
pub fn available_slots(
    date: NaiveDate,
    now: NaiveDateTime,
    hours: &BusinessHours,
) -> Vec<NaiveTime> {
    if date < now.date() {
        return Vec::new();
    }
    let is_today = date == now.date();

    let mut slots = Vec::new();
    let mut slot = hours.opening;
    while slot <= hours.closing {
        if !is_today || slot > now.time() {
            slots.push(slot);
        }
        match slot.overflowing_add_signed(Duration::minutes(SLOT_INTERVAL_MINUTES)) {
            // overflow wraps past midnight; the grid is done
            (next, 0) => slot = next,
            _ => break,
        }
    }
    slots
}

/// Schedule validation for a new reservation: the date must not be in the
/// past, the time must fall within opening hours, and same-day
/// reservations must be later than now.
pub fn validate_schedule(
    payload: &ReservationCreate,
    now: NaiveDateTime,
    hours: &BusinessHours,
) -> AppResult<()> {
    if payload.date < now.date() {
        return Err(AppError::validation("Reservation date cannot be in the past")
            .with_detail("field", "date"));
    }
    if !hours.contains(payload.time) {
        return Err(AppError::validation(format!(
            "Reservation time must be between {} and {}",
            hours.opening.format("%H:%M"),
            hours.closing.format("%H:%M")
        ))
        .with_detail("field", "time"));
    }
    if payload.date == now.date() && payload.time <= now.time() {
        return Err(AppError::validation("Reservation time has already passed")
            .with_detail("field", "time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_full_grid_for_future_date() {
        let now = date(2024, 1, 1).and_time(time(12, 0));
        let slots = available_slots(date(2024, 1, 5), now, &BusinessHours::default());
        // 09:00..=18:00 on a 30-minute grid
        assert_eq!(slots.len(), 19);
        assert_eq!(slots.first(), Some(&time(9, 0)));
        assert_eq!(slots.last(), Some(&time(18, 0)));
    }

    #[test]
    fn test_today_truncates_strictly_after_now() {
        let now = date(2024, 1, 1).and_time(time(12, 0));
        let slots = available_slots(date(2024, 1, 1), now, &BusinessHours::default());
        // 12:00 itself is excluded
        assert_eq!(slots.first(), Some(&time(12, 30)));
        assert!(slots.iter().all(|s| *s > time(12, 0)));
    }

    #[test]
    fn test_past_date_has_no_slots() {
        let now = date(2024, 1, 10).and_time(time(12, 0));
        assert!(available_slots(date(2024, 1, 9), now, &BusinessHours::default()).is_empty());
    }

    #[test]
    fn test_after_closing_today_has_no_slots() {
        let now = date(2024, 1, 1).and_time(time(18, 30));
        assert!(available_slots(date(2024, 1, 1), now, &BusinessHours::default()).is_empty());
    }

    fn payload(d: NaiveDate, t: NaiveTime) -> ReservationCreate {
        ReservationCreate {
            customer_id: 1,
            table_id: 2,
            date: d,
            time: t,
            party_size: Some(2),
        }
    }

    #[test]
    fn test_validate_schedule() {
        let now = date(2024, 1, 10).and_time(time(12, 0));
        let hours = BusinessHours::default();

        assert!(validate_schedule(&payload(date(2024, 1, 11), time(13, 0)), now, &hours).is_ok());
        // Past date
        assert!(validate_schedule(&payload(date(2024, 1, 9), time(13, 0)), now, &hours).is_err());
        // Outside opening hours
        assert!(validate_schedule(&payload(date(2024, 1, 11), time(8, 0)), now, &hours).is_err());
        assert!(
            validate_schedule(&payload(date(2024, 1, 11), time(18, 30)), now, &hours).is_err()
        );
        // Today, already passed
        assert!(validate_schedule(&payload(date(2024, 1, 10), time(11, 0)), now, &hours).is_err());
        // Today, still ahead
        assert!(validate_schedule(&payload(date(2024, 1, 10), time(14, 0)), now, &hours).is_ok());
    }
}
