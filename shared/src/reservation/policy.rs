//! Reservation confirmation policy and transitions
//!
//! Confirmation is a staff action gated by two rules: the reservation
//! must be for the current calendar day, and more than
//! [`LEAD_TIME_MINUTES`] must remain before the reserved time. The
//! client-side gate mirrors server enforcement; it is a pre-flight check,
//! not a replacement.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::{NaiveDate, NaiveDateTime};

/// Minimum whole minutes that must remain before the reserved time for a
/// confirmation to be accepted (strictly greater than)
pub const LEAD_TIME_MINUTES: i64 = 15;

/// Parse a `YYYY-MM-DD` string into a local calendar date.
///
/// The string is split into year/month/day components and recombined.
/// Parsing the string as an instant would interpret it as UTC midnight
/// and shift the day for western timezones; day-equality logic must go
/// through this function.
pub fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Reason a confirmation is not currently allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDenial {
    /// The reservation is not in PENDING status
    NotPending,
    /// The reservation is not scheduled for today
    NotToday,
    /// Less than the required lead time remains before the reserved time
    InsideLeadTime,
}

impl ConfirmDenial {
    /// Human-readable reason for user display
    pub fn reason(&self) -> &'static str {
        match self {
            ConfirmDenial::NotPending => "The reservation is not pending",
            ConfirmDenial::NotToday => "Only reservations for today can be confirmed",
            ConfirmDenial::InsideLeadTime => {
                "Reservations must be confirmed more than 15 minutes in advance"
            }
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            ConfirmDenial::NotPending => ErrorCode::ReservationNotPending,
            ConfirmDenial::NotToday => ErrorCode::ReservationNotToday,
            ConfirmDenial::InsideLeadTime => ErrorCode::ReservationLeadTimeExpired,
        }
    }
}

impl From<ConfirmDenial> for AppError {
    fn from(denial: ConfirmDenial) -> Self {
        AppError::with_message(denial.code(), denial.reason())
    }
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Completed => "Completed",
        }
    }

    /// Only pending reservations can still be edited
    pub fn can_edit(&self) -> bool {
        matches!(self, ReservationStatus::Pending)
    }

    /// Pending and confirmed reservations can be cancelled
    pub fn can_cancel(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Cancelled | ReservationStatus::Completed)
    }
}

impl Reservation {
    /// The reason confirmation is denied right now, or `None` when it is
    /// allowed
    pub fn confirm_denial(&self, now: NaiveDateTime) -> Option<ConfirmDenial> {
        if self.status != ReservationStatus::Pending {
            return Some(ConfirmDenial::NotPending);
        }
        // Calendar-day comparison; self.date was built component-wise
        if self.date != now.date() {
            return Some(ConfirmDenial::NotToday);
        }
        let reserved_at = self.date.and_time(self.time);
        // Whole elapsed minutes, matching a floor over the difference:
        // 15m59s counts as 15 and is still denied
        let remaining = (reserved_at - now).num_minutes();
        if remaining <= LEAD_TIME_MINUTES {
            return Some(ConfirmDenial::InsideLeadTime);
        }
        None
    }

    /// Whether the confirm action is allowed at `now`
    pub fn can_confirm(&self, now: NaiveDateTime) -> bool {
        self.confirm_denial(now).is_none()
    }

    /// Transition PENDING → CONFIRMED, subject to the confirmation gate.
    ///
    /// Fails without mutating, carrying the denial reason.
    pub fn confirm(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if let Some(denial) = self.confirm_denial(now) {
            tracing::warn!(
                reservation_id = self.id,
                reason = denial.reason(),
                "reservation confirmation rejected"
            );
            return Err(denial.into());
        }
        self.status = ReservationStatus::Confirmed;
        tracing::debug!(reservation_id = self.id, "reservation confirmed");
        Ok(())
    }

    /// Transition {PENDING, CONFIRMED} → CANCELLED.
    ///
    /// Fails without mutating from CANCELLED or COMPLETED.
    pub fn cancel(&mut self) -> AppResult<()> {
        if !self.status.can_cancel() {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotCancellable,
                format!(
                    "A {} reservation cannot be cancelled",
                    self.status.label().to_lowercase()
                ),
            ));
        }
        self.status = ReservationStatus::Cancelled;
        tracing::debug!(reservation_id = self.id, "reservation cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn reservation(date: NaiveDate, time: NaiveTime, status: ReservationStatus) -> Reservation {
        Reservation {
            id: 1,
            customer_id: 2,
            table_id: 3,
            date,
            time,
            party_size: Some(2),
            status,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_local_date() {
        assert_eq!(parse_local_date("2024-01-01"), Some(date(2024, 1, 1)));
        assert_eq!(parse_local_date("2024-12-31"), Some(date(2024, 12, 31)));
        assert_eq!(parse_local_date("2024-02-30"), None);
        assert_eq!(parse_local_date("01/02/2024"), None);
        assert_eq!(parse_local_date("2024-01"), None);
        assert_eq!(parse_local_date(""), None);
    }

    #[test]
    fn test_lead_time_boundary() {
        let now = date(2024, 1, 1).and_time(time(12, 0));

        let r = reservation(date(2024, 1, 1), time(12, 16), ReservationStatus::Pending);
        assert!(r.can_confirm(now));

        // Exactly 15 minutes out is inside the window
        let r = reservation(date(2024, 1, 1), time(12, 15), ReservationStatus::Pending);
        assert!(!r.can_confirm(now));
        assert_eq!(r.confirm_denial(now), Some(ConfirmDenial::InsideLeadTime));
    }

    #[test]
    fn test_fifteen_minutes_plus_seconds_still_denied() {
        // 15m30s remaining truncates to 15 whole minutes
        let now = date(2024, 1, 1).and_time(NaiveTime::from_hms_opt(12, 0, 30).unwrap());
        let r = reservation(date(2024, 1, 1), time(12, 16), ReservationStatus::Pending);
        assert!(!r.can_confirm(now));
    }

    #[test]
    fn test_tomorrow_never_confirmable() {
        let now = date(2024, 1, 1).and_time(time(8, 0));
        let r = reservation(date(2024, 1, 2), time(20, 0), ReservationStatus::Pending);
        assert_eq!(r.confirm_denial(now), Some(ConfirmDenial::NotToday));
    }

    #[test]
    fn test_non_pending_denied_first() {
        let now = date(2024, 1, 1).and_time(time(8, 0));
        for status in [
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            let r = reservation(date(2024, 1, 1), time(20, 0), status);
            assert_eq!(r.confirm_denial(now), Some(ConfirmDenial::NotPending));
        }
    }

    #[test]
    fn test_confirm_transition() {
        let now = date(2024, 1, 1).and_time(time(11, 0));
        let mut r = reservation(date(2024, 1, 1), time(13, 0), ReservationStatus::Pending);
        r.confirm(now).unwrap();
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_confirm_denied_leaves_status() {
        let now = date(2024, 1, 1).and_time(time(12, 50));
        let mut r = reservation(date(2024, 1, 1), time(13, 0), ReservationStatus::Pending);
        let err = r.confirm(now).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationLeadTimeExpired);
        assert_eq!(r.status, ReservationStatus::Pending);
    }

    #[test]
    fn test_cancel_from_pending_and_confirmed() {
        for status in [ReservationStatus::Pending, ReservationStatus::Confirmed] {
            let mut r = reservation(date(2024, 1, 1), time(13, 0), status);
            r.cancel().unwrap();
            assert_eq!(r.status, ReservationStatus::Cancelled);
        }
    }

    #[test]
    fn test_cancel_from_terminal_fails() {
        for status in [ReservationStatus::Cancelled, ReservationStatus::Completed] {
            let mut r = reservation(date(2024, 1, 1), time(13, 0), status);
            let err = r.cancel().unwrap_err();
            assert_eq!(err.code, ErrorCode::ReservationNotCancellable);
            assert_eq!(r.status, status);
        }
    }

    #[test]
    fn test_denial_reasons() {
        assert_eq!(
            ConfirmDenial::NotToday.reason(),
            "Only reservations for today can be confirmed"
        );
        let err: AppError = ConfirmDenial::NotPending.into();
        assert_eq!(err.code, ErrorCode::ReservationNotPending);
        assert_eq!(err.message, "The reservation is not pending");
    }
}
