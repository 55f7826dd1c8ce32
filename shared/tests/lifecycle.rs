//! End-to-end lifecycle scenarios across the sale and reservation
//! engines.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::error::ErrorCode;
use shared::models::reservation::{Reservation, ReservationStatus};
use shared::models::sale::{Sale, SaleStatus};
use shared::sale::DraftCart;

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

#[test]
fn draft_to_finalized_sale() {
    // Build the draft locally
    let mut cart = DraftCart::new();
    cart.add_item(11, 2, 45.0).unwrap();
    cart.add_item(12, 1, 25.0).unwrap();
    cart.add_item(11, 1, 45.0).unwrap();
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.total(), 160.0);

    // Persisted draft comes back as a pending sale
    let mut sale = Sale {
        id: 100,
        customer_id: Some(7),
        reservation_id: None,
        status: SaleStatus::Pending,
        lines: cart.lines().to_vec(),
        assigned_username: Some("luis.p".to_string()),
        created_at: None,
    };
    assert!(sale.can_finalize());
    assert!(sale.status_info().can_edit);

    // Finalize freezes everything
    sale.finalize().unwrap();
    assert_eq!(sale.status, SaleStatus::Finalized);
    assert!(!sale.status_info().can_edit);
    assert!(sale.status.can_print());

    // Edit-after-finalize must fail, not silently succeed
    let mut frozen = DraftCart::for_sale(&sale);
    assert_eq!(
        frozen.add_item(13, 1, 10.0).unwrap_err().code,
        ErrorCode::SaleNotEditable
    );
    assert_eq!(
        frozen.remove_item(11).unwrap_err().code,
        ErrorCode::SaleNotEditable
    );

    // And the sale itself refuses further transitions
    assert_eq!(
        sale.cancel().unwrap_err().code,
        ErrorCode::SaleAlreadyFinalized
    );
    assert_eq!(
        sale.finalize().unwrap_err().code,
        ErrorCode::SaleAlreadyFinalized
    );
}

#[test]
fn reservation_confirmation_day() {
    let mut reservation = Reservation {
        id: 1,
        customer_id: 7,
        table_id: 3,
        date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        party_size: Some(4),
        status: ReservationStatus::Pending,
    };

    // The day before: date gate blocks
    let err = reservation.confirm(at(2024, 5, 19, 12, 0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservationNotToday);

    // Same day, too close to the reserved time: lead-time gate blocks
    let err = reservation.confirm(at(2024, 5, 20, 13, 50)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservationLeadTimeExpired);
    assert_eq!(reservation.status, ReservationStatus::Pending);

    // Same day, well ahead: allowed
    reservation.confirm(at(2024, 5, 20, 12, 0)).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Confirmed);

    // Confirmed reservations can still be cancelled, once
    reservation.cancel().unwrap();
    assert_eq!(reservation.status, ReservationStatus::Cancelled);
    assert_eq!(
        reservation.cancel().unwrap_err().code,
        ErrorCode::ReservationNotCancellable
    );
}
