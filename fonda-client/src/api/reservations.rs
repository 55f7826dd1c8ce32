//! Reservation API
//!
//! Confirmation goes through the client-side policy gate first (a
//! pre-flight mirror of server enforcement) and is guarded against
//! double submission.

use crate::{ClientResult, HttpClient, InflightSet};
use chrono::Local;
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};
use shared::reservation::{BusinessHours, schedule};

/// Reservation API service
#[derive(Debug, Clone, Copy)]
pub struct ReservationsApi<'a> {
    http: &'a HttpClient,
    inflight: &'a InflightSet,
}

impl<'a> ReservationsApi<'a> {
    pub fn new(http: &'a HttpClient, inflight: &'a InflightSet) -> Self {
        Self { http, inflight }
    }

    pub async fn list(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get("api/reservations").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Reservation> {
        self.http.get(&format!("api/reservations/{}", id)).await
    }

    /// Create a reservation after field and schedule validation
    pub async fn create(&self, payload: &ReservationCreate) -> ClientResult<Reservation> {
        payload.validate()?;
        let now = Local::now().naive_local();
        schedule::validate_schedule(payload, now, &BusinessHours::default())?;
        self.http.post("api/reservations", payload).await
    }

    pub async fn update(&self, id: i64, payload: &ReservationUpdate) -> ClientResult<Reservation> {
        self.http
            .put(&format!("api/reservations/{}", id), payload)
            .await
    }

    /// Confirm a pending same-day reservation (PENDING → CONFIRMED,
    /// server-side).
    ///
    /// Pre-flight: the policy gate runs on the local copy, so a stale or
    /// out-of-window reservation fails here with its denial reason and no
    /// network call. Guarded against double submission.
    pub async fn confirm(&self, reservation: &Reservation) -> ClientResult<Reservation> {
        let now = Local::now().naive_local();
        let mut preview = reservation.clone();
        preview.confirm(now)?;

        let _permit = self
            .inflight
            .begin("reservation-confirm", reservation.id)?;
        self.http
            .put_empty(&format!("api/reservations/{}/confirm", reservation.id))
            .await
    }

    /// Cancel a pending or confirmed reservation
    pub async fn cancel(&self, reservation: &Reservation) -> ClientResult<()> {
        let mut preview = reservation.clone();
        preview.cancel()?;

        self.http
            .delete(&format!("api/reservations/{}", reservation.id))
            .await
    }

    pub async fn by_customer(&self, customer_id: i64) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!("api/reservations/customer/{}", customer_id))
            .await
    }

    /// Pending and confirmed reservations for a customer
    pub async fn active_by_customer(&self, customer_id: i64) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!("api/reservations/customer/{}/active", customer_id))
            .await
    }

    /// Future-dated reservations for a customer
    pub async fn future_by_customer(&self, customer_id: i64) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!("api/reservations/customer/{}/future", customer_id))
            .await
    }

    /// Today's confirmed reservations for a customer (sale-opening flow)
    pub async fn today_confirmed_by_customer(
        &self,
        customer_id: i64,
    ) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!(
                "api/reservations/customer/{}/today-confirmed",
                customer_id
            ))
            .await
    }

    /// Reservations belonging to the authenticated customer
    pub async fn mine(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get("api/reservations/mine").await
    }
}
