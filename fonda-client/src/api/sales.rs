//! Sale API
//!
//! Line items travel as partial upserts (only the rows being added or
//! changed); the backend merges by product and returns the authoritative
//! sale. Finalization and cancellation are re-checked locally against the
//! sale's lifecycle before any network call.

use crate::{ClientError, ClientResult, HttpClient, InflightSet};
use shared::models::{Sale, SaleUpsert};
use shared::sale::SaleQuery;

/// Sale API service
#[derive(Debug, Clone, Copy)]
pub struct SalesApi<'a> {
    http: &'a HttpClient,
    inflight: &'a InflightSet,
}

impl<'a> SalesApi<'a> {
    pub fn new(http: &'a HttpClient, inflight: &'a InflightSet) -> Self {
        Self { http, inflight }
    }

    pub async fn list(&self, query: &SaleQuery) -> ClientResult<Vec<Sale>> {
        self.http.get_with("api/sales", &query.to_params()).await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Sale> {
        self.http.get(&format!("api/sales/{}", id)).await
    }

    pub async fn create(&self, payload: &SaleUpsert) -> ClientResult<Sale> {
        payload.validate()?;
        self.http.post("api/sales", payload).await
    }

    /// Full update (line-item upsert); the returned sale carries the
    /// merged line list
    pub async fn update(&self, id: i64, payload: &SaleUpsert) -> ClientResult<Sale> {
        payload.validate()?;
        self.http.put(&format!("api/sales/{}", id), payload).await
    }

    /// Add a single product to a draft sale, creating the draft when
    /// `payload.id` is absent. The backend merges quantities for a
    /// product already on the sale.
    pub async fn add_product(&self, payload: &SaleUpsert) -> ClientResult<Sale> {
        payload.validate()?;
        self.http.post("api/sales/add-product", payload).await
    }

    /// Finalize a pending sale (PENDING → FINALIZED, server-side).
    ///
    /// Pre-flight: the transition is applied to a local copy first, so a
    /// stale terminal sale fails here without a network call. Guarded
    /// against double submission.
    pub async fn finalize(&self, sale: &Sale) -> ClientResult<Sale> {
        let mut preview = sale.clone();
        preview.finalize()?;

        let _permit = self.inflight.begin("sale-finalize", sale.id)?;
        self.http
            .put_empty(&format!("api/sales/finalize/{}", sale.id))
            .await
    }

    /// Cancel a pending sale (soft delete, PENDING → CANCELLED).
    pub async fn cancel(&self, sale: &Sale) -> ClientResult<()> {
        let mut preview = sale.clone();
        preview.cancel()?;

        self.http.delete(&format!("api/sales/{}", sale.id)).await
    }

    pub async fn by_customer(&self, customer_id: i64) -> ClientResult<Vec<Sale>> {
        self.http
            .get(&format!("api/sales/customer/{}", customer_id))
            .await
    }

    /// The customer's current draft (open PENDING sale), if any
    pub async fn open_sale(&self, customer_id: i64) -> ClientResult<Option<Sale>> {
        match self
            .http
            .get(&format!("api/sales/open/{}", customer_id))
            .await
        {
            Ok(sale) => Ok(Some(sale)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Receipt PDF; only obtainable once the sale is finalized
    pub async fn ticket_pdf(&self, sale: &Sale) -> ClientResult<Vec<u8>> {
        if !sale.status.can_print() {
            return Err(shared::AppError::invalid_transition(
                "Receipt is only available for finalized sales",
            )
            .into());
        }
        self.http
            .get_bytes(&format!("api/sales/ticket/{}", sale.id))
            .await
    }
}
