use crate::adapters::http::ApiClient;
use crate::core::{ReservationApi, ReservationPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const RESERVATIONS_ENDPOINT: &str = "/reservations";

#[derive(Debug, Clone)]
pub struct ReservationService {
    client: ApiClient,
}

impl ReservationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReservationApi for ReservationService {
    async fn create_reservation(&self, payload: &ReservationPayload) -> Result<serde_json::Value> {
        tracing::debug!("POST {} {:?}", RESERVATIONS_ENDPOINT, payload);
        self.client.post(RESERVATIONS_ENDPOINT, payload).await
    }
}
