//! Thin reqwest wrapper over the TripAI backend endpoints.
//!
//! One method per endpoint, each returning the parsed reply envelope. The
//! cookie store keeps the backend's session cookie across calls; the transport
//! timeout comes from [`Config`] and is the only timeout in the crate.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    GenerateTripResponse, MinBudgetResponse, RecentTripsResponse, SaveTripResponse,
    TripRequest, TripStatsResponse,
};

#[derive(Debug, Clone)]
pub struct TripApi {
    client: reqwest::Client,
    base_url: String,
}

impl TripApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical page URL for a trip, used for share links and view navigation.
    /// Not fetched by this crate.
    pub fn trip_url(&self, trip_id: &str) -> String {
        format!("{}/trip/{}", self.base_url, trip_id)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /generate_trip`, form-encoded.
    pub async fn generate_trip(
        &self,
        request: &TripRequest,
    ) -> Result<GenerateTripResponse, ApiError> {
        info!(
            start = %request.start_location,
            destination = %request.destination,
            "requesting trip generation"
        );
        let response = self
            .client
            .post(self.endpoint("/generate_trip"))
            .form(request)
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /download_trip_pdf/{trip_id}`, returning the raw document bytes.
    pub async fn download_pdf(&self, trip_id: &str) -> Result<Vec<u8>, ApiError> {
        info!(trip_id, "downloading trip PDF");
        let response = self
            .client
            .get(self.endpoint(&format!("/download_trip_pdf/{trip_id}")))
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST /save_trip/{trip_id}`.
    pub async fn save_trip(&self, trip_id: &str) -> Result<SaveTripResponse, ApiError> {
        info!(trip_id, "saving trip");
        let response = self
            .client
            .post(self.endpoint(&format!("/save_trip/{trip_id}")))
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/recent_trips`.
    pub async fn recent_trips(&self) -> Result<RecentTripsResponse, ApiError> {
        debug!("loading recent trips");
        let response = self
            .client
            .get(self.endpoint("/api/recent_trips"))
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/trip_stats`.
    pub async fn trip_stats(&self) -> Result<TripStatsResponse, ApiError> {
        debug!("loading trip stats");
        let response = self
            .client
            .get(self.endpoint("/api/trip_stats"))
            .send()
            .await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/calculate_min_budget` with URL-encoded query parameters.
    pub async fn calculate_min_budget(
        &self,
        start_location: &str,
        destination: &str,
        num_days: u32,
    ) -> Result<f64, ApiError> {
        let url = format!(
            "{}/api/calculate_min_budget?start_location={}&destination={}&num_days={}",
            self.base_url,
            urlencoding::encode(start_location),
            urlencoding::encode(destination),
            num_days
        );
        debug!(%url, "estimating minimum budget");
        let response = check_response(self.client.get(&url).send().await?).await?;
        let reply: MinBudgetResponse = response.json().await?;
        Ok(reply.min_budget)
    }
}

/// Pass success responses through; turn anything else into `ApiError::Status`
/// carrying whatever body text the backend sent.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> TripApi {
        TripApi::new(&Config::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_base_url() {
        let api = api("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.trip_url("abc123"), "http://localhost:5000/trip/abc123");
    }

    #[tokio::test]
    async fn success_responses_pass_through() {
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(200)
                .body(r#"{"success": true}"#)
                .unwrap(),
        );
        let response = check_response(response).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn error_statuses_carry_the_body() {
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(503)
                .body("backend is down")
                .unwrap(),
        );
        match check_response(response).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "backend is down");
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }
}
