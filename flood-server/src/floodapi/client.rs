//! Flood-monitoring HTTP client.
//!
//! Provides async methods for querying the Environment Agency real-time
//! flood-monitoring API. The API is open access; no credentials are needed.

use chrono::{DateTime, Utc};

use crate::domain::StationId;

use super::error::FloodError;
use super::types::{
    ReadingItem, ReadingsResponse, StationDetailResponse, StationItem, StationsResponse,
};

/// Default base URL for the flood-monitoring API.
const DEFAULT_BASE_URL: &str = "https://environment.data.gov.uk/flood-monitoring";

/// Configuration for the flood API client.
#[derive(Debug, Clone)]
pub struct FloodConfig {
    /// Base URL for the API (defaults to the production EA endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FloodConfig {
    /// Create a config with the default base URL and a 10-second timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flood-monitoring API client.
#[derive(Debug, Clone)]
pub struct FloodClient {
    http: reqwest::Client,
    base_url: String,
}

impl FloodClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FloodConfig) -> Result<Self, FloodError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full station list.
    ///
    /// Uses `_view=full` so measures and scale information come back
    /// inline, avoiding a per-station detail request.
    pub async fn fetch_stations(&self) -> Result<Vec<StationItem>, FloodError> {
        let url = format!("{}/id/stations", self.base_url);

        let response = self.http.get(&url).query(&[("_view", "full")]).send().await?;
        let body = check_status(response).await?;

        let response: StationsResponse = parse_json(&body)?;
        Ok(response.items.unwrap_or_default())
    }

    /// Fetch a single station by identifier.
    ///
    /// Returns `StationNotFound` for unknown identifiers.
    pub async fn fetch_station(&self, id: &StationId) -> Result<StationItem, FloodError> {
        let url = format!("{}/id/stations/{}.json", self.base_url, id.as_str());

        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FloodError::StationNotFound);
        }

        let body = check_status(response).await?;

        // The API answers some unknown ids with an empty document
        if body.is_empty() || body == "null" {
            return Err(FloodError::StationNotFound);
        }

        let response: StationDetailResponse = parse_json(&body)?;
        response.items.ok_or(FloodError::StationNotFound)
    }

    /// Fetch readings for a station since the given instant, newest first.
    pub async fn fetch_readings(
        &self,
        id: &StationId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ReadingItem>, FloodError> {
        let url = format!("{}/id/stations/{}/readings", self.base_url, id.as_str());
        let since_str = since.format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("since", since_str.as_str()), ("_sorted", "")])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FloodError::StationNotFound);
        }

        let body = check_status(response).await?;

        let response: ReadingsResponse = parse_json(&body)?;
        Ok(response.items.unwrap_or_default())
    }
}

/// Triage the response status and return the body on success.
async fn check_status(response: reqwest::Response) -> Result<String, FloodError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(FloodError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FloodError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

/// Parse a JSON body, keeping a snippet of the body in the error.
fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, FloodError> {
    serde_json::from_str(body).map_err(|e| FloodError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
