//! # Plant catalog — the Trefle REST API client
//!
//! ## Types
//!
//! - [`CatalogConfig`] — base URL and access token, read from environment
//!   variables.
//! - [`CatalogClient`] — the HTTP client the home and detail screens use.
//! - [`PlantDetail`] — the richer record the detail endpoint returns.
//!
//! ## Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | [`list_plants`](CatalogClient::list_plants) | `GET {base}?token={token}` |
//! | [`get_plant`](CatalogClient::get_plant) | `GET {base}/{id}?token={token}` |
//!
//! Both endpoints wrap their payload in a `{ "data": ... }` envelope. A
//! missing or null `data` array on the list endpoint reads as an empty
//! catalog rather than a decode error.
//!
//! [`filter_by_name`] is the catalog-side search: it never talks to the
//! network, it narrows an already-fetched page the way the home screen's
//! search box does.

use serde::Deserialize;
use store::PlantRecord;

use crate::error::ApiError;

/// Public Trefle plants endpoint; override with `TREFLE_API_URL`.
const DEFAULT_BASE_URL: &str = "https://trefle.io/api/v1/plants";

/// Catalog requests that take longer than this are treated as failed.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Catalog endpoint configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub token: String,
}

impl CatalogConfig {
    /// Read the configuration from environment variables.
    ///
    /// `TREFLE_API_TOKEN` is required; `TREFLE_API_URL` falls back to the
    /// public endpoint.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let token = std::env::var("TREFLE_API_TOKEN")
            .map_err(|_| ApiError::config("TREFLE_API_TOKEN not set"))?;
        let base_url =
            std::env::var("TREFLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { base_url, token })
    }
}

/// List envelope: `{ "data": [ ... ] }`; the array can be absent or null.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Option<Vec<PlantRecord>>,
}

/// Detail envelope: `{ "data": { ... } }`.
#[derive(Debug, Deserialize)]
struct DetailResponse {
    data: PlantDetail,
}

/// Full plant record from the detail endpoint.
///
/// Every field beyond the id is optional; the API omits or nulls whatever
/// its sources do not cover.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantDetail {
    pub id: i64,
    pub common_name: Option<String>,
    pub scientific_name: Option<String>,
    pub image_url: Option<String>,
    pub year: Option<i32>,
    pub bibliography: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub rank: Option<String>,
}

/// HTTP client for the plant catalog.
pub struct CatalogClient {
    config: CatalogConfig,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, ApiError> {
        let builder = reqwest::ClientBuilder::new();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(REQUEST_TIMEOUT);
        let http = builder
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Client configured from environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(CatalogConfig::from_env()?)
    }

    fn list_url(&self) -> String {
        format!("{}?token={}", self.config.base_url, self.config.token)
    }

    fn detail_url(&self, id: i64) -> String {
        format!("{}/{}?token={}", self.config.base_url, id, self.config.token)
    }

    /// Fetch the first page of the catalog.
    pub async fn list_plants(&self) -> Result<Vec<PlantRecord>, ApiError> {
        let response = self.http.get(self.list_url()).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Catalog list request failed: {}", response.status());
            return Err(ApiError::network(format!(
                "catalog returned {}",
                response.status()
            )));
        }

        let body: ListResponse = response.json().await?;
        let plants = body.data.unwrap_or_default();
        tracing::debug!("Fetched {} plants from catalog", plants.len());
        Ok(plants)
    }

    /// Fetch one plant's full record.
    pub async fn get_plant(&self, id: i64) -> Result<PlantDetail, ApiError> {
        let response = self.http.get(self.detail_url(id)).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Catalog detail request for {} failed: {}", id, response.status());
            return Err(ApiError::network(format!(
                "catalog returned {}",
                response.status()
            )));
        }

        let body: DetailResponse = response.json().await?;
        Ok(body.data)
    }
}

/// Narrow a fetched catalog page by name.
///
/// A blank query keeps every plant in its original order. Otherwise the
/// match is case-insensitive against the common *or* scientific name, so
/// "rosa" finds both "Rose" and "Rosa rubiginosa".
pub fn filter_by_name<'a>(plants: &'a [PlantRecord], query: &str) -> Vec<&'a PlantRecord> {
    let needle = query.to_lowercase();
    if needle.trim().is_empty() {
        return plants.iter().collect();
    }

    plants
        .iter()
        .filter(|plant| {
            let common = plant
                .common_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            let scientific = plant
                .scientific_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            common || scientific
        })
        .collect()
}
