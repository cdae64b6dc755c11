//! HTTP client for the geonames city records API.

use crate::types::{City, RecordsResponse};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use stratus_core::error::ReqwestErrorExt;
use stratus_core::{AppError, ConfigError, NetworkError};
use thiserror::Error;
use url::Url;

const RECORDS_PATH: &str = "/api/records/1.0/search/";
const DATASET: &str = "geonames-all-cities-with-a-population-1000";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default rows per page for browsing and search.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// City search errors
#[derive(Debug, Error)]
pub enum CitySearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("City search returned status {0}")]
    Status(u16),

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}

/// Client for the paginated city-search source.
#[derive(Debug, Clone)]
pub struct CitySearchClient {
    base_url: Url,
    client: Arc<Client>,
    page_size: u32,
}

impl CitySearchClient {
    /// Create a new client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, CitySearchError> {
        let base_url = Url::parse(base_url).map_err(|e| CitySearchError::BaseUrl(e.to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the batch size (rows per page).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one fixed-size batch for the given 1-based page number.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<City>, CitySearchError> {
        let offset = (page.max(1) - 1) * self.page_size;
        let url = self.records_url()?;
        let rows = self.page_size.to_string();
        let start = offset.to_string();

        tracing::debug!(page, offset, "Fetching city page");

        let response = self
            .client
            .get(url)
            .query(&[
                ("dataset", DATASET),
                ("rows", rows.as_str()),
                ("start", start.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CitySearchError::Status(status.as_u16()));
        }

        let body: RecordsResponse = response.json().await?;
        let cities = body.into_cities();
        tracing::debug!(page, count = cities.len(), "City page fetched");
        Ok(cities)
    }

    /// Full-text search against the source (independent of pagination).
    pub async fn search(&self, query: &str) -> Result<Vec<City>, CitySearchError> {
        let url = self.records_url()?;
        let rows = self.page_size.to_string();

        tracing::debug!(query, "Searching cities");

        let response = self
            .client
            .get(url)
            .query(&[
                ("dataset", DATASET),
                ("q", query),
                ("rows", rows.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CitySearchError::Status(status.as_u16()));
        }

        let body: RecordsResponse = response.json().await?;
        Ok(body.into_cities())
    }

    fn records_url(&self) -> Result<Url, CitySearchError> {
        self.base_url
            .join(RECORDS_PATH)
            .map_err(|e| CitySearchError::BaseUrl(e.to_string()))
    }
}

impl From<CitySearchError> for AppError {
    fn from(e: CitySearchError) -> Self {
        match e {
            CitySearchError::Network(e) => AppError::Network(e.into_network_error()),
            CitySearchError::Status(status) => AppError::Network(NetworkError::ServerError {
                status,
                message: "city search failed".into(),
            }),
            CitySearchError::BaseUrl(msg) => AppError::Config(ConfigError::Invalid(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_status_maps_to_app_network_error() {
        let app_err: AppError = CitySearchError::Status(502).into();
        assert_eq!(
            app_err.user_message(),
            "The server is experiencing issues. Please try again later."
        );

        let app_err: AppError = CitySearchError::Status(404).into();
        assert_eq!(app_err.user_message(), "The request failed. Please try again.");
    }

    #[test]
    fn bad_base_url_maps_to_app_config_error() {
        let app_err: AppError = CitySearchError::BaseUrl("relative URL".into()).into();
        assert!(matches!(app_err, AppError::Config(_)));
        assert_eq!(
            app_err.user_message(),
            "Invalid configuration. Check your settings."
        );
    }
}
