//! HTTP order source backed by the orders JSON API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::orders::OrdersPage;

use super::{FetchError, OrderSource};

/// Fetches order pages with `GET {base_url}?page={n}`.
pub struct HttpOrderSource {
    client: Client,
    base_url: String,
}

impl HttpOrderSource {
    /// Create a new HttpOrderSource with the given configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(u64::from(config.timeout_secs)));
        }
        let client = builder.build().map_err(|e| {
            FetchError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, page: u32) -> Result<OrdersPage, FetchError> {
        debug!(url = %self.base_url, page = page, "Requesting orders page");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else if e.is_connect() {
                    FetchError::ConnectionFailed(e.to_string())
                } else {
                    FetchError::ApiError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::ApiError(format!("Failed to read response body: {}", e))
            }
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::InvalidResponse {
            page,
            reason: e.to_string(),
        })
    }
}
