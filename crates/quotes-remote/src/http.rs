//! HTTP remote source.

use async_trait::async_trait;
use quotes_core::error::TransportError;
use quotes_core::traits::RemoteSource;
use quotes_core::types::Quote;
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::projection::{project_items, RemoteItem};

/// Remote endpoint configuration.
#[derive(Debug, Clone)]
pub struct HttpRemoteConfig {
    /// Single URL serving both GET (list) and POST (submit)
    pub endpoint: String,
    /// Bound on each request, connect through body
    pub timeout: Duration,
    /// Maximum quotes returned per listing
    pub max_items: usize,
    /// Category given to every listed quote
    pub origin_category: String,
}

impl HttpRemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_origin_category(mut self, category: impl Into<String>) -> Self {
        self.origin_category = category.into();
        self
    }
}

impl Default for HttpRemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://jsonplaceholder.typicode.com/posts".to_string(),
            timeout: Duration::from_secs(5),
            max_items: 5,
            origin_category: "Server".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    text: &'a str,
    category: &'a str,
}

/// Remote source talking JSON over HTTP.
pub struct HttpRemoteSource {
    config: HttpRemoteConfig,
    client: Client,
}

impl HttpRemoteSource {
    /// Create a new client.
    pub fn new(config: HttpRemoteConfig) -> Result<Self, TransportError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn map_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Connection(e.to_string())
        }
    }

    async fn check_status(resp: Response) -> Result<Response, TransportError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn list_remote(&self) -> Result<Vec<Quote>, TransportError> {
        let resp = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        let resp = Self::check_status(resp).await?;

        let body = resp.text().await.map_err(|e| self.map_error(e))?;
        let items: Vec<RemoteItem> =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

        let total = items.len();
        let quotes = project_items(items, &self.config.origin_category, self.config.max_items);
        debug!("Fetched {} remote items, kept {}", total, quotes.len());
        Ok(quotes)
    }

    async fn submit_one(&self, quote: &Quote) -> Result<(), TransportError> {
        let body = SubmitRequest {
            text: &quote.text,
            category: &quote.category,
        };

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        Self::check_status(resp).await?;

        info!("Quote submitted to {}", self.config.endpoint);
        Ok(())
    }

    fn name(&self) -> &str {
        "HTTP"
    }
}
