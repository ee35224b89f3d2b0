//! HTTP client for the product card API using wreq for browser emulation.

use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::wildberries::encoding;
use crate::wildberries::headers::{self, DEST, HOST};
use crate::wildberries::models::LookupResult;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::header::CONTENT_ENCODING;
use wreq::Client;
use wreq_util::Emulation;

/// Trait for product fetching - enables mocking for tests.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches and decodes the product card for an article.
    async fn fetch(&self, article: &str) -> Result<LookupResult>;
}

/// Product card client with browser impersonation.
pub struct WbClient {
    client: Client,
    request_timeout: Duration,
    base_url: Option<String>,
}

impl WbClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let request_timeout = config.timeouts().request;

        // No transparent decompression; bodies arrive exactly as sent
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self { client, request_timeout, base_url })
    }

    /// Returns the base URL (custom for testing, or the fixed API host).
    fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| format!("https://{}", HOST))
    }

    /// Builds the lookup URL. The article is interpolated as given.
    pub fn product_url(&self, article: &str) -> String {
        format!("{}/cards/detail?&dest={}&nm={}", self.base_url(), DEST, article)
    }

    fn send_error(&self, err: wreq::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.request_timeout)
        } else if err.is_builder() {
            LookupError::Client(err)
        } else {
            LookupError::Network(err)
        }
    }

    fn read_error(&self, err: wreq::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout(self.request_timeout)
        } else {
            LookupError::Body(err)
        }
    }
}

#[async_trait]
impl ProductSource for WbClient {
    async fn fetch(&self, article: &str) -> Result<LookupResult> {
        let url = self.product_url(article);

        info!("Fetching product: {}", article);
        debug!("GET {}", url);

        // Static headers replace the emulation profile's values of the same name
        let response = self
            .client
            .get(&url)
            .emulation(Emulation::Firefox136)
            .headers(headers::header_map())
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let content_encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        debug!("Content-Encoding: {:?}", content_encoding);

        let raw = response.bytes().await.map_err(|e| self.read_error(e))?;
        debug!("Read {} bytes", raw.len());

        let body = encoding::decode_body(content_encoding.as_deref(), &raw)
            .map_err(LookupError::Decompress)?;

        LookupResult::from_body(article, &body)
    }
}
