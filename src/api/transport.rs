//! HTTP seam for the trivia client.
//!
//! The client only ever issues JSON GETs, so the trait is that narrow. Tests
//! swap in a fake that records the requested URLs.

use super::ApiError;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` and parse the body as JSON.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError>;
}

/// Production transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("crabquiz/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<serde_json::Value>().await?)
    }
}
