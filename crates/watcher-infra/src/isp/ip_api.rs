//! ISP resolver backed by the ip-api.com JSON endpoint.
//!
//! Enabling it sends client addresses to a third party.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use watcher_core::ports::{IspError, IspResolver};

pub const DEFAULT_ISP_LOOKUP_URL: &str = "http://ip-api.com";

/// Kept short so a slow lookup cannot stall a whole IP listing.
pub const DEFAULT_ISP_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    isp: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct IpApiResolver {
    base_url: String,
    http: reqwest::Client,
}

impl IpApiResolver {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, IspError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IspError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl IspResolver for IpApiResolver {
    async fn resolve_isp(&self, ip_address: &str) -> Result<Option<String>, IspError> {
        let url = format!("{}/json/{}", self.base_url, ip_address);

        let body: IpApiResponse = self
            .http
            .get(&url)
            .query(&[("fields", "status,isp,message")])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| IspError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| IspError::Transport(e.to_string()))?;

        if body.status.as_deref() != Some("success") {
            return Err(IspError::Rejected(
                body.message.unwrap_or_else(|| "unknown status".to_string()),
            ));
        }

        Ok(body.isp.filter(|isp| !isp.is_empty()))
    }
}
