//! Command-based client for the Tautulli v2 API.
//!
//! Every call is a `GET <base_url>/api/v2?apikey=..&cmd=..&<params>` answered
//! with an envelope of the form:
//!
//! ```json
//! { "response": { "result": "success", "message": null, "data": ... } }
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use watcher_core::ApiError;
use watcher_core::domain::{GeoAnnotation, IpHistoryRow, IpRowsPayload, User};
use watcher_core::ports::MonitoringApi;

/// Default timeout for Tautulli requests.
pub const DEFAULT_TAUTULLI_TIMEOUT: Duration = Duration::from_secs(10);

const CMD_GET_USERS: &str = "get_users";
const CMD_GET_USER_IPS: &str = "get_user_ips";
const CMD_GET_GEOIP_LOOKUP: &str = "get_geoip_lookup";

/// Connection settings for the Tautulli API.
#[derive(Clone)]
pub struct TautulliConfig {
    /// Base URL without the `/api/v2` suffix.
    pub base_url: String,
    pub api_key: String,
    pub verify_ssl: bool,
    pub timeout: Duration,
}

impl TautulliConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            verify_ssl: true,
            timeout: DEFAULT_TAUTULLI_TIMEOUT,
        }
    }

    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Both base URL and API key are set.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

// The API key is never printed.
impl fmt::Debug for TautulliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TautulliConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Tautulli API client.
pub struct TautulliClient {
    config: TautulliConfig,
    http: reqwest::Client,
}

impl TautulliClient {
    pub fn new(config: TautulliConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &TautulliConfig {
        &self.config
    }

    /// Run a command and return the `data` field of a successful response.
    ///
    /// Fails fast with [`ApiError::Configuration`] when the base URL or API
    /// key is empty; no request is made in that case.
    pub async fn call_command(
        &self,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<Option<Value>, ApiError> {
        if !self.config.is_configured() {
            return Err(ApiError::Configuration(
                "TAUTULLI_URL / TAUTULLI_API_KEY not set".to_string(),
            ));
        }

        tracing::debug!(cmd = command, "Calling Tautulli API");

        let url = format!("{}/api/v2", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.config.api_key.as_str()), ("cmd", command)])
            .query(params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ApiError::transport(command, e.to_string()))?;

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| ApiError::decode(command, e.to_string()))?;

        let body = envelope
            .response
            .ok_or_else(|| ApiError::decode(command, "missing response envelope"))?;

        if body.result.as_deref() != Some("success") {
            let message = body
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ApiError::upstream(command, message));
        }

        Ok(body.data)
    }

    fn decode_data<T: DeserializeOwned + Default>(
        command: &str,
        data: Option<Value>,
    ) -> Result<T, ApiError> {
        match data {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::decode(command, e.to_string()))
            }
        }
    }
}

#[async_trait]
impl MonitoringApi for TautulliClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let data = self.call_command(CMD_GET_USERS, &[]).await?;
        Self::decode_data(CMD_GET_USERS, data)
    }

    async fn list_user_ips(&self, user_id: i64, limit: i64) -> Result<Vec<IpHistoryRow>, ApiError> {
        let params = [
            ("user_id", user_id.to_string()),
            ("length", limit.to_string()),
            ("order_column", "last_seen".to_string()),
            ("order_dir", "desc".to_string()),
        ];
        let data = self.call_command(CMD_GET_USER_IPS, &params).await?;

        let rows = IpRowsPayload::decode(data)
            .into_rows()
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<IpHistoryRow>(row) {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::warn!(user_id, error = %e, "Skipping malformed IP history row");
                    None
                }
            })
            .collect();

        Ok(rows)
    }

    async fn lookup_geoip(&self, ip_address: &str) -> Result<GeoAnnotation, ApiError> {
        let params = [("ip_address", ip_address.to_string())];
        let data = self.call_command(CMD_GET_GEOIP_LOOKUP, &params).await?;
        Self::decode_data(CMD_GET_GEOIP_LOOKUP, data)
    }
}
