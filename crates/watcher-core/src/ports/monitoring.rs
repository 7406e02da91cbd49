use async_trait::async_trait;

use crate::domain::{GeoAnnotation, IpHistoryRow, User};
use crate::error::ApiError;

/// The monitoring API (Tautulli) as seen by the rest of the system.
#[async_trait]
pub trait MonitoringApi: Send + Sync {
    /// All users known to the server.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// A user's IP history, most recently seen first.
    async fn list_user_ips(&self, user_id: i64, limit: i64) -> Result<Vec<IpHistoryRow>, ApiError>;

    /// Raw geolocation for one address, without caching or home handling.
    async fn lookup_geoip(&self, ip_address: &str) -> Result<GeoAnnotation, ApiError>;
}
