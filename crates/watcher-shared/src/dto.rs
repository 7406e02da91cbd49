//! Data Transfer Objects - response types for the API.
//!
//! Absent values serialize as `null` so every key is always present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's public information, values as Tautulli reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: Option<Value>,
    pub username: Option<Value>,
    /// Display name, falling back to the username.
    pub friendly_name: Option<Value>,
    pub email: Option<Value>,
    pub is_active: Option<Value>,
    pub is_admin: Option<Value>,
}

/// GET /api/users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
}

/// One IP address a user connected from, with its location.
///
/// The `*_ts` fields carry the raw Unix seconds so clients can sort without
/// re-parsing the formatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpEntry {
    pub ip_address: Option<String>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub last_played: Option<String>,
    pub first_seen_ts: Option<i64>,
    pub last_seen_ts: Option<i64>,
    pub last_played_ts: Option<i64>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub is_home: bool,
    pub isp: Option<String>,
}

/// GET /api/users/{user_id}/ips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpsResponse {
    pub ips: Vec<IpEntry>,
}
