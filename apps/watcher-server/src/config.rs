//! Application configuration loaded from environment variables.
//!
//! Read once at startup; the resulting [`AppConfig`] is shared through the
//! application state.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use watcher_core::domain::HomeRanges;
use watcher_infra::TautulliConfig;
use watcher_infra::cache::DEFAULT_GEO_CACHE_CAPACITY;
use watcher_infra::isp::{DEFAULT_ISP_LOOKUP_URL, DEFAULT_ISP_TIMEOUT};
use watcher_infra::tautulli::DEFAULT_TAUTULLI_TIMEOUT;

pub const DEFAULT_APP_NAME: &str = "Tautulli Sharing Watcher";
pub const DEFAULT_HOME_IP_RANGES: &str = "192.168.178.*";
pub const DEFAULT_IP_LIMIT: i64 = 50;

/// Geolocation settings.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    pub home_ranges: HomeRanges,
    /// Sends client IPs to a third party when enabled.
    pub isp_lookup_enabled: bool,
    pub isp_lookup_url: String,
    pub isp_timeout: Duration,
    pub cache_capacity: usize,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub tautulli: TautulliConfig,
    pub geo: GeoConfig,
    pub default_ip_limit: i64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let tautulli = TautulliConfig::new(
            string_or(vars, "TAUTULLI_URL", ""),
            string_or(vars, "TAUTULLI_API_KEY", ""),
        )
        .with_verify_ssl(flag_or(vars, "TAUTULLI_VERIFY_SSL", true))
        .with_timeout(secs_or(vars, "TAUTULLI_TIMEOUT_SECS", DEFAULT_TAUTULLI_TIMEOUT));

        let geo = GeoConfig {
            home_ranges: HomeRanges::parse(&string_or(
                vars,
                "HOME_IP_RANGES",
                DEFAULT_HOME_IP_RANGES,
            )),
            isp_lookup_enabled: flag_or(vars, "ISP_LOOKUP_ENABLED", false),
            isp_lookup_url: string_or(vars, "ISP_LOOKUP_URL", DEFAULT_ISP_LOOKUP_URL),
            isp_timeout: secs_or(vars, "ISP_LOOKUP_TIMEOUT_SECS", DEFAULT_ISP_TIMEOUT),
            cache_capacity: parsed_or(vars, "GEO_CACHE_CAPACITY", DEFAULT_GEO_CACHE_CAPACITY),
        };

        Self {
            host: string_or(vars, "HOST", "127.0.0.1"),
            port: parsed_or(vars, "PORT", 8080),
            app_name: string_or(vars, "APP_NAME", DEFAULT_APP_NAME),
            tautulli,
            geo,
            default_ip_limit: parsed_or(vars, "DEFAULT_IP_LIMIT", DEFAULT_IP_LIMIT),
        }
    }
}

fn string_or(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(vars: &HashMap<String, String>, key: &str, default: T) -> T {
    vars.get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// Only a literal "true" (any case) switches a flag on.
fn flag_or(vars: &HashMap<String, String>, key: &str, default: bool) -> bool {
    vars.get(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn secs_or(vars: &HashMap<String, String>, key: &str, default: Duration) -> Duration {
    vars.get(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}
