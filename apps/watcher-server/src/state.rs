//! Application state - shared across all handlers.

use std::sync::Arc;

use watcher_core::ApiError;
use watcher_core::ports::{GeoCache, IspError, MonitoringApi};
use watcher_infra::{GeoLocator, InMemoryGeoCache, IpApiResolver, TautulliClient};

use crate::config::AppConfig;

/// Failures while wiring up the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Tautulli client: {0}")]
    Api(#[from] ApiError),

    #[error("ISP resolver: {0}")]
    Isp(#[from] IspError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn MonitoringApi>,
    pub geo: Arc<GeoLocator>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: AppConfig) -> Result<Self, StateError> {
        if !config.tautulli.is_configured() {
            tracing::warn!("TAUTULLI_URL or TAUTULLI_API_KEY not set. API calls will fail.");
        }

        let api: Arc<dyn MonitoringApi> = Arc::new(TautulliClient::new(config.tautulli.clone())?);
        let cache: Arc<dyn GeoCache> = Arc::new(InMemoryGeoCache::new(config.geo.cache_capacity));

        let mut geo = GeoLocator::new(api.clone(), cache, config.geo.home_ranges.clone());
        if config.geo.isp_lookup_enabled {
            tracing::info!(url = %config.geo.isp_lookup_url, "External ISP lookup enabled");
            let resolver = IpApiResolver::new(&config.geo.isp_lookup_url, config.geo.isp_timeout)?;
            geo = geo.with_isp_resolver(Arc::new(resolver));
        }

        tracing::info!(
            home_prefixes = ?config.geo.home_ranges.prefixes(),
            cache_capacity = config.geo.cache_capacity,
            "Application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            api,
            geo: Arc::new(geo),
        })
    }
}
