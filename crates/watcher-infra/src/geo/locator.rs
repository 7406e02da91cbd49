use std::sync::Arc;

use watcher_core::domain::{GeoAnnotation, HomeRanges};
use watcher_core::ports::{GeoCache, IspResolver, MonitoringApi};

/// Resolves IP addresses to geo annotations.
///
/// Home addresses get the synthetic home annotation without touching the
/// network or the cache. Other addresses go through the cache, then the
/// monitoring API, then (when configured and the ISP is missing) the ISP
/// resolver. Lookup failures degrade to an empty annotation and are not
/// cached.
///
/// Concurrent misses for the same address are not coalesced.
pub struct GeoLocator {
    api: Arc<dyn MonitoringApi>,
    cache: Arc<dyn GeoCache>,
    home: HomeRanges,
    isp: Option<Arc<dyn IspResolver>>,
}

impl GeoLocator {
    pub fn new(api: Arc<dyn MonitoringApi>, cache: Arc<dyn GeoCache>, home: HomeRanges) -> Self {
        Self {
            api,
            cache,
            home,
            isp: None,
        }
    }

    /// Enable ISP enrichment through the given resolver.
    pub fn with_isp_resolver(mut self, resolver: Arc<dyn IspResolver>) -> Self {
        self.isp = Some(resolver);
        self
    }

    pub fn home_ranges(&self) -> &HomeRanges {
        &self.home
    }

    pub fn cache(&self) -> &Arc<dyn GeoCache> {
        &self.cache
    }

    pub async fn lookup(&self, ip_address: &str) -> GeoAnnotation {
        if ip_address.is_empty() {
            return GeoAnnotation::default();
        }

        if self.home.contains(ip_address) {
            return GeoAnnotation::home();
        }

        if let Some(cached) = self.cache.get(ip_address).await {
            return cached;
        }

        let mut geo = match self.api.lookup_geoip(ip_address).await {
            Ok(geo) => geo,
            Err(e) => {
                tracing::warn!(ip = ip_address, error = %e, "GeoIP lookup failed");
                return GeoAnnotation::default();
            }
        };

        if let Some(resolver) = &self.isp {
            if geo.lacks_isp() {
                match resolver.resolve_isp(ip_address).await {
                    Ok(Some(isp)) => geo.isp = Some(isp),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::warn!(ip = ip_address, error = %e, "ISP lookup failed");
                    }
                }
            }
        }

        self.cache.put(ip_address, geo.clone()).await;
        geo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use watcher_core::ApiError;
    use watcher_core::domain::{IpHistoryRow, User};
    use watcher_core::ports::IspError;

    use crate::cache::InMemoryGeoCache;

    /// Counts geo lookups; fails them when `fail` is set.
    #[derive(Default)]
    struct FakeApi {
        geo_calls: AtomicUsize,
        fail: bool,
        isp: Option<String>,
    }

    #[async_trait]
    impl MonitoringApi for FakeApi {
        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            Ok(Vec::new())
        }

        async fn list_user_ips(&self, _: i64, _: i64) -> Result<Vec<IpHistoryRow>, ApiError> {
            Ok(Vec::new())
        }

        async fn lookup_geoip(&self, ip_address: &str) -> Result<GeoAnnotation, ApiError> {
            self.geo_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ApiError::transport("get_geoip_lookup", "connection refused"));
            }
            Ok(GeoAnnotation {
                country: Some("United States".to_string()),
                city: Some(format!("city-of-{ip_address}")),
                latitude: Some(37.4),
                longitude: Some(-122.0),
                isp: self.isp.clone(),
                ..GeoAnnotation::default()
            })
        }
    }

    struct FakeIsp {
        calls: AtomicUsize,
        answer: Result<Option<String>, String>,
    }

    impl FakeIsp {
        fn answering(answer: Result<Option<String>, String>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                answer,
            })
        }
    }

    #[async_trait]
    impl IspResolver for FakeIsp {
        async fn resolve_isp(&self, _: &str) -> Result<Option<String>, IspError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone().map_err(IspError::Transport)
        }
    }

    fn locator(api: Arc<FakeApi>) -> GeoLocator {
        GeoLocator::new(
            api,
            Arc::new(InMemoryGeoCache::new(16)),
            HomeRanges::parse("192.168.178.*,10.0.0."),
        )
    }

    #[tokio::test]
    async fn test_home_ip_skips_network_and_cache() {
        let api = Arc::new(FakeApi::default());
        let locator = locator(api.clone());

        for ip in ["192.168.178.5", "192.168.178.77", "10.0.0.1"] {
            assert_eq!(locator.lookup(ip).await, GeoAnnotation::home());
        }

        assert_eq!(api.geo_calls.load(Ordering::SeqCst), 0);
        assert_eq!(locator.cache().len().await, 0);
    }

    #[tokio::test]
    async fn test_lookup_is_memoized() {
        let api = Arc::new(FakeApi::default());
        let locator = locator(api.clone());

        let first = locator.lookup("8.8.8.8").await;
        let second = locator.lookup("8.8.8.8").await;

        assert_eq!(first, second);
        assert_eq!(first.city.as_deref(), Some("city-of-8.8.8.8"));
        assert_eq!(api.geo_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty_and_is_retried() {
        let api = Arc::new(FakeApi {
            fail: true,
            ..FakeApi::default()
        });
        let locator = locator(api.clone());

        assert_eq!(locator.lookup("8.8.8.8").await, GeoAnnotation::default());
        assert_eq!(locator.lookup("8.8.8.8").await, GeoAnnotation::default());
        assert_eq!(api.geo_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_ip_is_empty_annotation() {
        let api = Arc::new(FakeApi::default());
        let locator = locator(api.clone());

        assert_eq!(locator.lookup("").await, GeoAnnotation::default());
        assert_eq!(api.geo_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_isp_enrichment_fills_missing_isp() {
        let api = Arc::new(FakeApi::default());
        let isp = FakeIsp::answering(Ok(Some("Google LLC".to_string())));
        let locator = locator(api).with_isp_resolver(isp.clone());

        let geo = locator.lookup("8.8.8.8").await;
        assert_eq!(geo.isp.as_deref(), Some("Google LLC"));

        // served from cache the second time
        locator.lookup("8.8.8.8").await;
        assert_eq!(isp.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_isp_enrichment_skipped_when_upstream_has_isp() {
        let api = Arc::new(FakeApi {
            isp: Some("Upstream ISP".to_string()),
            ..FakeApi::default()
        });
        let isp = FakeIsp::answering(Ok(Some("Other".to_string())));
        let locator = locator(api).with_isp_resolver(isp.clone());

        let geo = locator.lookup("8.8.8.8").await;
        assert_eq!(geo.isp.as_deref(), Some("Upstream ISP"));
        assert_eq!(isp.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_isp_failure_leaves_isp_unset() {
        let api = Arc::new(FakeApi::default());
        let isp = FakeIsp::answering(Err("timed out".to_string()));
        let locator = locator(api).with_isp_resolver(isp);

        let geo = locator.lookup("8.8.8.8").await;
        assert!(geo.isp.is_none());
        assert_eq!(geo.country.as_deref(), Some("United States"));
    }

    #[tokio::test]
    async fn test_isp_lookup_disabled_by_default() {
        let api = Arc::new(FakeApi::default());
        let geo = locator(api).lookup("8.8.8.8").await;
        assert!(geo.isp.is_none());
    }
}
