use async_trait::async_trait;

use crate::domain::GeoAnnotation;

/// Geo cache trait - memoizes annotations by IP address.
///
/// Entries never expire; implementations bound the number of distinct keys.
#[async_trait]
pub trait GeoCache: Send + Sync {
    /// Get the cached annotation for an address.
    async fn get(&self, ip_address: &str) -> Option<GeoAnnotation>;

    /// Store an annotation, possibly evicting an older entry.
    async fn put(&self, ip_address: &str, annotation: GeoAnnotation);

    /// Number of cached addresses.
    async fn len(&self) -> usize;

    /// Maximum number of cached addresses.
    fn capacity(&self) -> usize;
}
