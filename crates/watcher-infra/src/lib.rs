//! # Watcher Infrastructure
//!
//! Concrete implementations of the ports defined in `watcher-core`:
//! the Tautulli API client, the ip-api.com ISP resolver and the in-memory
//! geo cache, plus the [`GeoLocator`] that composes them.

pub mod cache;
pub mod geo;
pub mod isp;
pub mod tautulli;

pub use cache::InMemoryGeoCache;
pub use geo::GeoLocator;
pub use isp::IpApiResolver;
pub use tautulli::{TautulliClient, TautulliConfig};
