//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod isp;
mod monitoring;

pub use cache::GeoCache;
pub use isp::{IspError, IspResolver};
pub use monitoring::MonitoringApi;
