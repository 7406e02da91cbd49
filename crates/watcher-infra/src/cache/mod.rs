//! Geo cache implementations.

mod memory;

pub use memory::{DEFAULT_GEO_CACHE_CAPACITY, InMemoryGeoCache};
