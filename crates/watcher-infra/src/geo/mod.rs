//! Memoized geolocation with home-range short circuit and ISP enrichment.

mod locator;

pub use locator::GeoLocator;
