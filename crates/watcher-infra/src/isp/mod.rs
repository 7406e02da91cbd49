//! Secondary ISP lookup via ip-api.com.

mod ip_api;

pub use ip_api::{DEFAULT_ISP_LOOKUP_URL, DEFAULT_ISP_TIMEOUT, IpApiResolver};
