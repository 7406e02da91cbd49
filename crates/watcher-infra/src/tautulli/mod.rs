//! Tautulli v2 API client.

mod client;

pub use client::{DEFAULT_TAUTULLI_TIMEOUT, TautulliClient, TautulliConfig};
