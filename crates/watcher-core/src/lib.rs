//! # Watcher Core
//!
//! The domain layer of the Tautulli sharing watcher.
//! This crate contains the data shapes and classification rules with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::ApiError;
