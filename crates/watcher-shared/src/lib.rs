//! # Watcher Shared
//!
//! Wire types of the dashboard's JSON API, shared by the server and any
//! client that wants to consume it.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
