// File: ./src/client/mod.rs
pub mod core;
pub mod middleware;
pub mod redirect;

pub use crate::client::core::{DEFAULT_RELAY_URL, RelayClient, relay_url_for};
