//! GMA results feed adapter: typed response shapes and the HTTP client.

pub mod client;
pub mod types;

pub use client::{snapshot_from_tally, TallyClient};
pub use types::TallyResponse;
