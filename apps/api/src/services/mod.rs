//! Mock service layer. Every operation suspends for a fixed simulated latency
//! and then resolves to static fixture data; nothing here performs I/O beyond
//! the session store. Swap these for real clients when a backend exists.

pub mod admin;
pub mod api_client;
pub mod candidate;
pub mod fixtures;
pub mod recruiter;

use std::time::Duration;

pub use api_client::ApiClient;

/// Simulated network delay. No retries, no cancellation: an in-flight call
/// always completes and its result is always applied.
pub async fn simulate_delay(latency: Duration) {
    tokio::time::sleep(latency).await;
}
