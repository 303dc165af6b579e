use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; nothing is required for the demo to boot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for a future real backend. Unused by any mock service.
    pub api_base_url: String,
    /// Where the current session (token + user record) is persisted.
    pub session_file: PathBuf,
    /// Overrides every simulated latency when set (MOCK_LATENCY_MS).
    pub mock_latency: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mock_latency = match std::env::var("MOCK_LATENCY_MS") {
            Ok(v) => Some(Duration::from_millis(
                v.parse::<u64>()
                    .context("MOCK_LATENCY_MS must be a number of milliseconds")?,
            )),
            Err(_) => None,
        };

        Ok(Config {
            api_base_url: env_or("API_BASE_URL", "/api"),
            session_file: PathBuf::from(env_or("SESSION_FILE", "skillmatch_session.json")),
            mock_latency,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
