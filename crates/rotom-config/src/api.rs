use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("POKEAPI_URL")
            .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string());

        let timeout_seconds = env::var("API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Self {
            base_url,
            timeout_seconds,
        }
    }
}
