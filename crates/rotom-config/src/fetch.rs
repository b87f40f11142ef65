use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct FetchConfig {
    /// Ceiling on concurrent detail/ability requests in one fan-out batch
    pub max_in_flight: usize,
}

impl FetchConfig {
    pub fn new() -> Self {
        let max_in_flight = env::var("MAX_IN_FLIGHT_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(16); // 16 concurrent requests default

        Self { max_in_flight }
    }
}
