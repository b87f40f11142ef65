use std::env;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::fetch::FetchConfig;

pub mod api;
pub mod fetch;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub fetch: FetchConfig,

    /// Display language for ability effect texts (ISO 639-1 code)
    pub language: String,
}

impl Config {
    pub fn new() -> Self {
        let language = env::var("DISPLAY_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        Config {
            api: ApiConfig::new(),
            fetch: FetchConfig::new(),
            language,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
