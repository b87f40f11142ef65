use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rotom_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Generation of the most recent lookup; responses from older
    /// generations are stale and must not reach the display.
    lookup_generation: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            lookup_generation: AtomicU64::new(0),
        }
    }

    /// Start a new lookup, making every older in-flight lookup stale.
    /// Returns the token the caller must check before applying results.
    pub fn begin_lookup(&self) -> u64 {
        self.lookup_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.lookup_generation.load(Ordering::SeqCst) == generation
    }
}
