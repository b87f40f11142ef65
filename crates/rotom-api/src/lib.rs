mod client;
mod wire;

pub use client::PokeApiClient;

use rotom_types::{AbilityRef, AbilityText, EntryDetail};

/// Effect text shown when an ability has no entry in the selected language.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available in selected language";

/// Catalog backend interface
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch every entry of the catalog, following pagination to exhaustion,
    /// and resolve each summary to its full detail record
    async fn fetch_catalog(&self, language: &str) -> Result<Vec<EntryDetail>, ApiError>;

    /// Resolve one free-text identifier (name or numeric id) to a detail record
    async fn lookup_entry(&self, identifier: &str) -> Result<EntryDetail, ApiError>;

    /// Resolve ability effect texts in the given language, preserving the
    /// order of `refs`; failed abilities are logged and skipped
    async fn resolve_abilities(&self, refs: &[AbilityRef], language: &str) -> Vec<AbilityText>;

    /// Resolve the known occurrence locations of one entry; an empty list is
    /// a valid outcome
    async fn resolve_occurrences(&self, entry_id: u32) -> Result<Vec<String>, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no entry matches \"{identifier}\"")]
    NotFound { identifier: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
