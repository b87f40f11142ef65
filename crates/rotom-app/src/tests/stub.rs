use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rotom_api::{ApiError, Catalog};
use rotom_types::{AbilityRef, AbilityText, EntryDetail};

/// In-memory catalog with a configurable per-name lookup delay, for
/// exercising the handlers without a network.
pub struct StubCatalog {
    entries: HashMap<String, EntryDetail>,
    delays: HashMap<String, Duration>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            delays: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: u32, name: &str, categories: &[&str]) {
        self.entries.insert(
            name.to_string(),
            EntryDetail {
                id,
                name: name.to_string(),
                height: 4,
                weight: 60,
                image_url: None,
                categories: categories.iter().map(|c| c.to_string()).collect(),
                ability_refs: Vec::new(),
            },
        );
    }

    pub fn delay(&mut self, name: &str, delay: Duration) {
        self.delays.insert(name.to_string(), delay);
    }
}

#[async_trait]
impl Catalog for StubCatalog {
    async fn fetch_catalog(&self, _language: &str) -> Result<Vec<EntryDetail>, ApiError> {
        let mut entries: Vec<_> = self.entries.values().cloned().collect();
        entries.sort_by_key(|e| e.id);
        Ok(entries)
    }

    async fn lookup_entry(&self, identifier: &str) -> Result<EntryDetail, ApiError> {
        let query = identifier.trim().to_lowercase();

        if let Some(delay) = self.delays.get(&query) {
            tokio::time::sleep(*delay).await;
        }

        self.entries
            .get(&query)
            .cloned()
            .ok_or(ApiError::NotFound { identifier: query })
    }

    async fn resolve_abilities(&self, refs: &[AbilityRef], language: &str) -> Vec<AbilityText> {
        refs.iter()
            .map(|r| AbilityText {
                name: r.name.clone(),
                effect: format!("effect in {language}"),
            })
            .collect()
    }

    async fn resolve_occurrences(&self, _entry_id: u32) -> Result<Vec<String>, ApiError> {
        Ok(Vec::new())
    }
}
