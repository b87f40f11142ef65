use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use rotom_config::Config;
use rotom_types::{AbilityRef, AbilityText, EntryDetail, EntrySummary, humanize_location};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::wire::{AbilityDetail, Encounter, ListingPage, PokemonDetail};
use crate::{ApiError, Catalog, NO_DESCRIPTION_FALLBACK};

#[derive(Clone)]
pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
    max_in_flight: usize,
}

impl PokeApiClient {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: config.api.base_url.clone(),
            client,
            max_in_flight: config.fetch.max_in_flight,
        }
    }

    /// Fetch the full catalog: collect summaries across every listing page,
    /// then resolve all of them to detail records in one bounded fan-out.
    pub async fn fetch_catalog(&self, language: &str) -> Result<Vec<EntryDetail>, ApiError> {
        let first_url = format!("{}/pokemon?language={}", self.base_url, language);
        let mut page = self.fetch_page(&first_url).await?;
        let mut summaries = page.results;

        while let Some(next_url) = page.next.take() {
            page = self.fetch_page(&next_url).await?;
            summaries.extend(page.results);
        }

        tracing::debug!(count = summaries.len(), "catalog listing collected");
        self.resolve_details(summaries).await
    }

    /// Resolve a single identifier (name or numeric id) to a detail record.
    pub async fn lookup_entry(&self, identifier: &str) -> Result<EntryDetail, ApiError> {
        let query = identifier.trim().to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, query);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { identifier: query });
        }
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let detail: PokemonDetail = response.json().await?;
        Ok(detail.into())
    }

    /// Resolve one ability's effect text in the given language, falling back
    /// to a fixed string when the upstream record has no text for it.
    pub async fn resolve_ability_text(
        &self,
        ability: &AbilityRef,
        language: &str,
    ) -> Result<AbilityText, ApiError> {
        let response = self.client.get(&ability.url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let detail: AbilityDetail = response.json().await?;
        let effect = detail
            .effect_for(language)
            .unwrap_or(NO_DESCRIPTION_FALLBACK)
            .to_string();

        Ok(AbilityText {
            name: detail.name,
            effect,
        })
    }

    /// Resolve every ability concurrently, keeping the order of `refs` in the
    /// output. A failed ability is logged and skipped; siblings are unaffected.
    pub async fn resolve_abilities(
        &self,
        refs: &[AbilityRef],
        language: &str,
    ) -> Vec<AbilityText> {
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut tasks = JoinSet::new();

        for (idx, ability) in refs.iter().cloned().enumerate() {
            let api = self.clone();
            let language = language.to_string();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                (idx, ability.name.clone(), api.resolve_ability_text(&ability, &language).await)
            });
        }

        let mut slots: Vec<Option<AbilityText>> = vec![None; refs.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, _, Ok(text))) => slots[idx] = Some(text),
                Ok((_, name, Err(e))) => {
                    tracing::warn!(ability = %name, "ability resolution failed: {e}");
                }
                Err(e) => tracing::error!("ability task panicked: {e}"),
            }
        }

        slots.into_iter().flatten().collect()
    }

    /// Resolve the occurrence locations of one entry, display-formatted.
    pub async fn resolve_occurrences(&self, entry_id: u32) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/pokemon/{}/encounters", self.base_url, entry_id);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let encounters: Vec<Encounter> = response.json().await?;
        Ok(encounters
            .into_iter()
            .map(|e| humanize_location(&e.location_area.name))
            .collect())
    }

    async fn fetch_page(&self, url: &str) -> Result<ListingPage, ApiError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Bounded "issue many, join all" over every summary. Any failure aborts
    /// the whole batch; partial catalogs are never returned.
    async fn resolve_details(
        &self,
        summaries: Vec<EntrySummary>,
    ) -> Result<Vec<EntryDetail>, ApiError> {
        let total = summaries.len();
        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut tasks = JoinSet::new();

        for (idx, summary) in summaries.into_iter().enumerate() {
            let api = self.clone();
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                (idx, api.fetch_detail(&summary.url).await)
            });
        }

        // Listing order is restored by index; join order is arbitrary.
        let mut slots: Vec<Option<EntryDetail>> = vec![None; total];
        while let Some(joined) = tasks.join_next().await {
            let (idx, detail) = joined?;
            slots[idx] = Some(detail?);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    async fn fetch_detail(&self, url: &str) -> Result<EntryDetail, ApiError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let detail: PokemonDetail = response.json().await?;
        Ok(detail.into())
    }
}

#[async_trait::async_trait]
impl Catalog for PokeApiClient {
    async fn fetch_catalog(&self, language: &str) -> Result<Vec<EntryDetail>, ApiError> {
        PokeApiClient::fetch_catalog(self, language).await
    }

    async fn lookup_entry(&self, identifier: &str) -> Result<EntryDetail, ApiError> {
        PokeApiClient::lookup_entry(self, identifier).await
    }

    async fn resolve_abilities(&self, refs: &[AbilityRef], language: &str) -> Vec<AbilityText> {
        PokeApiClient::resolve_abilities(self, refs, language).await
    }

    async fn resolve_occurrences(&self, entry_id: u32) -> Result<Vec<String>, ApiError> {
        PokeApiClient::resolve_occurrences(self, entry_id).await
    }
}
