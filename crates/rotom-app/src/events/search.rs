use std::sync::Arc;

use kanal::AsyncSender;
use rotom_api::{ApiError, Catalog};
use rotom_types::AppEvent;

use crate::state::AppState;

/// Resolve a search query to an entry and kick off its enrichments.
///
/// The generation token taken at issue time guards every result: if a
/// newer search started while this one was in flight, its results are
/// dropped instead of overwriting the newer display.
pub async fn handle_search(
    state: Arc<AppState>,
    catalog: Arc<dyn Catalog>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    query: String,
) -> anyhow::Result<()> {
    let generation = state.begin_lookup();
    let language = { state.config.read().await.language.clone() };

    match catalog.lookup_entry(&query).await {
        Ok(entry) => {
            if !state.is_current(generation) {
                tracing::debug!(%query, "stale lookup result discarded");
                return Ok(());
            }

            app_to_ui_tx
                .send(AppEvent::ShowEntry {
                    entry: entry.clone(),
                    generation,
                })
                .await?;

            spawn_enrichments(state, catalog, app_to_ui_tx.clone(), entry, language, generation);
        }
        Err(ApiError::NotFound { .. }) => {
            app_to_ui_tx
                .send(AppEvent::Status("Pokémon not found!".to_string()))
                .await?;
        }
        Err(e) => {
            tracing::error!(%query, "lookup failed: {e}");
            app_to_ui_tx
                .send(AppEvent::Status(
                    "Lookup failed, try again later.".to_string(),
                ))
                .await?;
        }
    }

    Ok(())
}

/// Abilities and occurrences resolve in the background; the lookup result
/// is already on screen when they land.
fn spawn_enrichments(
    state: Arc<AppState>,
    catalog: Arc<dyn Catalog>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    entry: rotom_types::EntryDetail,
    language: String,
    generation: u64,
) {
    let entry_id = entry.id;

    {
        let state = Arc::clone(&state);
        let catalog = Arc::clone(&catalog);
        let tx = app_to_ui_tx.clone();
        let refs = entry.ability_refs.clone();
        let language = language.clone();

        tokio::spawn(async move {
            let abilities = catalog.resolve_abilities(&refs, &language).await;
            if !state.is_current(generation) {
                tracing::debug!(entry_id, "stale ability results discarded");
                return;
            }
            if let Err(e) = tx
                .send(AppEvent::ShowAbilities {
                    entry_id,
                    abilities,
                    generation,
                })
                .await
            {
                tracing::error!("failed to send ability results: {e}");
            }
        });
    }

    tokio::spawn(async move {
        let locations = match catalog.resolve_occurrences(entry_id).await {
            Ok(locations) => locations,
            Err(e) => {
                // Surfaces as the empty "no known occurrences" state
                tracing::error!(entry_id, "occurrence fetch failed: {e}");
                Vec::new()
            }
        };

        if !state.is_current(generation) {
            tracing::debug!(entry_id, "stale occurrence results discarded");
            return;
        }
        if let Err(e) = app_to_ui_tx
            .send(AppEvent::ShowOccurrences {
                entry_id,
                locations,
                generation,
            })
            .await
        {
            tracing::error!("failed to send occurrence results: {e}");
        }
    });
}
