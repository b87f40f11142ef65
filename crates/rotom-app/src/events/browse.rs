use std::sync::Arc;

use kanal::AsyncSender;
use rotom_api::Catalog;
use rotom_types::{AppEvent, EntryDetail};

use crate::state::AppState;

/// Fetch the full catalog and show the entries of one category.
pub async fn handle_browse(
    state: Arc<AppState>,
    catalog: Arc<dyn Catalog>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    category: String,
) -> anyhow::Result<()> {
    let language = { state.config.read().await.language.clone() };

    let entries = match catalog.fetch_catalog(&language).await {
        Ok(entries) => filter_by_category(entries, &category),
        Err(e) => {
            // An empty catalog renders as "No Pokémon found!"
            tracing::error!(%category, "catalog fetch failed: {e}");
            Vec::new()
        }
    };

    app_to_ui_tx.send(AppEvent::ShowCatalog(entries)).await?;
    Ok(())
}

/// Keep entries carrying the category under any of their category slots.
pub fn filter_by_category(entries: Vec<EntryDetail>, category: &str) -> Vec<EntryDetail> {
    let wanted = category.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.categories.iter().any(|c| *c == wanted))
        .collect()
}
