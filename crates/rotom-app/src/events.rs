use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use rotom_api::Catalog;
use rotom_types::AppEvent;

use crate::state::AppState;

pub mod browse;
pub mod language;
pub mod search;

use browse::handle_browse;
use language::handle_set_language;
use search::handle_search;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    catalog: Arc<dyn Catalog>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let event = ui_to_app_rx.recv().await?;

        if matches!(event, AppEvent::Quit) {
            app_to_ui_tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        handle_events(state.clone(), catalog.clone(), &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    catalog: Arc<dyn Catalog>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(query) => {
            handle_search(state, catalog, app_to_ui_tx, query).await?;
        }
        AppEvent::Browse { category } => {
            handle_browse(state, catalog, app_to_ui_tx, category).await?;
        }
        AppEvent::SetLanguage(code) => {
            handle_set_language(state, app_to_ui_tx, code).await?;
        }
        AppEvent::Status(message) => {
            app_to_ui_tx.send(AppEvent::Status(message)).await?;
        }
        // Display events are UI-bound, nothing to do here
        AppEvent::ShowEntry { .. }
        | AppEvent::ShowAbilities { .. }
        | AppEvent::ShowOccurrences { .. }
        | AppEvent::ShowCatalog(_)
        | AppEvent::Quit => {}
    }

    Ok(())
}
