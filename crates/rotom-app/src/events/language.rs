use std::sync::Arc;

use kanal::AsyncSender;
use rotom_types::AppEvent;

use crate::state::AppState;

/// Change the display language for fetches issued after this point.
/// In-flight fetches keep the language they captured when issued.
pub async fn handle_set_language(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    code: String,
) -> anyhow::Result<()> {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        app_to_ui_tx
            .send(AppEvent::Status("Usage: /lang <code>".to_string()))
            .await?;
        return Ok(());
    }

    state.config.write().await.language = code.clone();
    tracing::info!(language = %code, "display language changed");

    app_to_ui_tx
        .send(AppEvent::Status(format!("Display language set to {code}")))
        .await?;
    Ok(())
}
