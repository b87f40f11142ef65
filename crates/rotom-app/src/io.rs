use kanal::AsyncSender;
use rotom_types::{AppEvent, CATEGORIES};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

pub const HELP_TEXT: &str = "Type a name or id to search. Commands: /type <category>, /types, /lang <code>, /help, /quit";

/// Reads lines from stdin and forwards them as events until stdin closes,
/// /quit is entered, or the app shuts down.
pub async fn stdin_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    event_tx.send(AppEvent::Quit).await?;
                    return Ok(());
                };

                match parse_command(&line) {
                    Some(AppEvent::Quit) => {
                        event_tx.send(AppEvent::Quit).await?;
                        return Ok(());
                    }
                    Some(event) => event_tx.send(event).await?,
                    None => {}
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("stdin reader stopping");
                return Ok(());
            }
        }
    }
}

/// `/`-prefixed lines are commands; anything else is a search query.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(category) = line.strip_prefix("/type ") {
        return Some(AppEvent::Browse {
            category: category.trim().to_string(),
        });
    }
    if let Some(code) = line.strip_prefix("/lang ") {
        return Some(AppEvent::SetLanguage(code.trim().to_string()));
    }

    match line {
        "/quit" | "/q" => Some(AppEvent::Quit),
        "/help" => Some(AppEvent::Status(HELP_TEXT.to_string())),
        "/types" => Some(AppEvent::Status(format!(
            "Categories: {}",
            CATEGORIES.join(", ")
        ))),
        _ if line.starts_with('/') => Some(AppEvent::Status(format!("Unknown command: {line}"))),
        _ => Some(AppEvent::Search(line.to_string())),
    }
}
