use std::sync::Arc;

use clap::{Parser, Subcommand};
use rotom_api::{ApiError, Catalog, PokeApiClient};
use rotom_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "rotom", about = "Browse a creature catalog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up one entry by name or id, with abilities and locations
    Lookup {
        identifier: String,
        /// Override the configured display language
        #[arg(long)]
        language: Option<String>,
    },
    /// Fetch the catalog and list every entry of one category
    Browse {
        category: String,
        /// Override the configured display language
        #[arg(long)]
        language: Option<String>,
    },
    /// Read searches and commands from stdin (the default)
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();

    match cli.command {
        Some(Command::Lookup {
            identifier,
            language,
        }) => {
            if let Some(language) = language {
                config.language = language;
            }
            let client = PokeApiClient::new(&config);
            run_lookup(&client, &identifier, &config.language).await
        }
        Some(Command::Browse { category, language }) => {
            if let Some(language) = language {
                config.language = language;
            }
            let client = PokeApiClient::new(&config);
            run_browse(&client, &category, &config.language).await
        }
        Some(Command::Interactive) | None => run_interactive(config).await,
    }
}

async fn run_lookup(
    client: &PokeApiClient,
    identifier: &str,
    language: &str,
) -> anyhow::Result<()> {
    match client.lookup_entry(identifier).await {
        Ok(entry) => {
            ui::render_entry(&entry);

            let (abilities, occurrences) = tokio::join!(
                client.resolve_abilities(&entry.ability_refs, language),
                client.resolve_occurrences(entry.id),
            );

            ui::render_abilities(&abilities);
            match occurrences {
                Ok(locations) => ui::render_occurrences(&locations),
                Err(e) => {
                    tracing::error!("occurrence fetch failed: {e}");
                    ui::render_occurrences(&[]);
                }
            }
        }
        Err(ApiError::NotFound { .. }) => println!("Pokémon not found!"),
        Err(e) => {
            tracing::error!("lookup failed: {e}");
            println!("Lookup failed, try again later.");
        }
    }

    Ok(())
}

async fn run_browse(
    client: &PokeApiClient,
    category: &str,
    language: &str,
) -> anyhow::Result<()> {
    match client.fetch_catalog(language).await {
        Ok(entries) => {
            ui::render_catalog(&events::browse::filter_by_category(entries, category));
        }
        Err(e) => {
            tracing::error!("catalog fetch failed: {e}");
            ui::render_catalog(&[]);
        }
    }

    Ok(())
}

async fn run_interactive(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config.clone()));
    let catalog: Arc<dyn Catalog> = Arc::new(PokeApiClient::new(&config));

    println!("{}", io::HELP_TEXT);

    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(catalog);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}
