use kanal::AsyncReceiver;
use rotom_types::{AbilityText, AppEvent, EntryDetail, capitalize};

/// Prints display events to stdout until Quit arrives.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;

        match event {
            AppEvent::ShowEntry { entry, .. } => render_entry(&entry),
            AppEvent::ShowAbilities { abilities, .. } => render_abilities(&abilities),
            AppEvent::ShowOccurrences { locations, .. } => render_occurrences(&locations),
            AppEvent::ShowCatalog(entries) => render_catalog(&entries),
            AppEvent::Status(message) => println!("{message}"),
            AppEvent::Quit => return Ok(()),
            // App-bound events never reach this channel
            AppEvent::Search(_)
            | AppEvent::Browse { .. }
            | AppEvent::SetLanguage(_) => {}
        }
    }
}

pub fn render_entry(entry: &EntryDetail) {
    println!("#{} {}", entry.id, capitalize(&entry.name));
    println!("  Height: {}  Weight: {}", entry.height, entry.weight);

    let categories = entry
        .categories
        .iter()
        .map(|c| capitalize(c))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Categories: {categories}");

    if let Some(url) = &entry.image_url {
        println!("  Image: {url}");
    }

    if !entry.ability_refs.is_empty() {
        let names = entry
            .ability_refs
            .iter()
            .map(|a| capitalize(&a.name))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Abilities: {names}");
    }
}

pub fn render_abilities(abilities: &[AbilityText]) {
    if abilities.is_empty() {
        return;
    }

    println!("  Abilities:");
    for ability in abilities {
        println!("    {}: {}", capitalize(&ability.name), capitalize(&ability.effect));
    }
}

pub fn render_occurrences(locations: &[String]) {
    if locations.is_empty() {
        println!("  No known occurrences.");
        return;
    }

    println!("  Locations: {}", locations.join(", "));
}

pub fn render_catalog(entries: &[EntryDetail]) {
    if entries.is_empty() {
        println!("No Pokémon found!");
        return;
    }

    for entry in entries {
        render_entry(entry);
        println!();
    }
    println!("{} entries.", entries.len());
}
