use serde::{Deserialize, Serialize};

/// One row of a paginated listing response. Only lives long enough to
/// drive the detail fetch for that entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySummary {
    pub name: String,
    pub url: String,
}

/// Reference to an ability resource, resolved lazily when a detail view
/// is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRef {
    pub name: String,
    pub url: String,
}

/// Full record for one catalog entry. Immutable once fetched; every
/// render re-fetches from the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Official artwork URL; null upstream for some entries.
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub ability_refs: Vec<AbilityRef>,
}

/// Ability name plus its effect text in the language it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityText {
    pub name: String,
    pub effect: String,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Free-text search for a single entry (name or numeric id).
    Search(String),
    /// Fetch the catalog and show entries of one category.
    Browse { category: String },
    SetLanguage(String),
    ShowEntry {
        entry: EntryDetail,
        generation: u64,
    },
    ShowAbilities {
        entry_id: u32,
        abilities: Vec<AbilityText>,
        generation: u64,
    },
    ShowOccurrences {
        entry_id: u32,
        locations: Vec<String>,
        generation: u64,
    },
    ShowCatalog(Vec<EntryDetail>),
    Status(String),
    Quit,
}
