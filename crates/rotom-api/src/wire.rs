//! Serde structs for the upstream response shapes, kept separate from the
//! domain types so unknown upstream fields never leak past this module.

use rotom_types::{AbilityRef, EntryDetail, EntrySummary};
use serde::Deserialize;

/// One page of the paginated listing endpoint.
#[derive(Deserialize)]
pub(crate) struct ListingPage {
    pub results: Vec<EntrySummary>,
    /// URL of the next page; absent on the last page
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
}

#[derive(Deserialize, Default)]
pub(crate) struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Deserialize, Default)]
pub(crate) struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Deserialize, Default)]
pub(crate) struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Deserialize)]
pub(crate) struct NamedRef {
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct AbilitySlot {
    pub ability: AbilityRef,
}

#[derive(Deserialize)]
pub(crate) struct AbilityDetail {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

#[derive(Deserialize)]
pub(crate) struct EffectEntry {
    pub language: NamedRef,
    pub short_effect: String,
}

#[derive(Deserialize)]
pub(crate) struct Encounter {
    pub location_area: NamedRef,
}

impl From<PokemonDetail> for EntryDetail {
    fn from(raw: PokemonDetail) -> Self {
        EntryDetail {
            id: raw.id,
            name: raw.name,
            height: raw.height,
            weight: raw.weight,
            image_url: raw.sprites.other.official_artwork.front_default,
            categories: raw.types.into_iter().map(|t| t.kind.name).collect(),
            ability_refs: raw.abilities.into_iter().map(|a| a.ability).collect(),
        }
    }
}

impl AbilityDetail {
    /// Effect text for the given language code, if the upstream record has one.
    pub fn effect_for(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.short_effect.as_str())
    }
}
