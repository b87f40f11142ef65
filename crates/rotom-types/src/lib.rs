mod display;
mod types;

pub use display::{CATEGORIES, capitalize, humanize_location};
pub use types::{AbilityRef, AbilityText, AppEvent, EntryDetail, EntrySummary};
