/// Category names the upstream catalog knows about, in display casing.
pub const CATEGORIES: &[&str] = &[
    "Fire", "Water", "Grass", "Ice", "Electric", "Fighting", "Poison", "Ground", "Flying",
    "Psychic", "Bug", "Rock", "Ghost", "Steel", "Dragon", "Dark", "Fairy",
];

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an upstream location slug like `viridian-forest` into
/// `Viridian forest`.
pub fn humanize_location(raw: &str) -> String {
    capitalize(&raw.replace('-', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("Pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_single_char() {
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn humanize_location_replaces_every_dash() {
        assert_eq!(humanize_location("viridian-forest"), "Viridian forest");
        assert_eq!(
            humanize_location("kanto-route-2-south-towards-viridian-city"),
            "Kanto route 2 south towards viridian city"
        );
    }

    #[test]
    fn categories_cover_known_types() {
        assert_eq!(CATEGORIES.len(), 17);
        assert!(CATEGORIES.contains(&"Electric"));
    }
}
