//! Elemental classification of characters

use serde::{Deserialize, Serialize};

/// Elemental type of a character
///
/// `Normal` is the unclassified bucket: every catalog type string that is not
/// one of the four named elements lands here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[repr(u8)]
pub enum Element {
    Fire = 0,
    Water = 1,
    Electric = 2,
    Grass = 3,
    #[default]
    Normal = 4,
}

impl Element {
    /// Every element, in chart order
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Normal,
    ];

    /// Get all elements as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Row/column of this element in an effectiveness chart
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a catalog type string (case-insensitive, English or kana names)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fire" | "ほのお" => Element::Fire,
            "water" | "みず" => Element::Water,
            "electric" | "でんき" => Element::Electric,
            "grass" | "くさ" => Element::Grass,
            _ => Element::Normal,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Electric => "electric",
            Element::Grass => "grass",
            Element::Normal => "normal",
        }
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::parse(&s)
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.as_str().to_string()
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_elements() {
        assert_eq!(Element::parse("fire"), Element::Fire);
        assert_eq!(Element::parse("Water"), Element::Water);
        assert_eq!(Element::parse("ELECTRIC"), Element::Electric);
        assert_eq!(Element::parse(" grass "), Element::Grass);
        assert_eq!(Element::parse("でんき"), Element::Electric);
    }

    #[test]
    fn test_parse_unknown_is_unclassified() {
        assert_eq!(Element::parse("dragon"), Element::Normal);
        assert_eq!(Element::parse(""), Element::Normal);
    }

    #[test]
    fn test_index_follows_all_order() {
        for (i, element) in Element::all().iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Element::Grass).unwrap();
        assert_eq!(json, "\"grass\"");

        let parsed: Element = serde_json::from_str("\"Fire\"").unwrap();
        assert_eq!(parsed, Element::Fire);

        let unknown: Element = serde_json::from_str("\"psychic\"").unwrap();
        assert_eq!(unknown, Element::Normal);
    }
}
