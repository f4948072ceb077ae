//! The character catalog battles draw their rosters from

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::template::CharacterTemplate;

/// Immutable, validated list of character templates
///
/// Deserializing goes through [`Catalog::new`], so a decoded catalog is
/// validated like a constructed one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    characters: Vec<CharacterTemplate>,
}

/// Wire shape of a catalog document, before validation
#[derive(Deserialize)]
struct CatalogDocument {
    characters: Vec<CharacterTemplate>,
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = CatalogDocument::deserialize(deserializer)?;
        Catalog::new(document.characters).map_err(serde::de::Error::custom)
    }
}

impl Catalog {
    /// Build a catalog from templates, validating each one
    pub fn new(characters: Vec<CharacterTemplate>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            for template in &characters {
                template.validate()?;
                if !seen.insert(template.id.as_str()) {
                    return Err(CatalogError::DuplicateId(template.id.clone()));
                }
            }
        }
        Ok(Self { characters })
    }

    /// Decode a `{"characters": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.characters)
    }

    /// Look up a template by id
    pub fn get(&self, id: &str) -> Option<&CharacterTemplate> {
        self.characters.iter().find(|t| t.id == id)
    }

    /// Template at a menu position
    pub fn get_index(&self, index: usize) -> Option<&CharacterTemplate> {
        self.characters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterTemplate> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
