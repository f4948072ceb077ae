//! Character templates and their moves

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CatalogError;

/// A move a character can use in combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Display name
    pub name: String,

    /// Base power before type effectiveness and variance
    #[serde(alias = "damage")]
    pub power: u32,

    /// Resource spent when the move is used
    #[serde(default)]
    pub cost: u32,
}

impl Move {
    /// Create a move with no resource cost
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
            cost: 0,
        }
    }

    /// Set the resource cost
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }
}

/// Immutable catalog entry a battle character is copied from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTemplate {
    /// Stable catalog identifier
    pub id: String,

    /// Display name used in battle log lines
    pub name: String,

    /// Elemental type
    #[serde(rename = "type", default)]
    pub element: Element,

    /// Maximum health (must be positive)
    #[serde(alias = "maxHp")]
    pub max_health: u32,

    /// Maximum resource pool, `None` means the rules default applies
    #[serde(default)]
    pub max_resource: Option<u32>,

    /// Moves in menu order
    #[serde(default, alias = "attacks")]
    pub moves: Vec<Move>,
}

impl CharacterTemplate {
    /// Create a template with no moves and the default resource pool
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        element: Element,
        max_health: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            element,
            max_health,
            max_resource: None,
            moves: Vec::new(),
        }
    }

    /// Set an explicit resource pool
    pub fn with_max_resource(mut self, max_resource: u32) -> Self {
        self.max_resource = Some(max_resource);
        self
    }

    /// Append a move
    pub fn with_move(mut self, mv: Move) -> Self {
        self.moves.push(mv);
        self
    }

    /// Resource pool, falling back to `default` when unspecified
    pub fn resource_pool(&self, default: u32) -> u32 {
        self.max_resource.unwrap_or(default)
    }

    /// Reject templates that would produce an unusable character: an empty
    /// id, zero health or an explicit zero resource pool
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidTemplate {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.is_empty() {
            return Err(invalid("empty id"));
        }
        if self.max_health == 0 {
            return Err(invalid("max health must be positive"));
        }
        if self.max_resource == Some(0) {
            return Err(invalid("max resource must be positive"));
        }
        Ok(())
    }
}
