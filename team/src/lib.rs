//! Character catalog and template formats for trio battles.
//!
//! The catalog is leaf data: an immutable list of [`CharacterTemplate`]s
//! loaded once and handed to the battle engine, which copies templates into
//! battle-ready characters.
//!
//! ```text
//! trio-team (catalog + templates) ← THIS CRATE
//!        │
//!        ▼
//! trio-battle (rosters, combat, judging)
//! ```

mod catalog;
mod element;
mod error;
mod template;

pub use catalog::Catalog;
pub use element::Element;
pub use error::CatalogError;
pub use template::{CharacterTemplate, Move};
