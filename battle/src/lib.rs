//! Two-player, three-on-three turn-based battle engine.
//!
//! Each player assembles a roster from a shared catalog, then players take
//! turns either attacking the opponent's active character or switching their
//! own, until one side's roster has entirely fainted.
//!
//! # Overview
//!
//! ```text
//! trio-team (catalog + templates)
//!        │
//!        ▼
//! trio-battle (rosters, combat, switching, judging) ← THIS CRATE
//!        │
//!        └─> presentation layer (renders state and the battle log)
//! ```
//!
//! # Main Types
//!
//! - [`MatchState`] - caller-owned state every operation acts on
//! - [`Team`] / [`BattleCharacter`] - rosters and the characters in them
//! - [`Rules`] - roster size, resource recovery, damage variance
//! - [`BattleLog`] - human-readable record of what happened
//! - [`RandomSource`] - injected randomness for damage variance
//! - [`BattleError`] - stable failure classification
//!
//! # Example Usage
//!
//! ```ignore
//! use trio_battle::{MatchState, Player, StdRandom};
//! use trio_team::Catalog;
//!
//! let mut state = MatchState::new(Catalog::from_json(json)?);
//! for id in ["yuichin", "umin", "shujin"] {
//!     state.add_from_catalog(Player::P1, id)?;
//!     state.add_from_catalog(Player::P2, id)?;
//! }
//! state.start_battle()?;
//!
//! let mut rng = StdRandom::from_entropy();
//! let outcome = state.attack_with(Player::P1, 0, &mut rng)?;
//! println!("{} damage", outcome.damage);
//!
//! if state.check_game_over().is_over() {
//!     println!("{:?}", state.winner());
//! }
//! ```

pub mod engine;
pub mod error;
pub mod log;
pub mod rng;
pub mod rules;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{calculate_random_damage, type_multiplier, AttackOutcome, MatchState, TYPE_CHART};
pub use error::{BattleError, BattleResult, ErrorKind};
pub use log::BattleLog;
pub use rng::{FixedRoll, RandomSource, StdRandom};
pub use rules::Rules;
pub use types::{BattleCharacter, MatchResult, Player, Team};

// Re-export catalog types battles are built from
pub use trio_team::{Catalog, CharacterTemplate, Element, Move};
