//! The battle engine: one caller-owned [`MatchState`] and the operations on it
//!
//! The impl blocks are split by concern:
//! - `roster` - adding, removing and confirming team members
//! - `combat` - attacks, damage and fainting
//! - `switching` - manual and automatic active-character changes
//! - `judge` - terminal-condition checks

mod combat;
mod effectiveness;
mod judge;
mod roster;
mod state;
mod switching;

pub use combat::{calculate_random_damage, AttackOutcome};
pub use effectiveness::{type_multiplier, TYPE_CHART};
pub use state::MatchState;
