//! Domain types for battle state

mod character;
mod outcome;
mod player;
mod team;

pub use character::BattleCharacter;
pub use outcome::MatchResult;
pub use player::Player;
pub use team::Team;
