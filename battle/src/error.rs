//! Error types for battle operations
//!
//! Every public operation on [`MatchState`](crate::MatchState) returns a
//! [`BattleResult`]. No failure path mutates the state it was called on.

use thiserror::Error;

use crate::types::Player;

/// Stable classification of a [`BattleError`], independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    InvalidPlayer,
    RosterFull,
    IncompleteRoster,
    IndexOutOfRange,
    NotYourTurn,
    InsufficientResource,
    TargetFainted,
    NoReplacementAvailable,
    UnknownCharacter,
    InvalidTemplate,
    BattleStarted,
    MatchOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Invalid player number: {0}")]
    InvalidPlayer(u8),

    #[error("Roster for {player} is full ({capacity} members)")]
    RosterFull { player: Player, capacity: usize },

    #[error("Roster for {player} has {size} of {required} members")]
    IncompleteRoster {
        player: Player,
        size: usize,
        required: usize,
    },

    #[error("Slot {index} is out of range for {player} (roster size {len})")]
    IndexOutOfRange {
        player: Player,
        index: usize,
        len: usize,
    },

    #[error("It is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("Not enough resource: have {have}, need {need}")]
    InsufficientResource { have: u32, need: u32 },

    #[error("Slot {index} of {player} has fainted")]
    TargetFainted { player: Player, index: usize },

    #[error("{player} has no character left to send out")]
    NoReplacementAvailable { player: Player },

    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("Rejected template: {0}")]
    InvalidTemplate(String),

    #[error("The battle has already started, rosters are locked")]
    BattleStarted,

    #[error("The match is already over")]
    MatchOver,
}

impl BattleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BattleError::InvalidPlayer(_) => ErrorKind::InvalidPlayer,
            BattleError::RosterFull { .. } => ErrorKind::RosterFull,
            BattleError::IncompleteRoster { .. } => ErrorKind::IncompleteRoster,
            BattleError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            BattleError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            BattleError::InsufficientResource { .. } => ErrorKind::InsufficientResource,
            BattleError::TargetFainted { .. } => ErrorKind::TargetFainted,
            BattleError::NoReplacementAvailable { .. } => ErrorKind::NoReplacementAvailable,
            BattleError::UnknownCharacter(_) => ErrorKind::UnknownCharacter,
            BattleError::InvalidTemplate(_) => ErrorKind::InvalidTemplate,
            BattleError::BattleStarted => ErrorKind::BattleStarted,
            BattleError::MatchOver => ErrorKind::MatchOver,
        }
    }
}

/// Result type alias for battle operations
pub type BattleResult<T> = Result<T, BattleError>;
