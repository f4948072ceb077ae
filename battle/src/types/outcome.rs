//! Match outcome

use super::player::Player;

/// Terminal state reported by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    #[default]
    InProgress,
    Winner(Player),
    Draw,
}

impl MatchResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchResult::InProgress)
    }

    /// Winning player, `None` while in progress or on a draw
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchResult::Winner(player) => Some(*player),
            _ => None,
        }
    }

    /// Result screen headline, `None` while the match is running
    pub fn announcement(&self) -> Option<String> {
        match self {
            MatchResult::InProgress => None,
            MatchResult::Winner(player) => Some(format!("プレイヤー{}の勝利！", player.number())),
            MatchResult::Draw => Some("引き分け！".to_string()),
        }
    }
}
