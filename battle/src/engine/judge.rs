//! Terminal-condition checks

use super::state::MatchState;
use crate::types::{MatchResult, Player};

impl MatchState {
    /// Decide whether the match is over and record the outcome
    ///
    /// A team is wiped when every member has fainted. Both wiped is a draw,
    /// one wiped is a win for the other player. Safe to call after every
    /// action; only the outcome is written.
    pub fn check_game_over(&mut self) -> MatchResult {
        let p1_wiped = self.team(Player::P1).is_wiped();
        let p2_wiped = self.team(Player::P2).is_wiped();

        let result = match (p1_wiped, p2_wiped) {
            (true, true) => MatchResult::Draw,
            (true, false) => MatchResult::Winner(Player::P2),
            (false, true) => MatchResult::Winner(Player::P1),
            (false, false) => MatchResult::InProgress,
        };

        if result != self.result && result.is_over() {
            tracing::info!(?result, "match decided");
        }
        self.result = result;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::tests::{sample_catalog, started_match};

    fn wipe(state: &mut MatchState, player: Player) {
        for index in 0..3 {
            state.teams[player.index()]
                .get_mut(index)
                .unwrap()
                .set_health(0);
        }
    }

    #[test]
    fn test_in_progress() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        state.teams[0].get_mut(0).unwrap().set_health(0);

        assert_eq!(state.check_game_over(), MatchResult::InProgress);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_player_one_wins() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        wipe(&mut state, Player::P2);

        assert_eq!(state.check_game_over(), MatchResult::Winner(Player::P1));
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Player::P1));
    }

    #[test]
    fn test_player_two_wins() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        wipe(&mut state, Player::P1);

        assert_eq!(state.check_game_over().winner(), Some(Player::P2));
    }

    #[test]
    fn test_draw() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        wipe(&mut state, Player::P1);
        wipe(&mut state, Player::P2);

        assert_eq!(state.check_game_over(), MatchResult::Draw);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_idempotent() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        wipe(&mut state, Player::P2);
        let before = state.teams.clone();
        let log_len = state.log().len();

        let first = state.check_game_over();
        let second = state.check_game_over();

        assert_eq!(first, second);
        assert_eq!(state.teams, before);
        assert_eq!(state.log().len(), log_len);
        assert_eq!(state.current_turn(), Player::P1);
    }

    #[test]
    fn test_empty_rosters_are_not_wiped() {
        let mut state = MatchState::new(sample_catalog());
        assert_eq!(state.check_game_over(), MatchResult::InProgress);
    }

    #[test]
    fn test_actions_rejected_once_over() {
        let mut state = started_match(["yuichin", "umin", "shujin"], ["midori", "umin", "shujin"]);
        wipe(&mut state, Player::P2);
        state.check_game_over();

        let err = state.switch_character(Player::P1, 1).unwrap_err();
        assert_eq!(err, crate::BattleError::MatchOver);
    }
}
