//! Active-character changes, manual and automatic

use super::state::MatchState;
use crate::error::{BattleError, BattleResult};
use crate::log;
use crate::types::Player;

impl MatchState {
    /// Send out the lowest-indexed living member of a player's team
    ///
    /// Scans in roster order and may settle on the current active slot if it
    /// is still standing. Leaves the active slot alone when everyone has
    /// fainted.
    pub fn auto_switch(&mut self, player: Player) -> BattleResult<usize> {
        let team = &mut self.teams[player.index()];
        let index = team
            .first_alive()
            .ok_or(BattleError::NoReplacementAvailable { player })?;
        team.set_active(index);

        tracing::info!(%player, index, "automatic switch");
        Ok(index)
    }

    /// Swap the active character for the member at `index`
    ///
    /// A switch is the player's action for the turn: the turn passes to the
    /// opponent afterwards. Naming the current slot is a valid switch.
    pub fn switch_character(&mut self, player: Player, index: usize) -> BattleResult<()> {
        self.ensure_in_progress()?;
        self.ensure_turn(player)?;

        let team = &mut self.teams[player.index()];
        let len = team.len();
        let target = team
            .get(index)
            .ok_or(BattleError::IndexOutOfRange { player, index, len })?;
        if target.is_fainted() {
            return Err(BattleError::TargetFainted { player, index });
        }

        team.set_active(index);
        if let Some(active) = team.active() {
            self.log.push(log::switched(player, &active.name));
            tracing::info!(%player, index, id = %active.id, "manual switch");
        }

        let next = self.end_turn();
        self.log.push(log::turn_of(next));
        Ok(())
    }
}
