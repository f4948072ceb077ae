//! Roster building: adding, removing and confirming team members

use trio_team::CharacterTemplate;

use super::state::MatchState;
use crate::error::{BattleError, BattleResult};
use crate::types::{BattleCharacter, Player};

impl MatchState {
    /// Copy a template into a fresh character at the end of a player's roster
    ///
    /// The same template may be added any number of times; each copy is its
    /// own character. Returns the slot the character landed in. Rosters
    /// are locked once the battle has started.
    pub fn add_character(
        &mut self,
        player: Player,
        template: &CharacterTemplate,
    ) -> BattleResult<usize> {
        self.ensure_roster_open()?;
        template
            .validate()
            .map_err(|err| BattleError::InvalidTemplate(err.to_string()))?;

        let team = &mut self.teams[player.index()];
        if team.is_full() {
            return Err(BattleError::RosterFull {
                player,
                capacity: team.capacity(),
            });
        }

        let character = BattleCharacter::from_template(template, self.rules.default_max_resource);
        let capacity = team.capacity();
        team.push(character)
            .map_err(|_| BattleError::RosterFull { player, capacity })?;

        let slot = team.len() - 1;
        tracing::debug!(%player, id = %template.id, slot, "character added");
        Ok(slot)
    }

    /// Add the catalog template with the given id
    pub fn add_from_catalog(&mut self, player: Player, id: &str) -> BattleResult<usize> {
        let template = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| BattleError::UnknownCharacter(id.to_string()))?;
        self.add_character(player, &template)
    }

    /// Remove the member at `index`, shifting later members left
    pub fn remove_character(&mut self, player: Player, index: usize) -> BattleResult<BattleCharacter> {
        self.ensure_roster_open()?;
        let team = &mut self.teams[player.index()];
        let len = team.len();
        let removed = team
            .remove(index)
            .ok_or(BattleError::IndexOutOfRange { player, index, len })?;

        tracing::debug!(%player, id = %removed.id, index, "character removed");
        Ok(removed)
    }

    /// Check that a player's roster is exactly full. Changes nothing.
    pub fn confirm_roster(&self, player: Player) -> BattleResult<()> {
        let team = self.team(player);
        if !team.is_complete() {
            return Err(BattleError::IncompleteRoster {
                player,
                size: team.len(),
                required: team.capacity(),
            });
        }
        Ok(())
    }
}
