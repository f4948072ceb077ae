//! Combat resolution: resource cost, type effectiveness, damage variance,
//! fainting and the automatic replacement that follows

use trio_team::Move;

use super::effectiveness::type_multiplier;
use super::state::MatchState;
use crate::error::{BattleError, BattleResult};
use crate::log;
use crate::rng::RandomSource;
use crate::rules::Rules;
use crate::types::Player;

/// What a successful attack did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Health removed from the defender
    pub damage: u32,

    /// Whether the defender fainted
    pub defeated: bool,

    /// Type effectiveness multiplier that was applied
    pub multiplier: f32,

    /// Slot the defending team automatically sent out after a faint
    pub replacement: Option<usize>,
}

/// Apply variance to a base damage value
///
/// Zero base damage stays exactly zero and draws nothing from `rng`.
/// Anything else is scaled by one uniform draw from the rules' variance
/// range, rounded, and floored at 1.
pub fn calculate_random_damage<R>(base: f64, rules: &Rules, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    if base <= 0.0 {
        return 0;
    }
    let factor = rng.uniform(rules.variance_min, rules.variance_max);
    let damage = (base * factor).round();
    (damage as u32).max(1)
}

impl MatchState {
    /// Attack the opponent's active character with `chosen`
    ///
    /// On success the resource cost is paid, damage is applied, a fainted
    /// defender is replaced by the first living member of its team, the
    /// defending side's active character recovers resource, and the turn
    /// passes to the opponent. On failure nothing changes.
    pub fn attack<R>(
        &mut self,
        player: Player,
        chosen: &Move,
        rng: &mut R,
    ) -> BattleResult<AttackOutcome>
    where
        R: RandomSource + ?Sized,
    {
        self.ensure_in_progress()?;
        self.ensure_turn(player)?;
        let defending = player.opponent();
        self.confirm_roster(player)?;
        self.confirm_roster(defending)?;

        let (own, foe) = Self::split_teams(&mut self.teams, player);
        let (Some(attacker), Some(defender)) = (own.active_mut(), foe.active_mut()) else {
            return Err(BattleError::NoReplacementAvailable { player });
        };

        if !attacker.consume_resource(chosen.cost) {
            return Err(BattleError::InsufficientResource {
                have: attacker.current_resource(),
                need: chosen.cost,
            });
        }

        let multiplier = type_multiplier(attacker.element, defender.element);
        let base = f64::from(chosen.power) * f64::from(multiplier);
        let damage = calculate_random_damage(base, &self.rules, rng);
        defender.take_damage(damage);
        let defeated = defender.is_fainted();

        tracing::debug!(
            %player,
            attacker = %attacker.id,
            defender = %defender.id,
            power = chosen.power,
            multiplier,
            damage,
            health = defender.current_health(),
            "attack resolved"
        );

        self.log.push(log::used_move(&attacker.name, chosen));
        if let Some(remark) = log::effectiveness(multiplier) {
            self.log.push(remark);
        }
        self.log.push(log::took_damage(&defender.name, damage));

        let mut replacement = None;
        if defeated {
            self.log.push(log::fainted(&defender.name));
            tracing::info!(player = %defending, id = %defender.id, "character fainted");

            match self.auto_switch(defending) {
                Ok(index) => {
                    if let Some(next) = self.teams[defending.index()].get(index) {
                        self.log.push(log::sent_out(&next.name));
                    }
                    replacement = Some(index);
                }
                Err(err) => tracing::info!(%err, "defending team wiped out"),
            }
        }

        // Whoever now stands in front for the defending side recovers
        let recovery = self.rules.resource_recovery;
        if let Some(active) = self.teams[defending.index()].active_mut() {
            active.recover_resource(recovery);
        }

        let next = self.end_turn();
        if !defeated {
            self.log.push(log::turn_of(next));
        }

        Ok(AttackOutcome {
            damage,
            defeated,
            multiplier,
            replacement,
        })
    }

    /// Attack with the move at `move_index` in the active character's list
    pub fn attack_with<R>(
        &mut self,
        player: Player,
        move_index: usize,
        rng: &mut R,
    ) -> BattleResult<AttackOutcome>
    where
        R: RandomSource + ?Sized,
    {
        self.ensure_in_progress()?;
        self.ensure_turn(player)?;

        let moves = self.active(player).map_or(&[][..], |c| c.moves.as_slice());
        let chosen = moves
            .get(move_index)
            .cloned()
            .ok_or(BattleError::IndexOutOfRange {
                player,
                index: move_index,
                len: moves.len(),
            })?;
        self.attack(player, &chosen, rng)
    }
}
