//! MatchState - the caller-owned state every battle operation acts on

use trio_team::Catalog;

use crate::error::{BattleError, BattleResult};
use crate::log::{self, BattleLog};
use crate::rules::Rules;
use crate::types::{BattleCharacter, MatchResult, Player, Team};

/// Both rosters, whose turn it is, the outcome so far and the battle log
///
/// There is no global instance: the caller constructs one, passes it to
/// every operation, and drops or [`reset`](MatchState::reset)s it when the
/// match is done. The catalog and rules survive a reset.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub(crate) catalog: Catalog,
    pub(crate) rules: Rules,

    /// Rosters indexed by [`Player::index`]
    pub(crate) teams: [Team; 2],

    /// Set by `start_battle`, cleared by `reset`. Rosters are frozen while set.
    pub(crate) started: bool,

    pub(crate) current_turn: Player,
    pub(crate) result: MatchResult,
    pub(crate) log: BattleLog,
}

impl MatchState {
    /// Create a match with default rules
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rules(catalog, Rules::default())
    }

    pub fn with_rules(catalog: Catalog, rules: Rules) -> Self {
        let teams = [Team::new(rules.roster_size), Team::new(rules.roster_size)];
        Self {
            catalog,
            rules,
            teams,
            started: false,
            current_turn: Player::P1,
            result: MatchResult::InProgress,
            log: BattleLog::new(),
        }
    }

    /// Begin the battle once both rosters are confirmed
    ///
    /// Puts each team's first slot in front, hands the turn to player 1 and
    /// starts a fresh log. A started battle cannot be started again until
    /// the match is [`reset`](MatchState::reset).
    pub fn start_battle(&mut self) -> BattleResult<()> {
        self.ensure_roster_open()?;
        for player in Player::BOTH {
            self.confirm_roster(player)?;
        }

        for team in &mut self.teams {
            team.reset_active();
        }
        self.started = true;
        self.current_turn = Player::P1;
        self.result = MatchResult::InProgress;
        self.log.clear();

        self.log.push(log::battle_start());
        if let (Some(left), Some(right)) = (self.teams[0].active(), self.teams[1].active()) {
            self.log.push(log::versus(left, right));
        }
        self.log.push(log::turn_of(Player::P1));

        tracing::info!(
            p1 = self.teams[0].len(),
            p2 = self.teams[1].len(),
            "battle started"
        );
        Ok(())
    }

    /// Empty both rosters and clear turn, outcome and log
    pub fn reset(&mut self) {
        for team in &mut self.teams {
            team.clear();
        }
        self.started = false;
        self.current_turn = Player::P1;
        self.result = MatchResult::InProgress;
        self.log.clear();
        tracing::debug!("match reset");
    }

    // === Read accessors ===

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// A player's full roster
    pub fn team(&self, player: Player) -> &Team {
        &self.teams[player.index()]
    }

    /// A player's character currently in combat
    pub fn active(&self, player: Player) -> Option<&BattleCharacter> {
        self.team(player).active()
    }

    /// A player's living, non-active members with their slot index
    pub fn bench(&self, player: Player) -> impl Iterator<Item = (usize, &BattleCharacter)> {
        self.team(player).bench()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// The most recent log lines, as many as the rules allow
    pub fn recent_log(&self) -> &[String] {
        self.log.recent(self.rules.recent_log_len)
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_over()
    }

    /// Winner, `None` while running or on a draw
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    // === Internal helpers ===

    /// (acting team, opposing team)
    pub(crate) fn split_teams(teams: &mut [Team; 2], player: Player) -> (&mut Team, &mut Team) {
        let [first, second] = teams;
        match player {
            Player::P1 => (first, second),
            Player::P2 => (second, first),
        }
    }

    pub(crate) fn ensure_roster_open(&self) -> BattleResult<()> {
        if self.started {
            return Err(BattleError::BattleStarted);
        }
        Ok(())
    }

    pub(crate) fn ensure_in_progress(&self) -> BattleResult<()> {
        if self.result.is_over() || self.teams.iter().any(Team::is_wiped) {
            return Err(BattleError::MatchOver);
        }
        Ok(())
    }

    pub(crate) fn ensure_turn(&self, player: Player) -> BattleResult<()> {
        if self.current_turn != player {
            return Err(BattleError::NotYourTurn { player });
        }
        Ok(())
    }

    pub(crate) fn end_turn(&mut self) -> Player {
        self.current_turn = self.current_turn.opponent();
        self.current_turn
    }
}
