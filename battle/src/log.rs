//! Append-only, human-readable record of what happened in a match

use trio_team::Move;

use crate::types::{BattleCharacter, Player};

/// Ordered battle log lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn contains(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e == message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

// Message lines

pub(crate) fn battle_start() -> String {
    "バトルスタート！".to_string()
}

pub(crate) fn versus(left: &BattleCharacter, right: &BattleCharacter) -> String {
    format!("{} VS {}！", left.name, right.name)
}

pub(crate) fn turn_of(player: Player) -> String {
    format!("プレイヤー{}のターン！", player.number())
}

pub(crate) fn used_move(attacker: &str, chosen: &Move) -> String {
    format!("{}の{}！", attacker, chosen.name)
}

/// Effectiveness remark, `None` for neutral hits
pub(crate) fn effectiveness(multiplier: f32) -> Option<&'static str> {
    if multiplier == 2.0 {
        Some("効果抜群！")
    } else if multiplier == 0.5 {
        Some("効果いまひとつ...")
    } else {
        None
    }
}

pub(crate) fn took_damage(defender: &str, damage: u32) -> String {
    format!("{}に{}のダメージ！", defender, damage)
}

pub(crate) fn fainted(name: &str) -> String {
    format!("{}は倒れた！", name)
}

pub(crate) fn sent_out(name: &str) -> String {
    format!("{}が出てきた！", name)
}

pub(crate) fn switched(player: Player, name: &str) -> String {
    format!("プレイヤー{}は{}に交代！", player.number(), name)
}
