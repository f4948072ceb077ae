//! Battle-ready character state

use trio_team::{CharacterTemplate, Element, Move};

/// A character instance owned by exactly one team slot
///
/// Created by copying a [`CharacterTemplate`]; the move list is an
/// independent copy, so nothing done to one instance reaches another built
/// from the same template.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCharacter {
    /// Catalog id of the template this was copied from
    pub id: String,

    /// Display name
    pub name: String,

    pub element: Element,

    // === Health ===
    pub max_health: u32,
    current_health: u32,

    // === Resource ===
    pub max_resource: u32,
    current_resource: u32,

    /// Moves in menu order
    pub moves: Vec<Move>,
}

impl BattleCharacter {
    /// Copy a template into a fresh character at full health and resource
    pub fn from_template(template: &CharacterTemplate, default_max_resource: u32) -> Self {
        let max_resource = template.resource_pool(default_max_resource);
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            element: template.element,
            max_health: template.max_health,
            current_health: template.max_health,
            max_resource,
            current_resource: max_resource,
            moves: template.moves.clone(),
        }
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn current_resource(&self) -> u32 {
        self.current_resource
    }

    /// Set current health, clamped to `0..=max_health`
    pub fn set_health(&mut self, health: u32) {
        self.current_health = health.min(self.max_health);
    }

    /// Set current resource, clamped to `0..=max_resource`
    pub fn set_resource(&mut self, resource: u32) {
        self.current_resource = resource.min(self.max_resource);
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    /// Apply damage, flooring health at zero. Returns true if this hit fainted it.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.current_health = self.current_health.saturating_sub(amount);
        was_alive && self.is_fainted()
    }

    /// Whether `amount` resource can be paid
    pub fn can_afford(&self, amount: u32) -> bool {
        self.current_resource >= amount
    }

    /// Spend resource. Returns false and leaves the pool untouched if short.
    pub fn consume_resource(&mut self, amount: u32) -> bool {
        if !self.can_afford(amount) {
            return false;
        }
        self.current_resource -= amount;
        true
    }

    /// Restore resource up to the pool maximum. Returns the amount restored.
    pub fn recover_resource(&mut self, amount: u32) -> u32 {
        let before = self.current_resource;
        self.current_resource = self
            .current_resource
            .saturating_add(amount)
            .min(self.max_resource);
        self.current_resource - before
    }

    /// Health as a percentage of maximum, rounded to two decimals
    pub fn health_percent(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        let percent = self.current_health as f64 / self.max_health as f64 * 100.0;
        (percent * 100.0).round() / 100.0
    }

    /// Moves the current resource pool can pay for
    pub fn affordable_moves(&self) -> impl Iterator<Item = (usize, &Move)> {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, m)| self.can_afford(m.cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> CharacterTemplate {
        CharacterTemplate::new("yuichin", "ゆういちん", Element::Fire, 120)
            .with_move(Move::new("火炎放射", 30).with_cost(15))
            .with_move(Move::new("火柱", 45).with_cost(30))
    }

    #[test]
    fn test_from_template_full_pools() {
        let character = BattleCharacter::from_template(&template(), 100);
        assert_eq!(character.current_health(), 120);
        assert_eq!(character.max_resource, 100);
        assert_eq!(character.current_resource(), 100);
        assert_eq!(character.moves.len(), 2);
    }

    #[test]
    fn test_from_template_explicit_resource() {
        let character = BattleCharacter::from_template(&template().with_max_resource(40), 100);
        assert_eq!(character.max_resource, 40);
        assert_eq!(character.current_resource(), 40);
    }

    #[test]
    fn test_copies_are_independent() {
        let source = template();
        let mut a = BattleCharacter::from_template(&source, 100);
        let b = BattleCharacter::from_template(&source, 100);

        a.moves[0].power = 999;
        a.moves.push(Move::new("extra", 1));
        a.take_damage(50);

        assert_eq!(b.moves[0].power, 30);
        assert_eq!(b.moves.len(), 2);
        assert_eq!(b.current_health(), 120);
        assert_eq!(source.moves[0].power, 30);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut character = BattleCharacter::from_template(&template(), 100);

        assert!(!character.take_damage(100));
        assert_eq!(character.current_health(), 20);

        assert!(character.take_damage(25));
        assert_eq!(character.current_health(), 0);
        assert!(character.is_fainted());

        // Already fainted, not a new faint
        assert!(!character.take_damage(10));
        assert_eq!(character.current_health(), 0);
    }

    #[test]
    fn test_resource_stays_in_bounds() {
        let mut character = BattleCharacter::from_template(&template(), 100);

        assert!(character.consume_resource(90));
        assert_eq!(character.current_resource(), 10);

        assert!(!character.consume_resource(15));
        assert_eq!(character.current_resource(), 10);

        assert_eq!(character.recover_resource(20), 20);
        assert_eq!(character.current_resource(), 30);

        assert_eq!(character.recover_resource(500), 70);
        assert_eq!(character.current_resource(), 100);

        assert_eq!(character.recover_resource(u32::MAX), 0);
        assert_eq!(character.current_resource(), 100);
    }

    #[test]
    fn test_setters_clamp() {
        let mut character = BattleCharacter::from_template(&template(), 100);
        character.set_health(500);
        assert_eq!(character.current_health(), 120);
        character.set_resource(101);
        assert_eq!(character.current_resource(), 100);
    }

    #[test]
    fn test_health_percent() {
        let mut character = BattleCharacter::from_template(&template(), 100);
        assert_eq!(character.health_percent(), 100.0);

        character.set_health(40);
        assert_eq!(character.health_percent(), 33.33);

        character.set_health(0);
        assert_eq!(character.health_percent(), 0.0);
    }

    #[test]
    fn test_affordable_moves() {
        let mut character = BattleCharacter::from_template(&template(), 100);
        character.set_resource(20);

        let affordable: Vec<_> = character.affordable_moves().map(|(i, _)| i).collect();
        assert_eq!(affordable, vec![0]);
    }
}
