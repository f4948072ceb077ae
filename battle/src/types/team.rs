//! One player's roster

use super::character::BattleCharacter;

/// A player's roster plus the slot currently in combat
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Characters in roster order
    members: Vec<BattleCharacter>,

    /// Index of the active member
    active_index: usize,

    /// Required roster size
    capacity: usize,
}

impl Team {
    /// Create an empty roster of the given size
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            active_index: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// Whether the roster has exactly the required number of members
    pub fn is_complete(&self) -> bool {
        self.members.len() == self.capacity
    }

    pub fn members(&self) -> &[BattleCharacter] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&BattleCharacter> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BattleCharacter> {
        self.members.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The member currently in combat
    pub fn active(&self) -> Option<&BattleCharacter> {
        self.members.get(self.active_index)
    }

    pub fn active_mut(&mut self) -> Option<&mut BattleCharacter> {
        self.members.get_mut(self.active_index)
    }

    /// Point the active slot at `index`. Returns false if out of range.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.members.len() {
            return false;
        }
        self.active_index = index;
        true
    }

    /// Append a member. Hands it back if the roster is full.
    pub fn push(&mut self, character: BattleCharacter) -> Result<(), BattleCharacter> {
        if self.is_full() {
            return Err(character);
        }
        self.members.push(character);
        Ok(())
    }

    /// Remove the member at `index`, shifting later members left
    ///
    /// The active slot keeps following the same character where possible.
    pub fn remove(&mut self, index: usize) -> Option<BattleCharacter> {
        if index >= self.members.len() {
            return None;
        }
        let removed = self.members.remove(index);
        if index < self.active_index {
            self.active_index -= 1;
        } else if self.active_index >= self.members.len() {
            self.active_index = 0;
        }
        Some(removed)
    }

    /// Lowest-indexed living member
    pub fn first_alive(&self) -> Option<usize> {
        self.members.iter().position(|c| c.is_alive())
    }

    /// Living members other than the active one
    pub fn bench(&self) -> impl Iterator<Item = (usize, &BattleCharacter)> {
        let active = self.active_index;
        self.members
            .iter()
            .enumerate()
            .filter(move |(idx, c)| *idx != active && c.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| c.is_alive()).count()
    }

    pub fn fainted_count(&self) -> usize {
        self.members.iter().filter(|c| c.is_fainted()).count()
    }

    /// Every member has fainted. An empty roster is never wiped.
    pub fn is_wiped(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|c| c.is_fainted())
    }

    /// Put the first slot back in front, as at the start of a battle
    pub fn reset_active(&mut self) {
        self.active_index = 0;
    }

    /// Drop every member
    pub fn clear(&mut self) {
        self.members.clear();
        self.active_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trio_team::{CharacterTemplate, Element};

    fn character(name: &str, health: u32) -> BattleCharacter {
        let template = CharacterTemplate::new(name, name, Element::Normal, 100);
        let mut character = BattleCharacter::from_template(&template, 100);
        character.set_health(health);
        character
    }

    fn create_test_team() -> Team {
        let mut team = Team::new(3);
        team.push(character("a", 100)).unwrap();
        team.push(character("b", 100)).unwrap();
        team.push(character("c", 0)).unwrap();
        team
    }

    #[test]
    fn test_new_team() {
        let team = Team::new(3);
        assert!(team.is_empty());
        assert_eq!(team.capacity(), 3);
        assert!(team.active().is_none());
        assert!(!team.is_wiped());
    }

    #[test]
    fn test_push_until_full() {
        let mut team = create_test_team();
        assert!(team.is_full());
        assert!(team.is_complete());

        let rejected = team.push(character("d", 100)).unwrap_err();
        assert_eq!(rejected.name, "d");
        assert_eq!(team.len(), 3);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut team = create_test_team();
        let removed = team.remove(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(team.len(), 2);
        assert_eq!(team.get(0).unwrap().name, "b");
        assert!(team.remove(5).is_none());
    }

    #[test]
    fn test_remove_keeps_active_character() {
        let mut team = create_test_team();
        team.set_active(1);
        team.remove(0);
        assert_eq!(team.active().unwrap().name, "b");

        team.remove(0);
        assert_eq!(team.active_index(), 0);
        assert_eq!(team.active().unwrap().name, "c");
    }

    #[test]
    fn test_set_active_bounds() {
        let mut team = create_test_team();
        assert!(team.set_active(2));
        assert_eq!(team.active_index(), 2);
        assert!(!team.set_active(3));
        assert_eq!(team.active_index(), 2);
    }

    #[test]
    fn test_bench() {
        let team = create_test_team();
        let bench: Vec<_> = team.bench().collect();
        // "c" has fainted, "a" is active
        assert_eq!(bench.len(), 1);
        assert_eq!(bench[0].0, 1);
        assert_eq!(bench[0].1.name, "b");
    }

    #[test]
    fn test_alive_counts() {
        let team = create_test_team();
        assert_eq!(team.alive_count(), 2);
        assert_eq!(team.fainted_count(), 1);
        assert_eq!(team.first_alive(), Some(0));
    }

    #[test]
    fn test_is_wiped() {
        let mut team = create_test_team();
        assert!(!team.is_wiped());

        for index in 0..team.len() {
            team.get_mut(index).unwrap().set_health(0);
        }
        assert!(team.is_wiped());
        assert_eq!(team.first_alive(), None);
    }
}
