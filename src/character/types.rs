use super::attributes::{AttributeType, Attributes};
use crate::core::dice::Dice;
use crate::races::{AbilitySet, Race};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier a caller uses to load and save a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Draws a random v4 id from the game dice so seeded runs stay reproducible.
    pub fn generate(dice: &mut impl Dice) -> Self {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_mut(4) {
            let word = dice.roll(0, u32::MAX as i64) as u32;
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player character.
///
/// `race` always names the base race; `evolved` selects the evolved label
/// and matchups follow the base race either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub race: Race,
    pub level: u32,
    pub experience: u64,
    pub base_health: i64,
    pub current_health: i64,
    pub mana: i64,
    pub attributes: Attributes,
    pub potions: u32,
    pub gold: u64,
    pub evolved: bool,
    pub abilities: AbilitySet,
}

impl Character {
    /// "Human", "Champion Human", ...
    pub fn race_label(&self) -> &'static str {
        self.race.label(self.evolved)
    }

    /// "Heroic Rally | Guardian's Shield" style label.
    pub fn ability_label(&self) -> String {
        self.abilities.to_string()
    }

    pub fn strength(&self) -> i64 {
        self.attributes.get(AttributeType::Strength)
    }

    pub fn constitution(&self) -> i64 {
        self.attributes.get(AttributeType::Constitution)
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn take_damage(&mut self, amount: i64) {
        self.current_health = (self.current_health - amount).max(0);
    }

    /// Heals without exceeding base health.
    pub fn heal(&mut self, amount: i64) {
        self.current_health = (self.current_health + amount).min(self.base_health);
    }

    pub fn full_heal(&mut self) {
        self.current_health = self.base_health;
    }
}
