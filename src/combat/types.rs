use crate::character::factory::base_health_and_speed;
use crate::character::{AttributeType, Attributes, Character};
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::races::{Ability, Race};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Narration plus the numbers behind one combat resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub narration: String,
    pub damage: i64,
    pub heal: i64,
}

impl CombatOutcome {
    pub fn new(narration: impl Into<String>, damage: i64, heal: i64) -> Self {
        Self {
            narration: narration.into(),
            damage,
            heal,
        }
    }

    /// Narration-only outcome (defend, potion shortage, rewards).
    pub fn note(narration: impl Into<String>) -> Self {
        Self::new(narration, 0, 0)
    }
}

/// Anything that can stand on either side of a fight.
pub trait Combatant {
    /// Base race; drives type matchups.
    fn race(&self) -> Race;

    /// Display label, e.g. "Archdemon".
    fn label(&self) -> &'static str;

    fn primary_ability(&self) -> Ability;

    fn strength(&self) -> i64;

    fn constitution(&self) -> i64;

    fn mana(&self) -> i64;

    /// Deducts mana if there is enough. Returns whether it was spent.
    fn spend_mana(&mut self, amount: i64) -> bool;

    fn current_health(&self) -> i64;

    fn take_damage(&mut self, amount: i64);

    /// Heals up to base health.
    fn heal(&mut self, amount: i64);

    fn is_alive(&self) -> bool {
        self.current_health() > 0
    }
}

impl Combatant for Character {
    fn race(&self) -> Race {
        self.race
    }

    fn label(&self) -> &'static str {
        self.race_label()
    }

    fn primary_ability(&self) -> Ability {
        self.abilities.primary
    }

    fn strength(&self) -> i64 {
        Character::strength(self)
    }

    fn constitution(&self) -> i64 {
        Character::constitution(self)
    }

    fn mana(&self) -> i64 {
        self.mana
    }

    fn spend_mana(&mut self, amount: i64) -> bool {
        if self.mana < amount {
            return false;
        }
        self.mana -= amount;
        true
    }

    fn current_health(&self) -> i64 {
        self.current_health
    }

    fn take_damage(&mut self, amount: i64) {
        Character::take_damage(self, amount)
    }

    fn heal(&mut self, amount: i64) {
        Character::heal(self, amount)
    }
}

/// A scripted opponent for one PvE encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub race: Race,
    pub level: u32,
    pub base_health: i64,
    pub current_health: i64,
    pub mana: i64,
    pub attributes: Attributes,
    pub ability: Ability,
    pub attack_min: i64,
    pub attack_max: i64,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn take_damage(&mut self, amount: i64) {
        self.current_health = (self.current_health - amount).max(0);
    }

    /// Raw attack before the defender's constitution is applied.
    pub fn roll_attack(&self, dice: &mut impl Dice) -> i64 {
        dice.roll(self.attack_min, self.attack_max)
    }
}

impl Combatant for Enemy {
    fn race(&self) -> Race {
        self.race
    }

    fn label(&self) -> &'static str {
        self.race.name()
    }

    fn primary_ability(&self) -> Ability {
        self.ability
    }

    fn strength(&self) -> i64 {
        self.attributes.strength()
    }

    fn constitution(&self) -> i64 {
        self.attributes.constitution()
    }

    fn mana(&self) -> i64 {
        self.mana
    }

    fn spend_mana(&mut self, amount: i64) -> bool {
        if self.mana < amount {
            return false;
        }
        self.mana -= amount;
        true
    }

    fn current_health(&self) -> i64 {
        self.current_health
    }

    fn take_damage(&mut self, amount: i64) {
        Enemy::take_damage(self, amount)
    }

    fn heal(&mut self, amount: i64) {
        self.current_health = (self.current_health + amount).min(self.base_health);
    }
}

/// Generates an enemy within one level of the player.
///
/// Draw order: race, (Kaosborne only) chaos health and speed, then level.
/// Health and the four trained attributes grow per level above 1; speed
/// and mana do not. No creation variance is applied.
pub fn generate_enemy(player_level: u32, dice: &mut impl Dice) -> Enemy {
    let race = Race::ALL[dice.pick(Race::ALL.len())];
    let def = race.definition();
    let (base_health, speed) = base_health_and_speed(def, dice);

    let lo = player_level.saturating_sub(1).max(1) as i64;
    let hi = player_level as i64 + 1;
    let level = dice.roll(lo, hi) as u32;
    let steps = level as i64 - 1;

    let mut attributes = def.attributes;
    attributes.set(AttributeType::Speed, speed);
    for attr in AttributeType::trained() {
        attributes.add(attr, steps * ENEMY_ATTRIBUTE_PER_LEVEL);
    }
    let health = base_health + steps * ENEMY_HEALTH_PER_LEVEL;
    let strength = attributes.strength();

    let enemy = Enemy {
        race,
        level,
        base_health: health,
        current_health: health,
        mana: def.mana,
        attributes,
        ability: def.ability,
        attack_min: strength,
        attack_max: strength + ENEMY_ATTACK_SPREAD,
    };
    debug!(race = %race, level, health, "enemy generated");
    enemy
}
