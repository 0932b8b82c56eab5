//! Pure damage formulas shared by PvE and PvP.

use crate::core::constants::{BASIC_ATTACK_ROLL, DEFEND_FLAT_REDUCTION};
use crate::core::dice::Dice;
use crate::races::Race;

/// Applies the defender's constitution to a raw hit. Never below 1.
pub fn calculate_damage(raw_damage: i64, defender_constitution: i64) -> i64 {
    (raw_damage - defender_constitution.div_euclid(2)).max(1)
}

/// Enemy hit against a player who chose to defend.
pub fn defended_damage(raw_damage: i64, defender_constitution: i64) -> i64 {
    (raw_damage - defender_constitution.div_euclid(2) - DEFEND_FLAT_REDUCTION).max(1)
}

/// Basic-attack multiplier for `attacker` hitting `defender`.
///
/// Keyed by base race, so evolved forms keep their matchups.
pub fn type_multiplier(attacker: Race, defender: Race) -> f64 {
    match (attacker, defender) {
        (Race::Demon, Race::Angel) | (Race::Angel, Race::Demon) => 1.5,
        (Race::Dwarf, Race::Dragon) => 1.3,
        (Race::Elf, Race::Beastman) => 1.3,
        (Race::Demigod, Race::Human) => 1.2,
        _ => 1.0,
    }
}

/// Strength plus a d10, before any multiplier.
pub fn roll_basic_attack(strength: i64, dice: &mut impl Dice) -> i64 {
    strength + dice.roll_range(BASIC_ATTACK_ROLL)
}

/// Scales a base hit by the matchup multiplier, truncating toward zero.
pub fn apply_multiplier(base_damage: i64, multiplier: f64) -> i64 {
    (base_damage as f64 * multiplier) as i64
}
