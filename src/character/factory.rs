//! Character creation: race roll, catalog stats, creation variance.

use super::attributes::AttributeType;
use super::types::{Character, CharacterId};
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::races::{AbilitySet, Race, RaceDefinition};
use tracing::debug;

/// Rolls a brand-new level 1 character with a fresh id.
pub fn create_character(dice: &mut impl Dice) -> Character {
    let id = CharacterId::generate(dice);
    roll_character(id, dice)
}

/// Rolls a new character under an existing id.
///
/// Draw order: race d10, then (Kaosborne only) chaos health and chaos
/// speed, then variance for STR, INT, WIS, CON, SPD and mana.
pub fn roll_character(id: CharacterId, dice: &mut impl Dice) -> Character {
    let race = Race::from_roll(dice.roll(1, 10));
    let def = race.definition();
    let (base_health, speed) = base_health_and_speed(def, dice);

    let mut attributes = def.attributes;
    attributes.set(AttributeType::Speed, speed);

    let mut character = Character {
        id,
        race,
        level: STARTING_LEVEL,
        experience: 0,
        base_health,
        current_health: base_health,
        mana: def.mana,
        attributes,
        potions: STARTING_POTIONS,
        gold: STARTING_GOLD,
        evolved: false,
        abilities: AbilitySet::single(def.ability),
    };
    apply_variance(&mut character, def, dice);

    debug!(
        id = %character.id,
        race = %race,
        health = character.base_health,
        "character created"
    );
    character
}

/// Catalog health and speed, or two chaos stats for chaotic races.
pub(crate) fn base_health_and_speed(def: &RaceDefinition, dice: &mut impl Dice) -> (i64, i64) {
    if def.chaotic {
        let health = chaos_stat(dice);
        let speed = chaos_stat(dice);
        (health, speed)
    } else {
        (def.base_health, def.attributes.get(AttributeType::Speed))
    }
}

fn apply_variance(character: &mut Character, def: &RaceDefinition, dice: &mut impl Dice) {
    for attr in AttributeType::all() {
        let bonus = dice.roll_range(def.variance.attributes[attr.index()]);
        character.attributes.add(attr, bonus);
    }
    character.mana += dice.roll_range(def.variance.mana);
}

/// Wildly unstable value used for Kaosborne health and speed.
pub fn chaos_stat(dice: &mut impl Dice) -> i64 {
    let mult = dice.roll_range(CHAOS_MULT_RANGE);
    let div = dice.roll_range(CHAOS_DIV_RANGE);
    chaos_stat_from(mult, div)
}

/// The chaos stat for a given pair of draws.
///
/// - `div == 1`: `100 * mult` (100..=10100)
/// - `div == 2 && mult == 0`: the jackpot sentinel
/// - otherwise: `100 / max(mult, 1)`
pub fn chaos_stat_from(mult: i64, div: i64) -> i64 {
    if div == 1 {
        CHAOS_SCALE * mult
    } else if div == 2 && mult == 0 {
        CHAOS_JACKPOT
    } else {
        CHAOS_SCALE / mult.max(1)
    }
}
