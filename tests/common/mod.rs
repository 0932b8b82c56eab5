//! Shared builders for integration tests.

#![allow(dead_code)]

use arena::character::{Character, CharacterId};
use arena::core::constants::{STARTING_GOLD, STARTING_LEVEL, STARTING_POTIONS};
use arena::races::{AbilitySet, Race};
use uuid::Uuid;

/// Level 1 character with exact catalog stats and a predictable id.
pub fn catalog_character(race: Race, id: u128) -> Character {
    let def = race.definition();
    Character {
        id: CharacterId(Uuid::from_u128(id)),
        race,
        level: STARTING_LEVEL,
        experience: 0,
        base_health: def.base_health,
        current_health: def.base_health,
        mana: def.mana,
        attributes: def.attributes,
        potions: STARTING_POTIONS,
        gold: STARTING_GOLD,
        evolved: false,
        abilities: AbilitySet::single(def.ability),
    }
}

/// Experience needed to go from level 1 to `level`.
pub fn experience_to_reach(level: u32) -> u64 {
    (1..level).map(|l| l as u64 * 100).sum()
}
