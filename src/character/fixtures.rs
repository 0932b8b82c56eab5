//! Hand-built characters for unit tests.

use super::types::{Character, CharacterId};
use crate::core::constants::{STARTING_GOLD, STARTING_LEVEL, STARTING_POTIONS};
use crate::races::{AbilitySet, Race};
use uuid::Uuid;

/// A character with exact catalog stats and no variance.
pub fn of_race(race: Race) -> Character {
    let def = race.definition();
    Character {
        id: CharacterId(Uuid::from_u128(race.index() as u128 + 1)),
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

/// Catalog Human: 100 HP, 10 in every trained attribute.
pub fn human() -> Character {
    of_race(Race::Human)
}
