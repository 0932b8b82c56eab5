//! Race identifiers and the shape of catalog records.

use super::abilities::Ability;
use super::data::RACES;
use crate::character::attributes::Attributes;
use crate::core::constants::NUM_ATTRIBUTES;
use crate::core::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten base races.
///
/// Declaration order is the creation roll table: a d10 result of `n`
/// picks `Race::ALL[n - 1]`, so each race has a 10% chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Demon,
    Angel,
    Demigod,
    Messiah,
    Dragon,
    Beastman,
    Kaosborne,
}

impl Race {
    pub const ALL: [Race; 10] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::Demon,
        Race::Angel,
        Race::Demigod,
        Race::Messiah,
        Race::Dragon,
        Race::Beastman,
        Race::Kaosborne,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Maps a d10 roll (1-10) to a race.
    pub fn from_roll(roll: i64) -> Race {
        assert!((1..=10).contains(&roll), "race roll {roll} outside 1..=10");
        Race::ALL[(roll - 1) as usize]
    }

    pub fn definition(&self) -> &'static RaceDefinition {
        &RACES[self.index()]
    }

    pub fn evolution(&self) -> &'static EvolutionRule {
        &self.definition().evolution
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn evolved_name(&self) -> &'static str {
        self.evolution().name
    }

    /// Display label for a base or evolved member of this race.
    pub fn label(&self, evolved: bool) -> &'static str {
        if evolved {
            self.evolved_name()
        } else {
            self.name()
        }
    }

    /// Parses a stored race label into the race and whether it is the evolved form.
    pub fn parse_label(label: &str) -> Result<(Race, bool)> {
        let label = label.trim();
        Race::ALL
            .into_iter()
            .find_map(|race| {
                if race.name() == label {
                    Some((race, false))
                } else if race.evolved_name() == label {
                    Some((race, true))
                } else {
                    None
                }
            })
            .ok_or_else(|| ArenaError::UnknownRace(label.to_string()))
    }

    /// Base race behind a base or evolved display name.
    pub fn from_name(name: &str) -> Result<Race> {
        Race::parse_label(name).map(|(race, _)| race)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive per-stat bonus ranges rolled once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatVariance {
    /// Indexed like `AttributeType::index()`.
    pub attributes: [(i64, i64); NUM_ATTRIBUTES],
    pub mana: (i64, i64),
}

/// How a race's numbers change on evolution.
///
/// Deltas are additive. `randomized` replaces every delta with an
/// independent 0-or-100 roll. `keep_catalog_health` resets base health
/// to the race's catalog value after the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionRule {
    pub name: &'static str,
    pub health: i64,
    pub mana: i64,
    pub attributes: [i64; NUM_ATTRIBUTES],
    pub primary: Ability,
    pub secondary: Ability,
    pub randomized: bool,
    pub keep_catalog_health: bool,
}

/// Static catalog entry for a base race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceDefinition {
    pub race: Race,
    pub name: &'static str,
    pub base_health: i64,
    pub mana: i64,
    pub attributes: Attributes,
    pub ability: Ability,
    pub variance: StatVariance,
    pub evolution: EvolutionRule,
    /// Health and speed come from the chaos stat instead of the catalog.
    pub chaotic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_table_order() {
        assert_eq!(Race::from_roll(1), Race::Human);
        assert_eq!(Race::from_roll(4), Race::Demon);
        assert_eq!(Race::from_roll(10), Race::Kaosborne);
    }

    #[test]
    #[should_panic]
    fn test_roll_out_of_table() {
        Race::from_roll(11);
    }

    #[test]
    fn test_definitions_line_up_with_enum() {
        for race in Race::ALL {
            assert_eq!(race.definition().race, race);
        }
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Race::parse_label("Elf").unwrap(), (Race::Elf, false));
        assert_eq!(Race::parse_label("High Elf").unwrap(), (Race::Elf, true));
        assert_eq!(
            Race::parse_label("Anarchic Kaosborne").unwrap(),
            (Race::Kaosborne, true)
        );
        assert!(matches!(
            Race::parse_label("Goblin"),
            Err(ArenaError::UnknownRace(_))
        ));
        assert_eq!(Race::from_name("Archdemon").unwrap(), Race::Demon);
        assert!(Race::from_name("").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Race::Human.label(false), "Human");
        assert_eq!(Race::Human.label(true), "Champion Human");
        assert_eq!(Race::Dwarf.to_string(), "Dwarf");
    }
}
