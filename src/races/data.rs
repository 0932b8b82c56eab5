//! The race catalog.
//!
//! Attribute arrays are in `[STR, INT, WIS, CON, SPD]` order.

use super::abilities::Ability;
use super::types::{EvolutionRule, Race, RaceDefinition, StatVariance};
use crate::character::attributes::Attributes;

const NO_MANA_VARIANCE: (i64, i64) = (0, 0);

pub static RACES: [RaceDefinition; 10] = [
    RaceDefinition {
        race: Race::Human,
        name: "Human",
        base_health: 100,
        mana: 100,
        attributes: Attributes::from_values([10, 10, 10, 10, 100]),
        ability: Ability::InspiringStrike,
        variance: StatVariance {
            attributes: [(0, 2), (0, 1), (0, 1), (0, 2), (0, 0)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Champion Human",
            health: 50,
            mana: 20,
            attributes: [5, 3, 3, 5, 10],
            primary: Ability::HeroicRally,
            secondary: Ability::GuardiansShield,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Dwarf,
        name: "Dwarf",
        base_health: 100,
        mana: 100,
        attributes: Attributes::from_values([12, 8, 10, 14, 50]),
        ability: Ability::StoutResolve,
        variance: StatVariance {
            attributes: [(1, 3), (-1, 1), (0, 2), (2, 4), (-5, 0)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Dwarven Lord",
            health: 60,
            mana: 10,
            // Speed stays put; dwarves remain slow.
            attributes: [5, 2, 4, 6, 0],
            primary: Ability::StalwartFortress,
            secondary: Ability::MountainsMight,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Elf,
        name: "Elf",
        base_health: 50,
        mana: 120,
        attributes: Attributes::from_values([8, 14, 12, 6, 100]),
        ability: Ability::SwiftArrow,
        variance: StatVariance {
            attributes: [(-1, 1), (1, 3), (0, 2), (-2, 0), (0, 5)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "High Elf",
            health: 40,
            mana: 30,
            attributes: [3, 6, 5, 2, 20],
            primary: Ability::ElvenGrace,
            secondary: Ability::MysticArrow,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Demon,
        name: "Demon",
        base_health: 666,
        mana: 150,
        attributes: Attributes::from_values([15, 12, 8, 12, 666]),
        ability: Ability::InfernalRage,
        variance: StatVariance {
            attributes: [(0, 5), (0, 3), (-1, 2), (0, 3), (0, 10)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Archdemon",
            health: 0,
            mana: 50,
            attributes: [10, 5, 5, 5, 20],
            primary: Ability::HellfireBlast,
            secondary: Ability::DemonicFrenzy,
            randomized: false,
            keep_catalog_health: true,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Angel,
        name: "Angel",
        base_health: 333,
        mana: 200,
        attributes: Attributes::from_values([10, 12, 16, 12, 333]),
        ability: Ability::HeavenlyGrace,
        variance: StatVariance {
            attributes: [(0, 3), (1, 4), (2, 4), (0, 2), (0, 5)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Archangel",
            health: 0,
            mana: 60,
            attributes: [8, 8, 12, 4, 15],
            primary: Ability::DivineIntervention,
            secondary: Ability::CelestialLight,
            randomized: false,
            keep_catalog_health: true,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Demigod,
        name: "Demigod",
        base_health: 500,
        mana: 120,
        attributes: Attributes::from_values([14, 10, 10, 15, 500]),
        ability: Ability::DivineCharge,
        variance: StatVariance {
            attributes: [(1, 4), (0, 3), (0, 3), (1, 4), (0, 5)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Ascended Demigod",
            health: 70,
            mana: 40,
            attributes: [7, 7, 7, 7, 15],
            primary: Ability::CelestialSmite,
            secondary: Ability::OlympianMight,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Messiah,
        name: "Messiah",
        base_health: 100,
        mana: 300,
        attributes: Attributes::from_values([10, 20, 20, 10, 100]),
        ability: Ability::MiraculousTouch,
        variance: StatVariance {
            attributes: [(-1, 2), (2, 5), (2, 5), (-1, 2), (0, 0)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Divine Messiah",
            health: 50,
            mana: 80,
            attributes: [5, 15, 15, 5, 10],
            primary: Ability::MiraculousSalvation,
            secondary: Ability::BlessedStrike,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Dragon,
        name: "Dragon",
        base_health: 500,
        mana: 100,
        attributes: Attributes::from_values([18, 12, 12, 20, 500]),
        ability: Ability::SearingFlames,
        variance: StatVariance {
            attributes: [(2, 5), (0, 3), (0, 3), (2, 5), (0, 5)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Ancient Dragon",
            health: 100,
            mana: 20,
            attributes: [12, 6, 6, 12, 20],
            primary: Ability::DragonsFury,
            secondary: Ability::AncientRoar,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Beastman,
        name: "Beastman",
        base_health: 200,
        mana: 80,
        attributes: Attributes::from_values([16, 8, 8, 13, 500]),
        ability: Ability::SavageBite,
        variance: StatVariance {
            attributes: [(1, 4), (-2, 1), (-2, 1), (1, 3), (0, 10)],
            mana: NO_MANA_VARIANCE,
        },
        evolution: EvolutionRule {
            name: "Alpha Beastman",
            health: 80,
            mana: 10,
            attributes: [10, 4, 4, 8, 30],
            primary: Ability::FeralRoar,
            secondary: Ability::SavageCharge,
            randomized: false,
            keep_catalog_health: false,
        },
        chaotic: false,
    },
    RaceDefinition {
        race: Race::Kaosborne,
        name: "Kaosborne",
        base_health: 1000,
        mana: 100,
        attributes: Attributes::from_values([10, 10, 10, 10, 100]),
        ability: Ability::WildAnarchy,
        variance: StatVariance {
            attributes: [(-9, 40), (-9, 40), (-9, 40), (-9, 40), (-99, 1000)],
            mana: (-99, 10000),
        },
        evolution: EvolutionRule {
            name: "Anarchic Kaosborne",
            health: 0,
            mana: 0,
            attributes: [0; 5],
            primary: Ability::ChaoticSurge,
            secondary: Ability::AnarchicOnslaught,
            randomized: true,
            keep_catalog_health: false,
        },
        chaotic: true,
    },
];
