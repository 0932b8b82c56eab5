//! Arena - race-based character generation, progression and turn-based combat.
//!
//! Characters are rolled from ten race archetypes, level through experience,
//! evolve once at level 10, and fight generated enemies (PvE) or each other
//! (PvP). Every random step goes through an injected [`Dice`] so fights are
//! reproducible under a seeded or scripted source.
//!
//! The library holds no storage or sessions of its own: callers load a
//! character through a [`CharacterStore`], pass it into an operation, and save
//! it afterwards.

pub mod character;
pub mod combat;
pub mod core;
pub mod races;
pub mod save;
pub mod simulator;

pub use character::{
    buy_potions, create_character, drink_potion, gain_experience, parse_quantity, Character,
    CharacterId, ProgressEvents,
};
pub use combat::{
    calculate_damage, generate_enemy, type_multiplier, use_ability, CombatOutcome, Enemy,
    PveAction, PveEncounter, PvpAction, PvpSession, PvpState,
};
pub use crate::core::{ArenaError, Dice, Result, ScriptedDice};
pub use races::{Ability, AbilityFamily, Race};
pub use save::{CharacterStore, MemoryStore, RosterFile};
