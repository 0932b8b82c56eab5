//! Combat: damage formulas, abilities, enemies, PvE encounters and PvP duels.

pub mod abilities;
pub mod math;
pub mod pve;
pub mod pvp;
pub mod types;

pub use abilities::use_ability;
pub use math::{
    apply_multiplier, calculate_damage, defended_damage, roll_basic_attack, type_multiplier,
};
pub use pve::{EncounterStatus, PveAction, PveEncounter, TurnReport};
pub use pvp::{Party, PvpAction, PvpSession, PvpState};
pub use types::{generate_enemy, CombatOutcome, Combatant, Enemy};
