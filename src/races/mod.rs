//! Race catalog: base stats, creation variance, evolution rules and abilities.

pub mod abilities;
pub mod data;
pub mod types;

pub use abilities::{Ability, AbilityFamily, AbilitySet};
pub use data::RACES;
pub use types::{EvolutionRule, Race, RaceDefinition, StatVariance};
