//! Characters: attributes, creation, progression and the potion shop.

pub mod attributes;
pub mod factory;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod progression;
pub mod shop;
pub mod types;

pub use attributes::{AttributeType, Attributes};
pub use factory::{chaos_stat, chaos_stat_from, create_character, roll_character};
pub use progression::{evolve, gain_experience, xp_for_next_level, ProgressEvents};
pub use shop::{buy_potions, drink_potion, parse_quantity, Purchase};
pub use types::{Character, CharacterId};
