//! Gold-for-potion exchange and drinking potions.

use super::types::Character;
use crate::core::constants::{POTION_COST, POTION_HEAL_RANGE};
use crate::core::dice::Dice;
use crate::core::error::{ArenaError, Result};
use tracing::{info, warn};

/// Receipt for a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub quantity: u32,
    pub total_cost: u64,
}

impl Purchase {
    pub fn message(&self) -> String {
        format!(
            "You purchased {} potion(s) for {} gold.",
            self.quantity, self.total_cost
        )
    }
}

/// Parses a quantity typed by a player. Only positive integers pass.
pub fn parse_quantity(input: &str) -> Result<u32> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 && n <= u32::MAX as i64 => Ok(n as u32),
        _ => {
            warn!(input, "rejected potion quantity");
            Err(ArenaError::InvalidQuantity(input.to_string()))
        }
    }
}

/// Buys `quantity` potions. Nothing changes unless the whole order is paid.
pub fn buy_potions(character: &mut Character, quantity: i64) -> Result<Purchase> {
    if quantity <= 0 || quantity > u32::MAX as i64 {
        warn!(id = %character.id, quantity, "rejected potion quantity");
        return Err(ArenaError::InvalidQuantity(quantity.to_string()));
    }
    let quantity = quantity as u32;
    let Some(potions) = character.potions.checked_add(quantity) else {
        warn!(id = %character.id, quantity, "potion stock would overflow");
        return Err(ArenaError::InvalidQuantity(quantity.to_string()));
    };
    let total_cost = POTION_COST * quantity as u64;
    if character.gold < total_cost {
        return Err(ArenaError::InsufficientGold {
            needed: total_cost,
            available: character.gold,
        });
    }

    character.gold -= total_cost;
    character.potions = potions;
    info!(id = %character.id, quantity, total_cost, "potions purchased");
    Ok(Purchase {
        quantity,
        total_cost,
    })
}

/// Drinks one potion, healing 30-50 up to base health. Returns the rolled heal.
pub fn drink_potion(character: &mut Character, dice: &mut impl Dice) -> Result<i64> {
    if character.potions == 0 {
        return Err(ArenaError::NoPotions);
    }
    let heal = dice.roll_range(POTION_HEAL_RANGE);
    character.heal(heal);
    character.potions -= 1;
    Ok(heal)
}
