//! Shared constants, error type and the randomness seam.

pub mod constants;
pub mod dice;
pub mod error;

pub use constants::*;
pub use dice::{Dice, Scripted, ScriptedDice};
pub use error::{ArenaError, Result};
