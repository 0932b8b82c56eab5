use crate::character::CharacterId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Unknown race: {0}")]
    UnknownRace(String),

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u64, available: u64 },

    #[error("No potions left")]
    NoPotions,

    #[error("Encounter has already concluded")]
    EncounterConcluded,

    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Corrupt save: {0}")]
    CorruptSave(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
