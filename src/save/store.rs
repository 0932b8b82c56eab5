use crate::character::{Character, CharacterId};
use crate::core::error::{ArenaError, Result};
use std::collections::HashMap;

/// Load and save characters by id.
///
/// The engine never persists on its own; callers save after each
/// mutating operation.
pub trait CharacterStore {
    fn load(&self, id: CharacterId) -> Result<Character>;

    /// Inserts or replaces the character stored under its id.
    fn save(&mut self, character: &Character) -> Result<()>;

    fn remove(&mut self, id: CharacterId) -> Result<Character>;

    /// Every stored id, sorted.
    fn ids(&self) -> Vec<CharacterId>;

    fn contains(&self, id: CharacterId) -> bool {
        self.load(id).is_ok()
    }
}

/// In-process store for tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    characters: HashMap<CharacterId, Character>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl CharacterStore for MemoryStore {
    fn load(&self, id: CharacterId) -> Result<Character> {
        self.characters
            .get(&id)
            .cloned()
            .ok_or(ArenaError::CharacterNotFound(id))
    }

    fn save(&mut self, character: &Character) -> Result<()> {
        self.characters.insert(character.id, character.clone());
        Ok(())
    }

    fn remove(&mut self, id: CharacterId) -> Result<Character> {
        self.characters
            .remove(&id)
            .ok_or(ArenaError::CharacterNotFound(id))
    }

    fn ids(&self) -> Vec<CharacterId> {
        let mut ids: Vec<_> = self.characters.keys().copied().collect();
        ids.sort();
        ids
    }

    fn contains(&self, id: CharacterId) -> bool {
        self.characters.contains_key(&id)
    }
}
