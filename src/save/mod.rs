//! Character persistence: the store boundary and its two backends.

pub mod roster;
pub mod store;

pub use roster::{Roster, RosterFile};
pub use store::{CharacterStore, MemoryStore};
