use super::store::CharacterStore;
use crate::character::{Character, CharacterId};
use crate::core::constants::{ROSTER_FILE_NAME, ROSTER_FORMAT_MAGIC};
use crate::core::error::{ArenaError, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Everything written to one roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Unix seconds of the last write.
    pub saved_at: i64,
    pub characters: BTreeMap<CharacterId, Character>,
}

impl Roster {
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.saved_at, 0)
    }
}

/// Character store backed by a checksummed binary file.
///
/// File format:
/// - Format magic (8 bytes)
/// - Data length (4 bytes)
/// - Bincode-encoded `Roster` (variable length)
/// - SHA256 checksum over everything above (32 bytes)
///
/// The whole roster is held in memory and rewritten on every change.
#[derive(Debug)]
pub struct RosterFile {
    path: PathBuf,
    roster: Roster,
}

impl RosterFile {
    /// Opens the roster in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "arena").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Self::open(data_dir.join(ROSTER_FILE_NAME))
    }

    /// Opens the roster at `path`. A missing file is an empty roster.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let roster = if path.exists() {
            read_roster(&path)?
        } else {
            Roster::default()
        };
        debug!(path = %path.display(), count = roster.characters.len(), "roster opened");
        Ok(Self { path, roster })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn flush(&mut self) -> Result<()> {
        self.roster.saved_at = Utc::now().timestamp();
        write_roster(&self.path, &self.roster)
    }
}

impl CharacterStore for RosterFile {
    fn load(&self, id: CharacterId) -> Result<Character> {
        self.roster
            .characters
            .get(&id)
            .cloned()
            .ok_or(ArenaError::CharacterNotFound(id))
    }

    fn save(&mut self, character: &Character) -> Result<()> {
        self.roster
            .characters
            .insert(character.id, character.clone());
        self.flush()
    }

    fn remove(&mut self, id: CharacterId) -> Result<Character> {
        let removed = self
            .roster
            .characters
            .remove(&id)
            .ok_or(ArenaError::CharacterNotFound(id))?;
        self.flush()?;
        Ok(removed)
    }

    fn ids(&self) -> Vec<CharacterId> {
        self.roster.characters.keys().copied().collect()
    }
}

fn write_roster(path: &Path, roster: &Roster) -> Result<()> {
    let data = bincode::serialize(roster)?;
    let data_len = u32::try_from(data.len())
        .map_err(|_| ArenaError::CorruptSave("roster too large".to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(ROSTER_FORMAT_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut file = fs::File::create(path)?;
    file.write_all(&ROSTER_FORMAT_MAGIC.to_le_bytes())?;
    file.write_all(&data_len.to_le_bytes())?;
    file.write_all(&data)?;
    file.write_all(&checksum)?;
    Ok(())
}

fn read_roster(path: &Path) -> Result<Roster> {
    let mut file = fs::File::open(path)?;
    let truncated = |e: io::Error| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            ArenaError::CorruptSave("file is truncated".to_string())
        } else {
            ArenaError::Io(e)
        }
    };

    let mut magic_bytes = [0u8; 8];
    file.read_exact(&mut magic_bytes).map_err(truncated)?;
    let magic = u64::from_le_bytes(magic_bytes);
    if magic != ROSTER_FORMAT_MAGIC {
        warn!(path = %path.display(), "roster magic mismatch");
        return Err(ArenaError::CorruptSave(format!(
            "expected format 0x{ROSTER_FORMAT_MAGIC:016X}, got 0x{magic:016X}"
        )));
    }

    let mut length_bytes = [0u8; 4];
    file.read_exact(&mut length_bytes).map_err(truncated)?;
    let data_len = u32::from_le_bytes(length_bytes);

    let mut data = vec![0u8; data_len as usize];
    file.read_exact(&mut data).map_err(truncated)?;

    let mut stored_checksum = [0u8; 32];
    file.read_exact(&mut stored_checksum).map_err(truncated)?;

    let mut hasher = Sha256::new();
    hasher.update(magic_bytes);
    hasher.update(length_bytes);
    hasher.update(&data);
    if stored_checksum != hasher.finalize().as_slice() {
        warn!(path = %path.display(), "roster checksum mismatch");
        return Err(ArenaError::CorruptSave(
            "checksum verification failed".to_string(),
        ));
    }

    bincode::deserialize(&data)
        .map_err(|e| ArenaError::CorruptSave(format!("undecodable roster: {e}")))
}
