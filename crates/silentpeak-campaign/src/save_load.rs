//! JSON save slots, one file per slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::profile::PlayerProfile;

/// Full save data written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub profile: PlayerProfile,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub slot_name: String,
}

impl SaveData {
    /// Snapshot of `profile` stamped with the current time.
    pub fn new(profile: PlayerProfile, slot: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            profile,
            timestamp,
            slot_name: slot.to_string(),
        }
    }
}

/// Lightweight metadata for listing saves without keeping full state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot_name: String,
    pub player_name: String,
    pub timestamp: u64,
    pub coins: u32,
    pub total_stars: u32,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode save data: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse save file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no save in slot '{0}'")]
    NotFound(String),
}

fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{}.json", slot))
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SaveError + '_ {
    move |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn save_to_file(dir: &Path, slot: &str, data: &SaveData) -> Result<(), SaveError> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = save_path(dir, slot);
    let json = serde_json::to_string_pretty(data).map_err(SaveError::Serialize)?;
    fs::write(&path, json).map_err(io_error(&path))?;
    Ok(())
}

pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveData, SaveError> {
    let path = save_path(dir, slot);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SaveError::NotFound(slot.to_string()))
        }
        Err(e) => return Err(io_error(&path)(e)),
    };
    serde_json::from_str(&json).map_err(|source| SaveError::Parse { path, source })
}

/// Every readable save in `dir`, newest first. Unreadable files are skipped.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut saves = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let parsed = fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str::<SaveData>(&json).ok());
        match parsed {
            Some(data) => saves.push(SaveMetadata {
                total_stars: data.profile.total_stars(),
                coins: data.profile.coins,
                player_name: data.profile.name,
                slot_name: data.slot_name,
                timestamp: data.timestamp,
            }),
            None => warn!(path = %path.display(), "skipping unreadable save"),
        }
    }
    saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    saves
}

/// Remove a slot. A missing slot is not an error.
pub fn delete_save(dir: &Path, slot: &str) -> Result<(), SaveError> {
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path).map_err(io_error(&path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_save_data(slot: &str, coins: u32) -> SaveData {
        let mut profile = PlayerProfile::new("Ghost");
        profile.coins = coins;
        SaveData::new(profile, slot)
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempdir().unwrap();
        let data = make_save_data("slot1", 4200);
        save_to_file(dir.path(), "slot1", &data).unwrap();

        let loaded = load_from_file(dir.path(), "slot1").unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("profiles").join("local");
        save_to_file(&nested, "main", &make_save_data("main", 1)).unwrap();
        assert!(save_path(&nested, "main").exists());
    }

    #[test]
    fn load_missing_slot() {
        let dir = tempdir().unwrap();
        let err = load_from_file(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, SaveError::NotFound(slot) if slot == "nope"));
    }

    #[test]
    fn load_corrupt_slot() {
        let dir = tempdir().unwrap();
        fs::write(save_path(dir.path(), "bad"), "{ not json").unwrap();
        let err = load_from_file(dir.path(), "bad").unwrap_err();
        assert!(matches!(err, SaveError::Parse { .. }));
    }

    #[test]
    fn list_saves_empty() {
        let dir = tempdir().unwrap();
        assert!(list_saves(&dir.path().join("missing")).is_empty());
        assert!(list_saves(dir.path()).is_empty());
    }

    #[test]
    fn list_saves_multiple() {
        let dir = tempdir().unwrap();

        let mut early = make_save_data("early", 100);
        early.timestamp = 1000;
        save_to_file(dir.path(), "early", &early).unwrap();

        let mut late = make_save_data("late", 800);
        late.timestamp = 2000;
        save_to_file(dir.path(), "late", &late).unwrap();

        fs::write(dir.path().join("junk.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let saves = list_saves(dir.path());
        assert_eq!(saves.len(), 2);
        // Sorted by timestamp descending
        assert_eq!(saves[0].slot_name, "late");
        assert_eq!(saves[0].coins, 800);
        assert_eq!(saves[1].slot_name, "early");
        assert_eq!(saves[1].player_name, "Ghost");
    }

    #[test]
    fn delete_save_removes_file() {
        let dir = tempdir().unwrap();
        save_to_file(dir.path(), "todelete", &make_save_data("todelete", 1)).unwrap();
        assert!(save_path(dir.path(), "todelete").exists());

        delete_save(dir.path(), "todelete").unwrap();
        assert!(!save_path(dir.path(), "todelete").exists());
    }

    #[test]
    fn delete_nonexistent_save_ok() {
        let dir = tempdir().unwrap();
        delete_save(dir.path(), "nope").unwrap();
    }
}
