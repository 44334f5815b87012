// src/store/json_store.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::UNIX_EPOCH;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Key-value JSON store. Each key maps to `<dir>/<key>.json` holding one
/// JSON document (usually an array of records).
///
/// Reads never fail: a missing or unreadable document is an empty
/// collection, and malformed JSON is logged and treated the same way.
/// Writes are full overwrites; concurrent external writers are
/// last-write-wins, with no merge.
pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Storage(format!("cannot create {}: {}", dir.display(), e)))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Loads a collection. Absent or malformed documents yield an empty
    /// vector; malformed content additionally logs a warning.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!(
                    "malformed JSON in {}, treating collection as empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrites a collection and returns the new store version.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> AppResult<u64> {
        let _guard = self.write_lock.lock().unwrap();
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&path, json)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {}", path.display(), e)))?;
        Ok(file_version(&path))
    }

    /// Loads a single-document key (e.g. the last analysis report).
    pub fn load_object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("cannot read {}: {}", path.display(), e);
                }
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("malformed JSON in {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Overwrites a single-document key and returns the new store version.
    pub fn save_object<T: Serialize>(&self, key: &str, value: &T) -> AppResult<u64> {
        let _guard = self.write_lock.lock().unwrap();
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {}", path.display(), e)))?;
        Ok(file_version(&path))
    }

    /// Deletes a key's document. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().unwrap();
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "cannot remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Current version of a key, for polling-with-version-check refresh.
    /// Derived from file metadata so writes by other processes are visible;
    /// an absent document is version 0.
    pub fn version(&self, key: &str) -> u64 {
        file_version(&self.path_for(key))
    }
}

fn file_version(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
