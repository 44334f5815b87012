// src/repositories/saved_protein_repository.rs

use std::sync::Arc;

use crate::domain::SavedProteinEntry;
use crate::error::AppResult;
use crate::store::{JsonStore, SAVED_PROTEINS_KEY};

#[cfg_attr(test, mockall::automock)]
pub trait SavedProteinRepository: Send + Sync {
    /// All entries in stored order
    fn list(&self) -> AppResult<Vec<SavedProteinEntry>>;
    fn exists(&self, id: &str) -> AppResult<bool>;
    fn insert(&self, entry: &SavedProteinEntry) -> AppResult<()>;
    /// Returns whether an entry was actually removed
    fn remove(&self, id: &str) -> AppResult<bool>;
    fn clear(&self) -> AppResult<()>;
    /// Store version of the collection, for change detection
    fn version(&self) -> u64;
}

pub struct JsonSavedProteinRepository {
    store: Arc<JsonStore>,
}

impl JsonSavedProteinRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl SavedProteinRepository for JsonSavedProteinRepository {
    fn list(&self) -> AppResult<Vec<SavedProteinEntry>> {
        Ok(self.store.load(SAVED_PROTEINS_KEY))
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        let entries: Vec<SavedProteinEntry> = self.store.load(SAVED_PROTEINS_KEY);
        Ok(entries.iter().any(|e| e.id == id))
    }

    fn insert(&self, entry: &SavedProteinEntry) -> AppResult<()> {
        let mut entries: Vec<SavedProteinEntry> = self.store.load(SAVED_PROTEINS_KEY);
        entries.push(entry.clone());
        self.store.save(SAVED_PROTEINS_KEY, &entries)?;
        Ok(())
    }

    fn remove(&self, id: &str) -> AppResult<bool> {
        let entries: Vec<SavedProteinEntry> = self.store.load(SAVED_PROTEINS_KEY);
        let before = entries.len();
        let remaining: Vec<SavedProteinEntry> =
            entries.into_iter().filter(|e| e.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.store.save(SAVED_PROTEINS_KEY, &remaining)?;
        Ok(true)
    }

    fn clear(&self) -> AppResult<()> {
        self.store.remove(SAVED_PROTEINS_KEY)
    }

    fn version(&self) -> u64 {
        self.store.version(SAVED_PROTEINS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock_proteins;
    use tempfile::tempdir;

    fn repo(dir: &std::path::Path) -> JsonSavedProteinRepository {
        JsonSavedProteinRepository::new(Arc::new(JsonStore::open(dir).unwrap()))
    }

    #[test]
    fn test_insert_and_list() {
        let dir = tempdir().unwrap();
        let repo = repo(dir.path());
        let entry = SavedProteinEntry::from_record(&mock_proteins()[0]);

        repo.insert(&entry).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, entry.id);
        assert!(repo.exists(&entry.id).unwrap());
    }

    #[test]
    fn test_remove_unknown_id_leaves_collection_unchanged() {
        let dir = tempdir().unwrap();
        let repo = repo(dir.path());
        let entry = SavedProteinEntry::from_record(&mock_proteins()[0]);
        repo.insert(&entry).unwrap();

        let removed = repo.remove("NO_SUCH_ID").unwrap();

        assert!(!removed);
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_existing_entry() {
        let dir = tempdir().unwrap();
        let repo = repo(dir.path());
        let entry = SavedProteinEntry::from_record(&mock_proteins()[0]);
        repo.insert(&entry).unwrap();

        assert!(repo.remove(&entry.id).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let repo = repo(dir.path());
        repo.insert(&SavedProteinEntry::from_record(&mock_proteins()[0]))
            .unwrap();

        repo.clear().unwrap();

        assert!(repo.list().unwrap().is_empty());
    }
}
