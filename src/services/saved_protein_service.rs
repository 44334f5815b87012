// src/services/saved_protein_service.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::domain::{ProteinRecord, SavedProteinEntry};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ProteinRemoved, ProteinSaved, StoreChanged};
use crate::integrations::{NewProtein, ProteinApi};
use crate::repositories::SavedProteinRepository;
use crate::store::SAVED_PROTEINS_KEY;

/// Result of a save request. Saving an already-pinned protein is a
/// reported no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

pub struct SavedProteinService {
    saved_repo: Arc<dyn SavedProteinRepository>,
    api: Arc<dyn ProteinApi>,
    event_bus: Arc<EventBus>,
}

impl SavedProteinService {
    pub fn new(
        saved_repo: Arc<dyn SavedProteinRepository>,
        api: Arc<dyn ProteinApi>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            saved_repo,
            api,
            event_bus,
        }
    }

    /// Pins a protein to the local collection.
    ///
    /// The record is also offered to the backend first (the hosted flow);
    /// a backend failure is logged and the local save proceeds anyway.
    pub async fn save(&self, record: &ProteinRecord) -> AppResult<SaveOutcome> {
        if self.saved_repo.exists(&record.id)? {
            return Ok(SaveOutcome::AlreadySaved);
        }

        let payload = NewProtein {
            id: record.id.clone(),
            name: record.name.clone(),
            seq: vec![record
                .sequence
                .clone()
                .unwrap_or_else(|| "UNKNOWN".to_string())],
            gene: record.gene.clone(),
            taxo: Some(record.organism.clone()),
            family: record.family.clone(),
            function: if record.function.is_empty() {
                None
            } else {
                Some(record.function.clone())
            },
            pi: record.isoelectric_point,
            hydrophobicity_gravy: record.hydrophobicity,
            n_interactors: None,
        };
        if let Err(e) = self.api.create(&payload).await {
            log::warn!("backend save for {} failed, saving locally: {}", record.id, e);
        }

        let entry = SavedProteinEntry::from_record(record);
        self.saved_repo.insert(&entry)?;

        self.event_bus
            .emit(ProteinSaved::new(entry.id.clone(), entry.name.clone()));
        self.event_bus.emit(StoreChanged::new(
            SAVED_PROTEINS_KEY.to_string(),
            self.saved_repo.version(),
        ));

        Ok(SaveOutcome::Saved)
    }

    /// Unpins a protein. Removing an id that was never saved leaves the
    /// collection unchanged and emits nothing.
    pub fn remove(&self, id: &str) -> AppResult<bool> {
        let removed = self.saved_repo.remove(id)?;

        if removed {
            self.event_bus.emit(ProteinRemoved::new(id.to_string()));
            self.event_bus.emit(StoreChanged::new(
                SAVED_PROTEINS_KEY.to_string(),
                self.saved_repo.version(),
            ));
        }

        Ok(removed)
    }

    /// All saved entries, most recently saved first
    pub fn list(&self) -> AppResult<Vec<SavedProteinEntry>> {
        let mut entries = self.saved_repo.list()?;
        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(entries)
    }

    pub fn recent(&self, n: usize) -> AppResult<Vec<SavedProteinEntry>> {
        let mut entries = self.list()?;
        entries.truncate(n);
        Ok(entries)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.saved_repo.clear()?;
        self.event_bus.emit(StoreChanged::new(
            SAVED_PROTEINS_KEY.to_string(),
            self.saved_repo.version(),
        ));
        Ok(())
    }

    /// Writes the collection to `saved_proteins_<date>.{json,csv}` inside
    /// `dir` and returns the written path. Exporting an empty collection
    /// is an error, matching the hosted behavior.
    pub fn export(&self, format: ExportFormat, dir: &Path) -> AppResult<PathBuf> {
        let entries = self.list()?;
        if entries.is_empty() {
            return Err(AppError::Other("No saved proteins to export".to_string()));
        }

        let stamp = Utc::now().format("%Y-%m-%d");
        let path = match format {
            ExportFormat::Json => {
                let path = dir.join(format!("saved_proteins_{}.json", stamp));
                std::fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
                path
            }
            ExportFormat::Csv => {
                let path = dir.join(format!("saved_proteins_{}.csv", stamp));
                let mut writer = csv::Writer::from_path(&path)?;
                writer.write_record(["id", "name", "organism", "saved_at"])?;
                for entry in &entries {
                    writer.write_record([
                        entry.id.as_str(),
                        entry.name.as_str(),
                        entry.organism.as_str(),
                        &entry.saved_at.to_rfc3339(),
                    ])?;
                }
                writer.flush()?;
                path
            }
        };

        Ok(path)
    }
}
