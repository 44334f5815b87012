// src/services/catalog_service.rs
//
// Protein catalog: remote-first search with a silent fallback to the
// built-in dataset when the data backend is unreachable. Filtering and
// pagination always run client-side over whichever rows were obtained.

use std::sync::Arc;

use crate::domain::{mock_proteins, mock_stats, Page, ProteinRecord, ProteinStats, SearchSession};
use crate::error::{AppError, AppResult};
use crate::integrations::{
    NewProtein, ProteinApi, ProteinComparison, ProteinUpdate, SearchFilters,
};
use crate::repositories::SavedProteinRepository;

/// Where a result set actually came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub page: Page,
    pub source: DataSource,
}

#[derive(Debug)]
pub struct StatsOutcome {
    pub stats: ProteinStats,
    pub source: DataSource,
}

pub struct CatalogService {
    api: Arc<dyn ProteinApi>,
    saved_repo: Arc<dyn SavedProteinRepository>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn ProteinApi>, saved_repo: Arc<dyn SavedProteinRepository>) -> Self {
        Self { api, saved_repo }
    }

    /// Runs a search session against the backend, degrading to the offline
    /// dataset when the call fails. One attempt, no retry.
    pub async fn search(&self, session: &SearchSession) -> AppResult<SearchOutcome> {
        let filters = SearchFilters::from_query(&session.criteria().query);

        match self.api.search(&filters).await {
            Ok(records) => Ok(SearchOutcome {
                page: session.apply(&records),
                source: DataSource::Remote,
            }),
            Err(e) => {
                log::warn!("backend search failed, using local data: {}", e);
                let records = mock_proteins();
                Ok(SearchOutcome {
                    page: session.apply(&records),
                    source: DataSource::Fallback,
                })
            }
        }
    }

    /// Fetches one record; falls back to the offline dataset, then to a
    /// skeleton built from the saved collection.
    pub async fn get(&self, id: &str) -> AppResult<(ProteinRecord, DataSource)> {
        match self.api.get(id).await {
            Ok(record) => Ok((record, DataSource::Remote)),
            Err(e) => {
                log::warn!("backend lookup for {} failed, using local data: {}", id, e);

                if let Some(record) = mock_proteins().into_iter().find(|r| r.id == id) {
                    return Ok((record, DataSource::Fallback));
                }

                let saved = self.saved_repo.list()?;
                if let Some(entry) = saved.into_iter().find(|s| s.id == id) {
                    return Ok((
                        ProteinRecord {
                            id: entry.id,
                            name: entry.name,
                            gene: None,
                            organism: entry.organism,
                            length: 0,
                            weight: 0.0,
                            function: String::new(),
                            sequence: None,
                            family: None,
                            isoelectric_point: None,
                            hydrophobicity: None,
                        },
                        DataSource::Fallback,
                    ));
                }

                Err(AppError::NotFound)
            }
        }
    }

    /// Side-by-side comparison; no offline equivalent exists, so failures
    /// surface to the caller (reported, never fatal).
    pub async fn compare(&self, id_1: &str, id_2: &str) -> AppResult<ProteinComparison> {
        self.api.compare(id_1, id_2).await
    }

    pub async fn stats(&self) -> StatsOutcome {
        match self.api.stats().await {
            Ok(stats) => StatsOutcome {
                stats,
                source: DataSource::Remote,
            },
            Err(e) => {
                log::warn!("backend stats failed, using mock statistics: {}", e);
                StatsOutcome {
                    stats: mock_stats(),
                    source: DataSource::Fallback,
                }
            }
        }
    }

    pub async fn create(&self, protein: &NewProtein) -> AppResult<()> {
        self.api.create(protein).await
    }

    pub async fn update(&self, id: &str, update: &ProteinUpdate) -> AppResult<()> {
        self.api.update(id, update).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.api.delete(id).await
    }

    pub async fn bulk_create(&self, proteins: &[NewProtein]) -> AppResult<usize> {
        self.api.bulk_create(proteins).await
    }
}
