// src/services/statistics_service.rs

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::JobStatus;
use crate::error::AppResult;
use crate::events::{EventBus, StoreChanged};
use crate::repositories::{PredictionRepository, SavedProteinRepository};

/// Dashboard counters derived from the local store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalOverview {
    pub total_predictions: usize,
    pub processing_jobs: usize,
    pub total_saved: usize,
}

pub struct StatisticsService {
    prediction_repo: Arc<dyn PredictionRepository>,
    saved_repo: Arc<dyn SavedProteinRepository>,
    event_bus: Arc<EventBus>,
    snapshot: Arc<RwLock<Option<LocalOverview>>>,
}

impl StatisticsService {
    pub fn new(
        prediction_repo: Arc<dyn PredictionRepository>,
        saved_repo: Arc<dyn SavedProteinRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            prediction_repo,
            saved_repo,
            event_bus,
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    /// Recomputes the overview from the store and caches the snapshot.
    pub fn local_overview(&self) -> AppResult<LocalOverview> {
        let overview = compute(&*self.prediction_repo, &*self.saved_repo)?;
        *self.snapshot.write().unwrap() = Some(overview);
        Ok(overview)
    }

    /// Last computed snapshot, if any
    pub fn cached_overview(&self) -> Option<LocalOverview> {
        *self.snapshot.read().unwrap()
    }

    /// Keeps the snapshot fresh whenever a store collection changes.
    pub fn register_event_handlers(&self) {
        let prediction_repo = Arc::clone(&self.prediction_repo);
        let saved_repo = Arc::clone(&self.saved_repo);
        let snapshot = Arc::clone(&self.snapshot);

        self.event_bus.subscribe::<StoreChanged, _>(move |event| {
            match compute(&*prediction_repo, &*saved_repo) {
                Ok(overview) => {
                    *snapshot.write().unwrap() = Some(overview);
                }
                Err(e) => {
                    log::warn!(
                        "failed to refresh statistics after {} change: {}",
                        event.key,
                        e
                    );
                }
            }
        });
    }
}

fn compute(
    prediction_repo: &dyn PredictionRepository,
    saved_repo: &dyn SavedProteinRepository,
) -> AppResult<LocalOverview> {
    let jobs = prediction_repo.list()?;
    let processing_jobs = jobs
        .iter()
        .filter(|j| j.status == JobStatus::Processing)
        .count();
    let total_saved = saved_repo.list()?.len();

    Ok(LocalOverview {
        total_predictions: jobs.len(),
        processing_jobs,
        total_saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PredictionJob, SavedProteinEntry};
    use crate::repositories::{MockPredictionRepository, MockSavedProteinRepository};
    use chrono::Utc;

    fn saved_entry(id: &str) -> SavedProteinEntry {
        SavedProteinEntry {
            id: id.to_string(),
            name: "Insulin".to_string(),
            organism: "Homo sapiens".to_string(),
            saved_at: Utc::now(),
        }
    }

    fn service_with(
        jobs: Vec<PredictionJob>,
        saved: Vec<SavedProteinEntry>,
    ) -> (StatisticsService, Arc<EventBus>) {
        let mut prediction_repo = MockPredictionRepository::new();
        prediction_repo.expect_list().returning(move || Ok(jobs.clone()));

        let mut saved_repo = MockSavedProteinRepository::new();
        saved_repo.expect_list().returning(move || Ok(saved.clone()));

        let bus = Arc::new(EventBus::new());
        let service = StatisticsService::new(
            Arc::new(prediction_repo),
            Arc::new(saved_repo),
            Arc::clone(&bus),
        );
        (service, bus)
    }

    #[test]
    fn test_overview_counts_processing_jobs() {
        let mut completed = PredictionJob::new("a".to_string(), "MKV");
        completed.status = JobStatus::Completed;
        let mut processing = PredictionJob::new("b".to_string(), "MKV");
        processing.status = JobStatus::Processing;

        let (service, _bus) = service_with(
            vec![completed, processing],
            vec![saved_entry("P01308"), saved_entry("P69905")],
        );

        let overview = service.local_overview().unwrap();
        assert_eq!(overview.total_predictions, 2);
        assert_eq!(overview.processing_jobs, 1);
        assert_eq!(overview.total_saved, 2);
    }

    #[test]
    fn test_store_change_refreshes_snapshot() {
        let (service, bus) = service_with(vec![], vec![saved_entry("P01308")]);
        service.register_event_handlers();

        assert!(service.cached_overview().is_none());

        bus.emit(StoreChanged::new("savedProteins".to_string(), 1));

        let snapshot = service.cached_overview().unwrap();
        assert_eq!(snapshot.total_saved, 1);
    }
}
