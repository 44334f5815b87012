// src/repositories/prediction_repository.rs

use std::sync::Arc;

use crate::domain::PredictionJob;
use crate::error::AppResult;
use crate::store::{JsonStore, PREDICTIONS_KEY};

#[cfg_attr(test, mockall::automock)]
pub trait PredictionRepository: Send + Sync {
    /// Jobs sorted by submission date, newest first
    fn list(&self) -> AppResult<Vec<PredictionJob>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<PredictionJob>>;
    /// Prepends the job to the history
    fn insert(&self, job: &PredictionJob) -> AppResult<()>;
    fn version(&self) -> u64;
}

pub struct JsonPredictionRepository {
    store: Arc<JsonStore>,
}

impl JsonPredictionRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl PredictionRepository for JsonPredictionRepository {
    fn list(&self) -> AppResult<Vec<PredictionJob>> {
        let mut jobs: Vec<PredictionJob> = self.store.load(PREDICTIONS_KEY);
        jobs.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(jobs)
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<PredictionJob>> {
        let jobs: Vec<PredictionJob> = self.store.load(PREDICTIONS_KEY);
        Ok(jobs.into_iter().find(|j| j.id == id))
    }

    fn insert(&self, job: &PredictionJob) -> AppResult<()> {
        let mut jobs: Vec<PredictionJob> = self.store.load(PREDICTIONS_KEY);
        jobs.insert(0, job.clone());
        self.store.save(PREDICTIONS_KEY, &jobs)?;
        Ok(())
    }

    fn version(&self) -> u64 {
        self.store.version(PREDICTIONS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::tempdir;

    fn job_at(id: &str, minutes_ago: i64) -> PredictionJob {
        let mut job = PredictionJob::new(format!("Job {}", id), "MKVLW");
        job.id = id.to_string();
        job.submitted_at = Utc::now() - Duration::minutes(minutes_ago);
        job
    }

    #[test]
    fn test_list_sorts_newest_first() {
        let dir = tempdir().unwrap();
        let repo = JsonPredictionRepository::new(Arc::new(JsonStore::open(dir.path()).unwrap()));

        repo.insert(&job_at("old", 60)).unwrap();
        repo.insert(&job_at("newer", 5)).unwrap();
        repo.insert(&job_at("middle", 30)).unwrap();

        let jobs = repo.list().unwrap();
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["newer", "middle", "old"]);
    }

    #[test]
    fn test_get_by_id() {
        let dir = tempdir().unwrap();
        let repo = JsonPredictionRepository::new(Arc::new(JsonStore::open(dir.path()).unwrap()));

        repo.insert(&job_at("a", 1)).unwrap();

        assert!(repo.get_by_id("a").unwrap().is_some());
        assert!(repo.get_by_id("b").unwrap().is_none());
    }
}
