// src/repositories/analysis_repository.rs

use std::sync::Arc;

use crate::domain::AnalysisReport;
use crate::error::AppResult;
use crate::store::{JsonStore, LAST_ANALYSIS_KEY};

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRepository: Send + Sync {
    /// The single most-recent report, if any
    fn load_last(&self) -> AppResult<Option<AnalysisReport>>;
    /// Overwrites the most-recent report
    fn store(&self, report: &AnalysisReport) -> AppResult<()>;
    fn version(&self) -> u64;
}

pub struct JsonAnalysisRepository {
    store: Arc<JsonStore>,
}

impl JsonAnalysisRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl AnalysisRepository for JsonAnalysisRepository {
    fn load_last(&self) -> AppResult<Option<AnalysisReport>> {
        Ok(self.store.load_object(LAST_ANALYSIS_KEY))
    }

    fn store(&self, report: &AnalysisReport) -> AppResult<()> {
        self.store.save_object(LAST_ANALYSIS_KEY, report)?;
        Ok(())
    }

    fn version(&self) -> u64 {
        self.store.version(LAST_ANALYSIS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisProperties, DiseasePrediction};
    use chrono::Utc;
    use tempfile::tempdir;

    fn report(job_id: &str) -> AnalysisReport {
        AnalysisReport {
            job_id: job_id.to_string(),
            protein_name: "User Submitted Protein".to_string(),
            gene_name: None,
            sequence: "MKVLW".to_string(),
            sequence_length: 5,
            disease_predictions: vec![DiseasePrediction {
                disease: "Diabetes mellitus".to_string(),
                confidence: 0.87,
                evidence: "ML model prediction".to_string(),
            }],
            model_used: "lightgbm_best".to_string(),
            analyzed_at: Utc::now(),
            properties: AnalysisProperties {
                length: 5,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_store_overwrites_previous_report() {
        let dir = tempdir().unwrap();
        let repo = JsonAnalysisRepository::new(Arc::new(JsonStore::open(dir.path()).unwrap()));

        assert!(repo.load_last().unwrap().is_none());

        repo.store(&report("USER_1")).unwrap();
        repo.store(&report("USER_2")).unwrap();

        let last = repo.load_last().unwrap().unwrap();
        assert_eq!(last.job_id, "USER_2");
    }
}
