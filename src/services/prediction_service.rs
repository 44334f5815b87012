// src/services/prediction_service.rs
//
// Prediction submission flow: Idle -> Validating -> Submitting ->
// Completed | Failed. Validation failures have no side effects; inference
// failures persist nothing. Only completed submissions reach the history.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    clean_sequence, validate_sequence, AnalysisProperties, AnalysisReport, PredictionJob,
};
use crate::error::{AppError, AppResult};
use crate::events::{AnalysisStored, EventBus, PredictionRecorded, StoreChanged};
use crate::integrations::ml_api::client::DEFAULT_MODEL;
use crate::integrations::{
    AlignmentResult, InferenceApi, NewProtein, ProteinApi, SequenceProperties, SimilarityResult,
};
use crate::repositories::{AnalysisRepository, PredictionRepository};
use crate::store::{LAST_ANALYSIS_KEY, PREDICTIONS_KEY};

/// Everything the submit form carries.
#[derive(Debug, Clone, Default)]
pub struct PredictionRequest {
    /// Raw sequence text, typed or read from a file
    pub sequence: String,
    pub protein_name: Option<String>,
    pub gene: Option<String>,
    pub model: Option<String>,
    pub organism: Option<String>,
    pub family: Option<String>,
    pub isoelectric_point: Option<f64>,
    pub hydrophobicity: Option<f64>,
    pub interactors: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub job_id: String,
    pub report: AnalysisReport,
}

pub struct PredictionService {
    prediction_repo: Arc<dyn PredictionRepository>,
    analysis_repo: Arc<dyn AnalysisRepository>,
    ml_api: Arc<dyn InferenceApi>,
    protein_api: Arc<dyn ProteinApi>,
    event_bus: Arc<EventBus>,
}

impl PredictionService {
    pub fn new(
        prediction_repo: Arc<dyn PredictionRepository>,
        analysis_repo: Arc<dyn AnalysisRepository>,
        ml_api: Arc<dyn InferenceApi>,
        protein_api: Arc<dyn ProteinApi>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            prediction_repo,
            analysis_repo,
            ml_api,
            protein_api,
            event_bus,
        }
    }

    /// Validates, submits, and on success persists the job plus the full
    /// report. Returns the job id the results view is keyed by.
    pub async fn submit(&self, request: PredictionRequest) -> AppResult<PredictionOutcome> {
        // Validating: reject before any side effect
        let sequence = clean_sequence(&request.sequence);
        validate_sequence(&sequence).map_err(AppError::Domain)?;

        let protein_name = request
            .protein_name
            .clone()
            .unwrap_or_else(|| "User Submitted Protein".to_string());
        let job_name = format!(
            "Protein Analysis - {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S")
        );

        // Submitting: the job record carries Completed from the start,
        // before the inference call resolves (kept as the hosted UI does)
        let job = PredictionJob::new(job_name, &sequence);

        // Registering the submission in the protein database is
        // best-effort; analysis proceeds without it
        let payload = NewProtein {
            id: job.id.clone(),
            name: protein_name.clone(),
            seq: vec![sequence.clone()],
            gene: request.gene.clone(),
            taxo: request.organism.clone(),
            family: request.family.clone(),
            function: None,
            pi: request.isoelectric_point,
            hydrophobicity_gravy: request.hydrophobicity,
            n_interactors: request.interactors,
        };
        if let Err(e) = self.protein_api.create(&payload).await {
            log::warn!("failed to create protein, continuing with analysis: {}", e);
        }

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let response = self.ml_api.predict_disease(&sequence, &model).await?;

        // Completed: persist report + job, newest first
        let model_used = if response.model_used.is_empty() {
            model
        } else {
            response.model_used
        };
        let report = AnalysisReport {
            job_id: job.id.clone(),
            protein_name,
            gene_name: request.gene,
            sequence_length: sequence.len(),
            disease_predictions: response.predictions,
            model_used,
            analyzed_at: Utc::now(),
            properties: AnalysisProperties {
                length: sequence.len() as u32,
                isoelectric_point: request.isoelectric_point,
                hydrophobicity: request.hydrophobicity,
                interactors: request.interactors,
                organism: request.organism,
                family: request.family,
            },
            sequence,
        };

        self.analysis_repo.store(&report)?;
        self.prediction_repo.insert(&job)?;

        self.event_bus.emit(AnalysisStored::new(job.id.clone()));
        self.event_bus
            .emit(PredictionRecorded::new(job.id.clone(), job.job_name.clone()));
        self.event_bus.emit(StoreChanged::new(
            PREDICTIONS_KEY.to_string(),
            self.prediction_repo.version(),
        ));
        self.event_bus.emit(StoreChanged::new(
            LAST_ANALYSIS_KEY.to_string(),
            self.analysis_repo.version(),
        ));

        Ok(PredictionOutcome {
            job_id: job.id,
            report,
        })
    }

    /// Prediction history, newest first
    pub fn history(&self) -> AppResult<Vec<PredictionJob>> {
        self.prediction_repo.list()
    }

    /// Resolves the report for a job id (or the most recent one when no id
    /// is given). When the stored report does not match, the sequence is
    /// re-analyzed from the protein database as the hosted results page
    /// does: fetch the record, run prediction again.
    pub async fn report_for(&self, job_id: Option<&str>) -> AppResult<AnalysisReport> {
        let last = self.analysis_repo.load_last()?;

        match job_id {
            None => last.ok_or(AppError::NotFound),
            Some(id) => {
                if let Some(report) = last.filter(|r| r.job_id == id) {
                    return Ok(report);
                }
                self.reanalyze(id).await
            }
        }
    }

    /// Pairwise alignment of two cleaned sequences
    pub async fn align(&self, sequence1: &str, sequence2: &str) -> AppResult<AlignmentResult> {
        let (s1, s2) = self.cleaned_pair(sequence1, sequence2)?;
        self.ml_api.align(&s1, &s2).await
    }

    /// Similarity score between two cleaned sequences
    pub async fn similarity(
        &self,
        sequence1: &str,
        sequence2: &str,
    ) -> AppResult<SimilarityResult> {
        let (s1, s2) = self.cleaned_pair(sequence1, sequence2)?;
        self.ml_api.similarity(&s1, &s2).await
    }

    /// Physico-chemical properties of one cleaned sequence
    pub async fn properties(&self, sequence: &str) -> AppResult<SequenceProperties> {
        let cleaned = clean_sequence(sequence);
        validate_sequence(&cleaned).map_err(AppError::Domain)?;
        self.ml_api.calculate_properties(&cleaned).await
    }

    fn cleaned_pair(&self, sequence1: &str, sequence2: &str) -> AppResult<(String, String)> {
        let s1 = clean_sequence(sequence1);
        let s2 = clean_sequence(sequence2);
        validate_sequence(&s1).map_err(AppError::Domain)?;
        validate_sequence(&s2).map_err(AppError::Domain)?;
        Ok((s1, s2))
    }

    async fn reanalyze(&self, id: &str) -> AppResult<AnalysisReport> {
        let record = self.protein_api.get(id).await?;
        let sequence = record.sequence.clone().ok_or(AppError::NotFound)?;

        let response = self
            .ml_api
            .predict_disease(&sequence, DEFAULT_MODEL)
            .await?;

        Ok(AnalysisReport {
            job_id: record.id.clone(),
            protein_name: record.name.clone(),
            gene_name: record.gene.clone(),
            sequence_length: sequence.len(),
            disease_predictions: response.predictions,
            model_used: if response.model_used.is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                response.model_used
            },
            analyzed_at: Utc::now(),
            properties: AnalysisProperties {
                length: record.length,
                isoelectric_point: record.isoelectric_point,
                hydrophobicity: record.hydrophobicity,
                interactors: None,
                organism: Some(record.organism),
                family: record.family,
            },
            sequence,
        })
    }
}
