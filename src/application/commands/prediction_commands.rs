// src/application/commands/prediction_commands.rs

use std::path::Path;

use crate::application::dto::*;
use crate::application::state::AppState;
use crate::services::PredictionRequest;

/// Submit a sequence for disease prediction and return the full report.
///
/// Sequence properties (pI, GRAVY) are pre-computed via the inference
/// backend when it is reachable, the way the input form auto-fills them;
/// a failure there leaves them blank and does not block the submission.
pub async fn submit_prediction(
    state: &AppState,
    dto: SubmitPredictionDto,
) -> Result<AnalysisReportDto, String> {
    let mut request = PredictionRequest {
        sequence: dto.sequence,
        protein_name: dto.protein_name,
        gene: dto.gene,
        model: dto.model,
        organism: dto.organism,
        family: dto.family,
        ..Default::default()
    };

    match state.prediction_service.properties(&request.sequence).await {
        Ok(properties) => {
            request.isoelectric_point = Some(properties.isoelectric_point);
            request.hydrophobicity = Some(properties.gravy);
        }
        Err(e) => {
            log::debug!("property calculation unavailable: {}", e);
        }
    }

    let outcome = state
        .prediction_service
        .submit(request)
        .await
        .map_err(|e| e.to_string())?;

    Ok(outcome.report.into())
}

/// Prediction history, newest first
pub fn prediction_history(state: &AppState) -> Result<Vec<PredictionJobDto>, String> {
    let jobs = state
        .prediction_service
        .history()
        .map_err(|e| e.to_string())?;

    Ok(jobs.into_iter().map(PredictionJobDto::from).collect())
}

/// The report for a job id, or the most recent one
pub async fn analysis_report(
    state: &AppState,
    job_id: Option<&str>,
) -> Result<AnalysisReportDto, String> {
    let report = state
        .prediction_service
        .report_for(job_id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(report.into())
}

/// Align two sequences
pub async fn align_sequences(
    state: &AppState,
    sequence1: &str,
    sequence2: &str,
) -> Result<AlignmentDto, String> {
    let result = state
        .prediction_service
        .align(sequence1, sequence2)
        .await
        .map_err(|e| e.to_string())?;

    Ok(result.into())
}

/// Similarity score between two sequences
pub async fn sequence_similarity(
    state: &AppState,
    sequence1: &str,
    sequence2: &str,
) -> Result<SimilarityDto, String> {
    let result = state
        .prediction_service
        .similarity(sequence1, sequence2)
        .await
        .map_err(|e| e.to_string())?;

    Ok(result.into())
}

/// Extract a sequence from an uploaded file
pub fn read_sequence_file(state: &AppState, path: &Path) -> Result<String, String> {
    state
        .file_service
        .read_sequence(path)
        .map_err(|e| e.to_string())
}
