// src/services/prediction_service_tests.rs
//
// Submission state machine: validation failures and inference failures
// must leave no trace; completed submissions persist job + report.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::{DiseasePrediction, DomainError, JobStatus};
use crate::error::AppError;
use crate::events::{EventBus, StoreChanged};
use crate::integrations::ml_api::client::{DiseasePredictionResponse, MockInferenceApi};
use crate::integrations::protein_api::client::MockProteinApi;
use crate::repositories::{
    JsonAnalysisRepository, JsonPredictionRepository, MockAnalysisRepository,
    MockPredictionRepository,
};
use crate::services::prediction_service::{PredictionRequest, PredictionService};
use crate::store::JsonStore;

fn prediction_response() -> DiseasePredictionResponse {
    DiseasePredictionResponse {
        predictions: vec![DiseasePrediction {
            disease: "Diabetes mellitus".to_string(),
            confidence: 0.87,
            evidence: "ML model prediction".to_string(),
        }],
        sequence_length: 3,
        model_used: "lightgbm_best".to_string(),
    }
}

fn request(sequence: &str) -> PredictionRequest {
    PredictionRequest {
        sequence: sequence.to_string(),
        ..Default::default()
    }
}

/// Service over real JSON repositories in a temp dir, with mocked backends.
fn file_backed_service(
    dir: &std::path::Path,
    ml_api: MockInferenceApi,
    protein_api: MockProteinApi,
) -> (PredictionService, Arc<EventBus>) {
    let store = Arc::new(JsonStore::open(dir).unwrap());
    let bus = Arc::new(EventBus::new());
    let service = PredictionService::new(
        Arc::new(JsonPredictionRepository::new(Arc::clone(&store))),
        Arc::new(JsonAnalysisRepository::new(store)),
        Arc::new(ml_api),
        Arc::new(protein_api),
        Arc::clone(&bus),
    );
    (service, bus)
}

#[tokio::test]
async fn invalid_sequence_fails_without_side_effects() {
    // Strict mocks: any repository or backend call would panic the test
    let service = PredictionService::new(
        Arc::new(MockPredictionRepository::new()),
        Arc::new(MockAnalysisRepository::new()),
        Arc::new(MockInferenceApi::new()),
        Arc::new(MockProteinApi::new()),
        Arc::new(EventBus::new()),
    );

    let err = service.submit(request("XQZ")).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::InvalidSequence(_))
    ));

    let err = service.submit(request("")).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::MissingInput(_))));
}

#[tokio::test]
async fn inference_failure_persists_nothing() {
    let mut ml_api = MockInferenceApi::new();
    ml_api.expect_predict_disease().returning(|_, _| {
        Err(AppError::Api {
            status: 500,
            message: "model unavailable".to_string(),
        })
    });
    let mut protein_api = MockProteinApi::new();
    protein_api.expect_create().returning(|_| Ok(()));

    let dir = tempfile::tempdir().unwrap();
    let (service, _bus) = file_backed_service(dir.path(), ml_api, protein_api);

    assert!(service.submit(request("MKVLW")).await.is_err());
    assert!(service.history().unwrap().is_empty());
    assert!(service.report_for(None).await.is_err());
}

#[tokio::test]
async fn sequence_is_cleaned_before_submission() {
    let mut ml_api = MockInferenceApi::new();
    ml_api
        .expect_predict_disease()
        .withf(|sequence, model| sequence == "MKV" && model == "lightgbm_best")
        .returning(|_, _| Ok(prediction_response()));
    let mut protein_api = MockProteinApi::new();
    protein_api.expect_create().returning(|_| Ok(()));

    let dir = tempfile::tempdir().unwrap();
    let (service, _bus) = file_backed_service(dir.path(), ml_api, protein_api);

    let outcome = service.submit(request("MKV123")).await.unwrap();
    assert_eq!(outcome.report.sequence, "MKV");
    assert_eq!(outcome.report.sequence_length, 3);
}

#[tokio::test]
async fn completed_submission_persists_job_and_report() {
    let mut ml_api = MockInferenceApi::new();
    ml_api
        .expect_predict_disease()
        .returning(|_, _| Ok(prediction_response()));
    let mut protein_api = MockProteinApi::new();
    protein_api.expect_create().returning(|_| Ok(()));

    let dir = tempfile::tempdir().unwrap();
    let (service, bus) = file_backed_service(dir.path(), ml_api, protein_api);

    let store_changes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&store_changes);
    bus.subscribe::<StoreChanged, _>(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let outcome = service.submit(request("MKVLW")).await.unwrap();

    let history = service.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, outcome.job_id);
    assert_eq!(history[0].status, JobStatus::Completed);
    assert!(history[0].id.starts_with("USER_"));

    let report = service.report_for(Some(&outcome.job_id)).await.unwrap();
    assert_eq!(report.job_id, outcome.job_id);
    assert_eq!(report.disease_predictions.len(), 1);

    // one notification per touched collection
    assert_eq!(store_changes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn backend_create_failure_does_not_block_analysis() {
    let mut ml_api = MockInferenceApi::new();
    ml_api
        .expect_predict_disease()
        .returning(|_, _| Ok(prediction_response()));
    let mut protein_api = MockProteinApi::new();
    protein_api.expect_create().returning(|_| {
        Err(AppError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        })
    });

    let dir = tempfile::tempdir().unwrap();
    let (service, _bus) = file_backed_service(dir.path(), ml_api, protein_api);

    assert!(service.submit(request("MKVLW")).await.is_ok());
    assert_eq!(service.history().unwrap().len(), 1);
}

#[tokio::test]
async fn newest_submission_is_listed_first() {
    let mut ml_api = MockInferenceApi::new();
    ml_api
        .expect_predict_disease()
        .returning(|_, _| Ok(prediction_response()));
    let mut protein_api = MockProteinApi::new();
    protein_api.expect_create().returning(|_| Ok(()));

    let dir = tempfile::tempdir().unwrap();
    let (service, _bus) = file_backed_service(dir.path(), ml_api, protein_api);

    let first = service.submit(request("MKVLW")).await.unwrap();
    let second = service.submit(request("ACDEF")).await.unwrap();

    let history = service.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.job_id);
    assert_eq!(history[1].id, first.job_id);
}

#[tokio::test]
async fn mismatched_job_id_reanalyzes_from_backend() {
    use crate::domain::mock_proteins;

    let mut record = mock_proteins()[0].clone();
    record.id = "P01308".to_string();
    record.sequence = Some("MALWMRLL".to_string());

    let mut ml_api = MockInferenceApi::new();
    ml_api
        .expect_predict_disease()
        .withf(|sequence, _| sequence == "MALWMRLL")
        .returning(|_, _| Ok(prediction_response()));
    let mut protein_api = MockProteinApi::new();
    let returned = record.clone();
    protein_api
        .expect_get()
        .returning(move |_| Ok(returned.clone()));

    let dir = tempfile::tempdir().unwrap();
    let (service, _bus) = file_backed_service(dir.path(), ml_api, protein_api);

    let report = service.report_for(Some("P01308")).await.unwrap();
    assert_eq!(report.job_id, "P01308");
    assert_eq!(report.sequence, "MALWMRLL");
}
