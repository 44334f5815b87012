// src/application/state.rs

use std::path::Path;
use std::sync::Arc;

use crate::config::ApiEndpoints;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{InferenceApi, MlApiClient, ProteinApi, ProteinApiClient};
use crate::repositories::{
    AnalysisRepository, JsonAnalysisRepository, JsonPredictionRepository,
    JsonSavedProteinRepository, PredictionRepository, SavedProteinRepository,
};
use crate::services::{
    CatalogService, FileService, PredictionService, SavedProteinService, StatisticsService,
};
use crate::store::JsonStore;

/// Shared application state. All fields are Arc-wrapped for thread-safe
/// sharing across command handlers.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub store: Arc<JsonStore>,
    pub catalog_service: Arc<CatalogService>,
    pub saved_protein_service: Arc<SavedProteinService>,
    pub prediction_service: Arc<PredictionService>,
    pub statistics_service: Arc<StatisticsService>,
    pub file_service: Arc<FileService>,
}

impl AppState {
    /// Wires infrastructure, repositories and services together.
    pub fn initialize(endpoints: &ApiEndpoints, data_dir: &Path) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let store = Arc::new(JsonStore::open(data_dir)?);
        let protein_api: Arc<dyn ProteinApi> =
            Arc::new(ProteinApiClient::new(endpoints.api_base_url.clone()));
        let ml_api: Arc<dyn InferenceApi> =
            Arc::new(MlApiClient::new(endpoints.ml_base_url.clone()));

        // 2. REPOSITORIES
        // The type `Arc<dyn Trait>` matches the service constructor signatures.
        let saved_repo: Arc<dyn SavedProteinRepository> =
            Arc::new(JsonSavedProteinRepository::new(Arc::clone(&store)));
        let prediction_repo: Arc<dyn PredictionRepository> =
            Arc::new(JsonPredictionRepository::new(Arc::clone(&store)));
        let analysis_repo: Arc<dyn AnalysisRepository> =
            Arc::new(JsonAnalysisRepository::new(Arc::clone(&store)));

        // 3. SERVICES
        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&protein_api),
            Arc::clone(&saved_repo),
        ));
        let saved_protein_service = Arc::new(SavedProteinService::new(
            Arc::clone(&saved_repo),
            Arc::clone(&protein_api),
            Arc::clone(&event_bus),
        ));
        let prediction_service = Arc::new(PredictionService::new(
            Arc::clone(&prediction_repo),
            Arc::clone(&analysis_repo),
            Arc::clone(&ml_api),
            Arc::clone(&protein_api),
            Arc::clone(&event_bus),
        ));
        let statistics_service = Arc::new(StatisticsService::new(
            Arc::clone(&prediction_repo),
            Arc::clone(&saved_repo),
            Arc::clone(&event_bus),
        ));
        statistics_service.register_event_handlers();

        Ok(Self {
            event_bus,
            store,
            catalog_service,
            saved_protein_service,
            prediction_service,
            statistics_service,
            file_service: Arc::new(FileService::new()),
        })
    }
}
