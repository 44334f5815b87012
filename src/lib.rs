// src/lib.rs
// ProteinHub - Local-first protein analysis workbench
//
// Architecture:
// - Domain-centric: pure records, filtering and sequence rules live in domains
// - Event-driven: store mutations publish facts; views subscribe
// - Local-first: collections persist as JSON under the user's data directory
// - Remote-first data, offline fallback: the backends are preferred, the
//   built-in dataset and local store take over when they are unreachable
// - Application Layer: DTO-in/DTO-out command handlers, the UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod store;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    clean_sequence,
    filter,
    mock_proteins,
    mock_stats,
    paginate,
    parse_fasta,
    validate_protein,
    validate_sequence,
    AnalysisReport,
    DiseasePrediction,
    FastaRecord,
    FilterCriteria,
    JobStatus,
    NumericRange,
    Page,
    PredictionJob,
    ProteinRecord,
    ProteinStats,
    SavedProteinEntry,
    SearchSession,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    AnalysisStored, DomainEvent, EventBus, PredictionRecorded, ProteinRemoved, ProteinSaved,
    StoreChanged,
};

// ============================================================================
// PUBLIC API - Store & Repositories
// ============================================================================

pub use store::JsonStore;

pub use repositories::{
    AnalysisRepository, JsonAnalysisRepository, JsonPredictionRepository,
    JsonSavedProteinRepository, PredictionRepository, SavedProteinRepository,
};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    InferenceApi, MlApiClient, NewProtein, ProteinApi, ProteinApiClient, ProteinComparison,
    SearchFilters,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CatalogService,
    DataSource,
    ExportFormat,
    FileService,
    LocalOverview,
    PredictionOutcome,
    PredictionRequest,
    // Prediction Service
    PredictionService,
    SaveOutcome,
    // Saved Collection Service
    SavedProteinService,
    SearchOutcome,
    // Statistics Service
    StatisticsService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
