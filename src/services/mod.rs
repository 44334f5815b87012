// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod file_service;
pub mod prediction_service;
pub mod saved_protein_service;
pub mod statistics_service;

#[cfg(test)]
mod prediction_service_tests;

// Re-export all services and their types
pub use catalog_service::{CatalogService, DataSource, SearchOutcome, StatsOutcome};

pub use saved_protein_service::{ExportFormat, SaveOutcome, SavedProteinService};

pub use prediction_service::{PredictionOutcome, PredictionRequest, PredictionService};

pub use statistics_service::{LocalOverview, StatisticsService};

pub use file_service::{FilePreview, FileService, MAX_UPLOAD_BYTES};
