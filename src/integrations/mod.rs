// src/integrations/mod.rs
//
// External Integrations Module
//
// HTTP clients for the two backends. These are INFRASTRUCTURE, not
// domain: they map wire DTOs to domain types and never mutate state.
// Each call is a single attempt; callers decide the fallback.

pub mod ml_api;
pub mod protein_api;

pub use ml_api::client::{
    AlignmentResult, DiseasePredictionResponse, InferenceApi, MlApiClient, SequenceProperties,
    SimilarityResult,
};
pub use protein_api::client::{
    NewProtein, ProteinApi, ProteinApiClient, ProteinComparison, ProteinUpdate, SearchFilters,
};
