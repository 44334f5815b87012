// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod prediction;
pub mod protein;
pub mod query;
pub mod sequence;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Protein Domain
pub use protein::{
    mock_proteins, mock_stats, validate_protein, ProteinRecord, ProteinStats, SavedProteinEntry,
};

// Prediction Domain
pub use prediction::{
    AnalysisProperties, AnalysisReport, DiseasePrediction, JobStatus, PredictionJob,
};

// Query Domain
pub use query::{
    filter, paginate, FilterCriteria, NumericRange, Page, SearchSession, DEFAULT_PAGE_SIZE,
};

// Sequence Domain
pub use sequence::{
    clean_sequence, parse_fasta, validate_sequence, FastaRecord, MIN_SEQUENCE_LENGTH,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
