use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Residues kept in a job's sequence preview
pub const SEQUENCE_PREVIEW_LEN: usize = 50;

/// Lifecycle of a submitted prediction job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "Pending"),
            JobStatus::Processing => write!(f, "Processing"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// One row of the prediction history.
///
/// Created at submission with a client-assigned id and never mutated
/// afterwards; the status is written as Completed before the inference
/// call resolves (known flaw, kept as-is). Jobs that fail are simply
/// not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionJob {
    pub id: String,
    pub job_name: String,
    pub submitted_at: DateTime<Utc>,
    pub status: JobStatus,
    pub sequence_preview: String,
}

impl PredictionJob {
    pub fn new(job_name: String, sequence: &str) -> Self {
        Self {
            id: generate_job_id(),
            job_name,
            submitted_at: Utc::now(),
            status: JobStatus::Completed,
            sequence_preview: preview(sequence),
        }
    }
}

/// User-submitted sequences get a `USER_` accession so they are
/// distinguishable from database records in the results view.
fn generate_job_id() -> String {
    format!("USER_{}", Uuid::new_v4().simple())
}

fn preview(sequence: &str) -> String {
    if sequence.len() > SEQUENCE_PREVIEW_LEN {
        format!("{}...", &sequence[..SEQUENCE_PREVIEW_LEN])
    } else {
        sequence.to_string()
    }
}

/// A single disease prediction returned by the inference backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub disease: String,
    pub confidence: f64,
    #[serde(default)]
    pub evidence: String,
}

/// Properties the user supplied (or the backend computed) alongside the
/// submission; everything optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisProperties {
    pub length: u32,
    pub isoelectric_point: Option<f64>,
    pub hydrophobicity: Option<f64>,
    pub interactors: Option<u32>,
    pub organism: Option<String>,
    pub family: Option<String>,
}

/// The full outcome of one analysis, persisted as the most recent result
/// and looked up by job id from the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub job_id: String,
    pub protein_name: String,
    pub gene_name: Option<String>,
    pub sequence: String,
    pub sequence_length: usize,
    pub disease_predictions: Vec<DiseasePrediction>,
    pub model_used: String,
    pub analyzed_at: DateTime<Utc>,
    pub properties: AnalysisProperties,
}
