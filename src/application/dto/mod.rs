// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{
    AnalysisReport, DiseasePrediction, Page, PredictionJob, ProteinRecord, ProteinStats,
    SavedProteinEntry,
};
use crate::integrations::{AlignmentResult, ProteinComparison, SimilarityResult};
use crate::services::{DataSource, LocalOverview};

// ============================================================================
// PROTEIN DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinDto {
    pub id: String,
    pub name: String,
    pub gene: Option<String>,
    pub organism: String,
    pub length: u32,
    pub weight: f64,
    pub function: String,
    pub sequence: Option<String>,
    pub family: Option<String>,
    pub isoelectric_point: Option<f64>,
    pub hydrophobicity: Option<f64>,
}

impl From<ProteinRecord> for ProteinDto {
    fn from(record: ProteinRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            gene: record.gene,
            organism: record.organism,
            length: record.length,
            weight: record.weight,
            function: record.function,
            sequence: record.sequence,
            family: record.family,
            isoelectric_point: record.isoelectric_point,
            hydrophobicity: record.hydrophobicity,
        }
    }
}

/// Search input as the page collects it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequestDto {
    pub query: String,
    pub organisms: Vec<String>,
    pub functions: Vec<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub items: Vec<ProteinDto>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// "database" or "local fallback"
    pub source: String,
}

impl SearchResultDto {
    pub fn from_page(page: Page, source: DataSource) -> Self {
        Self {
            items: page.items.into_iter().map(ProteinDto::from).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            source: source_label(source).to_string(),
        }
    }
}

pub fn source_label(source: DataSource) -> &'static str {
    match source {
        DataSource::Remote => "database",
        DataSource::Fallback => "local fallback",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonDto {
    pub protein_1: ProteinDto,
    pub protein_2: ProteinDto,
    pub similarity: f64,
    pub compared_at: Option<String>,
}

impl From<ProteinComparison> for ComparisonDto {
    fn from(comparison: ProteinComparison) -> Self {
        Self {
            protein_1: comparison.protein_1.into(),
            protein_2: comparison.protein_2.into(),
            similarity: comparison.similarity,
            compared_at: comparison.compared_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDto {
    pub total_proteins: u64,
    pub avg_length: f64,
    pub avg_mw: f64,
    pub avg_pi: f64,
    pub avg_n_interactors: f64,
    pub avg_hydrophobicity: f64,
    pub total_genes: u64,
    pub total_families: u64,
    pub source: String,
}

impl StatsDto {
    pub fn from_stats(stats: ProteinStats, source: DataSource) -> Self {
        Self {
            total_proteins: stats.total_proteins,
            avg_length: stats.avg_length,
            avg_mw: stats.avg_mw,
            avg_pi: stats.avg_pi,
            avg_n_interactors: stats.avg_n_interactors,
            avg_hydrophobicity: stats.avg_hydrophobicity,
            total_genes: stats.total_genes,
            total_families: stats.total_families,
            source: source_label(source).to_string(),
        }
    }
}

// ============================================================================
// SAVED COLLECTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProteinDto {
    pub id: String,
    pub name: String,
    pub organism: String,
    pub saved_at: String,
}

impl From<SavedProteinEntry> for SavedProteinDto {
    fn from(entry: SavedProteinEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            organism: entry.organism,
            saved_at: entry.saved_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// PREDICTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionJobDto {
    pub id: String,
    pub job_name: String,
    pub submitted_at: String,
    pub status: String,
    pub sequence_preview: String,
}

impl From<PredictionJob> for PredictionJobDto {
    fn from(job: PredictionJob) -> Self {
        Self {
            id: job.id,
            job_name: job.job_name,
            submitted_at: job.submitted_at.to_rfc3339(),
            status: job.status.to_string(),
            sequence_preview: job.sequence_preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseasePredictionDto {
    pub disease: String,
    pub confidence: f64,
    pub evidence: String,
}

impl From<DiseasePrediction> for DiseasePredictionDto {
    fn from(prediction: DiseasePrediction) -> Self {
        Self {
            disease: prediction.disease,
            confidence: prediction.confidence,
            evidence: prediction.evidence,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReportDto {
    pub job_id: String,
    pub protein_name: String,
    pub gene_name: Option<String>,
    pub sequence: String,
    pub sequence_length: usize,
    pub disease_predictions: Vec<DiseasePredictionDto>,
    pub model_used: String,
    pub analyzed_at: String,
    pub organism: Option<String>,
    pub family: Option<String>,
}

impl From<AnalysisReport> for AnalysisReportDto {
    fn from(report: AnalysisReport) -> Self {
        Self {
            job_id: report.job_id,
            protein_name: report.protein_name,
            gene_name: report.gene_name,
            sequence: report.sequence,
            sequence_length: report.sequence_length,
            disease_predictions: report
                .disease_predictions
                .into_iter()
                .map(DiseasePredictionDto::from)
                .collect(),
            model_used: report.model_used,
            analyzed_at: report.analyzed_at.to_rfc3339(),
            organism: report.properties.organism,
            family: report.properties.family,
        }
    }
}

/// Submission input as the form collects it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitPredictionDto {
    pub sequence: String,
    pub protein_name: Option<String>,
    pub gene: Option<String>,
    pub model: Option<String>,
    pub organism: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentDto {
    pub aligned_sequence1: String,
    pub aligned_sequence2: String,
    pub score: f64,
    pub length: usize,
}

impl From<AlignmentResult> for AlignmentDto {
    fn from(result: AlignmentResult) -> Self {
        Self {
            aligned_sequence1: result.aligned_sequence1,
            aligned_sequence2: result.aligned_sequence2,
            score: result.score,
            length: result.length,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityDto {
    pub similarity: f64,
    pub sequence1_length: usize,
    pub sequence2_length: usize,
}

impl From<SimilarityResult> for SimilarityDto {
    fn from(result: SimilarityResult) -> Self {
        Self {
            similarity: result.similarity,
            sequence1_length: result.sequence1_length,
            sequence2_length: result.sequence2_length,
        }
    }
}

// ============================================================================
// DASHBOARD DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewDto {
    pub total_predictions: usize,
    pub processing_jobs: usize,
    pub total_saved: usize,
}

impl From<LocalOverview> for OverviewDto {
    fn from(overview: LocalOverview) -> Self {
        Self {
            total_predictions: overview.total_predictions,
            processing_jobs: overview.processing_jobs,
            total_saved: overview.total_saved,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub overview: OverviewDto,
    pub recent_saved: Vec<SavedProteinDto>,
    pub recent_predictions: Vec<PredictionJobDto>,
}
