use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A protein as served by the data backend (or the built-in fallback set).
/// Records are immutable once fetched; the client never owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinRecord {
    /// Accession identifier, unique key (e.g. "P01308")
    pub id: String,

    /// Display name
    pub name: String,

    /// Gene symbol, when annotated
    pub gene: Option<String>,

    /// Organism / taxonomy string
    pub organism: String,

    /// Sequence length in residues
    pub length: u32,

    /// Molecular weight in Daltons
    pub weight: f64,

    /// Free-text function description
    pub function: String,

    /// Amino-acid sequence, when the backend returns it
    pub sequence: Option<String>,

    /// Protein family annotation
    pub family: Option<String>,

    /// Isoelectric point, computed by the backend
    pub isoelectric_point: Option<f64>,

    /// GRAVY hydropathy score, computed by the backend
    pub hydrophobicity: Option<f64>,
}

/// A protein the user pinned to their local collection.
/// Subset of the record plus a client-assigned save timestamp;
/// owned exclusively by the local store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProteinEntry {
    pub id: String,
    pub name: String,
    pub organism: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedProteinEntry {
    pub fn from_record(record: &ProteinRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            organism: record.organism.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Database-wide aggregate statistics (`/proteins/stats` payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinStats {
    pub total_proteins: u64,
    pub avg_length: f64,
    pub avg_mw: f64,
    pub avg_pi: f64,
    pub avg_n_interactors: f64,
    pub avg_hydrophobicity: f64,
    pub total_genes: u64,
    pub total_families: u64,
}
