// src/application/commands/saved_commands.rs

use std::path::Path;

use crate::application::dto::SavedProteinDto;
use crate::application::state::AppState;
use crate::services::{ExportFormat, SaveOutcome};

/// Pin a protein to the local collection by id
pub async fn save_protein(state: &AppState, protein_id: &str) -> Result<String, String> {
    let (record, _source) = state
        .catalog_service
        .get(protein_id)
        .await
        .map_err(|e| e.to_string())?;

    let outcome = state
        .saved_protein_service
        .save(&record)
        .await
        .map_err(|e| e.to_string())?;

    Ok(match outcome {
        SaveOutcome::Saved => format!("Protein {} saved", record.id),
        SaveOutcome::AlreadySaved => "Already saved".to_string(),
    })
}

/// Unpin a protein; returns whether anything was removed
pub fn remove_saved_protein(state: &AppState, protein_id: &str) -> Result<bool, String> {
    state
        .saved_protein_service
        .remove(protein_id)
        .map_err(|e| e.to_string())
}

/// The saved collection, most recently saved first
pub fn list_saved_proteins(state: &AppState) -> Result<Vec<SavedProteinDto>, String> {
    let entries = state
        .saved_protein_service
        .list()
        .map_err(|e| e.to_string())?;

    Ok(entries.into_iter().map(SavedProteinDto::from).collect())
}

/// Export the saved collection; returns the written path
pub fn export_saved_proteins(
    state: &AppState,
    format: &str,
    dir: &Path,
) -> Result<String, String> {
    let format = match format.to_lowercase().as_str() {
        "json" => ExportFormat::Json,
        "csv" => ExportFormat::Csv,
        other => return Err(format!("Unknown export format '{}'", other)),
    };

    let path = state
        .saved_protein_service
        .export(format, dir)
        .map_err(|e| e.to_string())?;

    Ok(path.display().to_string())
}

/// Drop every saved protein
pub fn clear_saved_proteins(state: &AppState) -> Result<(), String> {
    state
        .saved_protein_service
        .clear()
        .map_err(|e| e.to_string())
}
