// src/application/commands/catalog_commands.rs

use std::path::Path;

use crate::application::dto::*;
use crate::application::state::AppState;
use crate::domain::{FilterCriteria, NumericRange, SearchSession, DEFAULT_PAGE_SIZE};
use crate::integrations::ProteinUpdate;

/// Search the catalog with the page's filter set
pub async fn search_proteins(
    state: &AppState,
    request: SearchRequestDto,
) -> Result<SearchResultDto, String> {
    let criteria = FilterCriteria {
        query: request.query,
        organisms: request.organisms,
        function_keywords: request.functions,
        length: NumericRange::new(
            request.min_length.map(f64::from),
            request.max_length.map(f64::from),
        ),
        weight: NumericRange::new(request.min_weight, request.max_weight),
    };

    let page_size = request
        .page_size
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let mut session = SearchSession::new(page_size);
    session.set_criteria(criteria);
    if let Some(page) = request.page {
        session.set_page(page);
    }

    let outcome = state
        .catalog_service
        .search(&session)
        .await
        .map_err(|e| e.to_string())?;

    Ok(SearchResultDto::from_page(outcome.page, outcome.source))
}

/// Fetch a single protein record
pub async fn get_protein(state: &AppState, protein_id: &str) -> Result<ProteinDto, String> {
    let (record, _source) = state
        .catalog_service
        .get(protein_id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(record.into())
}

/// Compare two proteins by id
pub async fn compare_proteins(
    state: &AppState,
    protein_id_1: &str,
    protein_id_2: &str,
) -> Result<ComparisonDto, String> {
    let comparison = state
        .catalog_service
        .compare(protein_id_1, protein_id_2)
        .await
        .map_err(|e| e.to_string())?;

    Ok(comparison.into())
}

/// Database-wide statistics (mock values when the backend is down)
pub async fn database_stats(state: &AppState) -> Result<StatsDto, String> {
    let outcome = state.catalog_service.stats().await;
    Ok(StatsDto::from_stats(outcome.stats, outcome.source))
}

/// Rename or re-annotate a protein record
pub async fn update_protein(
    state: &AppState,
    protein_id: &str,
    name: Option<String>,
    function: Option<String>,
) -> Result<(), String> {
    if name.is_none() && function.is_none() {
        return Err("Nothing to update".to_string());
    }

    let update = ProteinUpdate {
        name,
        function,
        family: None,
    };

    state
        .catalog_service
        .update(protein_id, &update)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a protein record from the backend
pub async fn delete_protein(state: &AppState, protein_id: &str) -> Result<(), String> {
    state
        .catalog_service
        .delete(protein_id)
        .await
        .map_err(|e| e.to_string())
}

/// Bulk-import proteins from a CSV file
pub async fn import_proteins(state: &AppState, path: &Path) -> Result<usize, String> {
    let proteins = state
        .file_service
        .parse_csv_proteins(path)
        .map_err(|e| e.to_string())?;

    state
        .catalog_service
        .bulk_create(&proteins)
        .await
        .map_err(|e| e.to_string())
}
