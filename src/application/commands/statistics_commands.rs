// src/application/commands/statistics_commands.rs

use crate::application::dto::*;
use crate::application::state::AppState;

/// Local dashboard counters
pub fn local_overview(state: &AppState) -> Result<OverviewDto, String> {
    let overview = state
        .statistics_service
        .local_overview()
        .map_err(|e| e.to_string())?;

    Ok(overview.into())
}

/// Everything the dashboard page shows: counters plus the five most
/// recent saved proteins and predictions.
pub fn dashboard(state: &AppState) -> Result<DashboardDto, String> {
    let overview = local_overview(state)?;

    let recent_saved = state
        .saved_protein_service
        .recent(5)
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(SavedProteinDto::from)
        .collect();

    let recent_predictions = state
        .prediction_service
        .history()
        .map_err(|e| e.to_string())?
        .into_iter()
        .take(5)
        .map(PredictionJobDto::from)
        .collect();

    Ok(DashboardDto {
        overview,
        recent_saved,
        recent_predictions,
    })
}
