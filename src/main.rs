// src/main.rs

mod cli;
mod logging;

use anyhow::{anyhow, Result};
use clap::Parser;

use proteinhub::application::commands;
use proteinhub::application::dto::{
    AnalysisReportDto, ComparisonDto, DashboardDto, SearchRequestDto, SearchResultDto,
    SubmitPredictionDto,
};
use proteinhub::application::AppState;
use proteinhub::config::{default_data_dir, ApiEndpoints, DEFAULT_HOST};
use proteinhub::store::{LAST_ANALYSIS_KEY, PREDICTIONS_KEY, SAVED_PROTEINS_KEY};

use cli::{Cli, Commands, PredictArgs, SavedArgs, SearchArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let host = cli.host.as_deref().unwrap_or(DEFAULT_HOST);
    let endpoints = ApiEndpoints::for_host(host);
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);

    let state = AppState::initialize(&endpoints, &data_dir)?;

    match cli.command {
        Commands::Search(args) => run_search(&state, args).await,
        Commands::Show { id } => run_show(&state, &id).await,
        Commands::Save { id } => {
            let message = commands::save_protein(&state, &id).await.map_err(fail)?;
            println!("{}", message);
            Ok(())
        }
        Commands::Remove { id } => {
            if commands::remove_saved_protein(&state, &id).map_err(fail)? {
                println!("Protein {} removed from saved collection", id);
            } else {
                println!("Protein {} was not in the saved collection", id);
            }
            Ok(())
        }
        Commands::Saved(args) => run_saved(&state, args),
        Commands::Predict(args) => run_predict(&state, args).await,
        Commands::Result { job_id } => {
            let report = commands::analysis_report(&state, job_id.as_deref())
                .await
                .map_err(fail)?;
            print_report(&report);
            Ok(())
        }
        Commands::History => {
            let jobs = commands::prediction_history(&state).map_err(fail)?;
            if jobs.is_empty() {
                println!("No predictions yet.");
            }
            for job in jobs {
                println!(
                    "{}  {}  [{}]  {}",
                    job.submitted_at, job.id, job.status, job.job_name
                );
            }
            Ok(())
        }
        Commands::Compare { id_1, id_2 } => {
            let comparison = commands::compare_proteins(&state, &id_1, &id_2)
                .await
                .map_err(fail)?;
            print_comparison(&comparison);
            Ok(())
        }
        Commands::Align {
            sequence_1,
            sequence_2,
        } => {
            let alignment = commands::align_sequences(&state, &sequence_1, &sequence_2)
                .await
                .map_err(fail)?;
            println!("Score: {:.2}  (alignment length {})", alignment.score, alignment.length);
            println!("{}", alignment.aligned_sequence1);
            println!("{}", alignment.aligned_sequence2);
            Ok(())
        }
        Commands::Similarity {
            sequence_1,
            sequence_2,
        } => {
            let result = commands::sequence_similarity(&state, &sequence_1, &sequence_2)
                .await
                .map_err(fail)?;
            println!(
                "Similarity: {:.1}%  ({} vs {} residues)",
                result.similarity * 100.0,
                result.sequence1_length,
                result.sequence2_length
            );
            Ok(())
        }
        Commands::Stats => {
            let stats = commands::database_stats(&state).await.map_err(fail)?;
            println!("Source: {}", stats.source);
            println!("Total proteins:      {}", stats.total_proteins);
            println!("Total genes:         {}", stats.total_genes);
            println!("Protein families:    {}", stats.total_families);
            println!("Avg length:          {:.2} AA", stats.avg_length);
            println!("Avg mol. weight:     {:.2} Da", stats.avg_mw);
            println!("Avg pI:              {:.2}", stats.avg_pi);
            println!("Avg hydrophobicity:  {:.4}", stats.avg_hydrophobicity);
            println!("Avg interactors:     {:.2}", stats.avg_n_interactors);
            Ok(())
        }
        Commands::Dashboard { watch } => run_dashboard(&state, watch).await,
        Commands::Import { path } => {
            let imported = commands::import_proteins(&state, &path).await.map_err(fail)?;
            println!("Successfully imported {} proteins", imported);
            Ok(())
        }
        Commands::Update { id, name, function } => {
            commands::update_protein(&state, &id, name, function)
                .await
                .map_err(fail)?;
            println!("Protein {} updated", id);
            Ok(())
        }
        Commands::Delete { id } => {
            commands::delete_protein(&state, &id).await.map_err(fail)?;
            println!("Protein {} deleted", id);
            Ok(())
        }
    }
}

fn fail(message: String) -> anyhow::Error {
    anyhow!(message)
}

async fn run_search(state: &AppState, args: SearchArgs) -> Result<()> {
    let request = SearchRequestDto {
        query: args.query.unwrap_or_default(),
        organisms: args.organisms,
        functions: args.functions,
        min_length: args.min_length,
        max_length: args.max_length,
        min_weight: args.min_weight,
        max_weight: args.max_weight,
        page: args.page,
        page_size: args.page_size,
    };

    let result = commands::search_proteins(state, request).await.map_err(fail)?;
    print_search(&result);
    Ok(())
}

async fn run_show(state: &AppState, id: &str) -> Result<()> {
    let protein = commands::get_protein(state, id).await.map_err(fail)?;

    println!("{}  {}", protein.id, protein.name);
    println!("  Gene:      {}", protein.gene.as_deref().unwrap_or("-"));
    println!("  Organism:  {}", protein.organism);
    println!("  Length:    {} AA", protein.length);
    println!("  MW:        {:.0} Da", protein.weight);
    if let Some(pi) = protein.isoelectric_point {
        println!("  pI:        {:.2}", pi);
    }
    if let Some(gravy) = protein.hydrophobicity {
        println!("  GRAVY:     {:.4}", gravy);
    }
    if !protein.function.is_empty() {
        println!("  Function:  {}", protein.function);
    }
    if let Some(sequence) = &protein.sequence {
        println!("  Sequence:  {}", truncate(sequence, 60));
    }
    Ok(())
}

fn run_saved(state: &AppState, args: SavedArgs) -> Result<()> {
    if args.clear {
        commands::clear_saved_proteins(state).map_err(fail)?;
        println!("All saved proteins cleared");
        return Ok(());
    }

    if let Some(format) = args.export {
        let dir = args.output.unwrap_or_else(|| ".".into());
        let path = commands::export_saved_proteins(state, &format, &dir).map_err(fail)?;
        println!("Exported to {}", path);
        return Ok(());
    }

    let entries = commands::list_saved_proteins(state).map_err(fail)?;
    if entries.is_empty() {
        println!("No saved proteins yet.");
    }
    for entry in entries {
        println!(
            "{}  {}  {}  (saved {})",
            entry.id, entry.name, entry.organism, entry.saved_at
        );
    }
    Ok(())
}

async fn run_predict(state: &AppState, args: PredictArgs) -> Result<()> {
    let sequence = match (args.sequence, args.file) {
        (Some(sequence), _) => sequence,
        (None, Some(path)) => commands::read_sequence_file(state, &path).map_err(fail)?,
        (None, None) => {
            return Err(anyhow!("Please enter a sequence or upload a file"));
        }
    };

    let dto = SubmitPredictionDto {
        sequence,
        protein_name: args.name,
        gene: args.gene,
        model: args.model,
        organism: args.organism,
        family: args.family,
    };

    let report = commands::submit_prediction(state, dto).await.map_err(fail)?;
    println!("Analysis complete. Job id: {}", report.job_id);
    print_report(&report);
    Ok(())
}

async fn run_dashboard(state: &AppState, watch: bool) -> Result<()> {
    let data = commands::dashboard(state).map_err(fail)?;
    print_dashboard(&data);

    if !watch {
        return Ok(());
    }

    // Refresh every 2 seconds, repainting only when a collection changed.
    // External writers are picked up through the store versions.
    let keys = [SAVED_PROTEINS_KEY, PREDICTIONS_KEY, LAST_ANALYSIS_KEY];
    let mut versions: Vec<u64> = keys.iter().map(|k| state.store.version(k)).collect();
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(2));
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let current: Vec<u64> = keys.iter().map(|k| state.store.version(k)).collect();
        if current != versions {
            versions = current;
            let data = commands::dashboard(state).map_err(fail)?;
            println!();
            print_dashboard(&data);
        }
    }
}

fn print_search(result: &SearchResultDto) {
    println!(
        "{} proteins (page {}/{}, source: {})",
        result.total_items,
        result.page,
        result.total_pages.max(1),
        result.source
    );
    for protein in &result.items {
        println!(
            "{:<20} {:<45} {:<16} {:>6} AA  {:>10}",
            protein.id,
            truncate(&protein.name, 44),
            truncate(&protein.organism, 15),
            protein.length,
            format!("{:.0} Da", protein.weight),
        );
    }
}

fn print_report(report: &AnalysisReportDto) {
    println!("Job {}  ({})", report.job_id, report.analyzed_at);
    println!("  Protein:  {}", report.protein_name);
    if let Some(gene) = &report.gene_name {
        println!("  Gene:     {}", gene);
    }
    println!("  Model:    {}", report.model_used);
    println!(
        "  Sequence: {} ({} residues)",
        truncate(&report.sequence, 60),
        report.sequence_length
    );
    if report.disease_predictions.is_empty() {
        println!("  No disease predictions found.");
    } else {
        println!("  Disease predictions:");
        for prediction in &report.disease_predictions {
            println!(
                "    {:<40} {:>5.1}%  {}",
                prediction.disease,
                prediction.confidence * 100.0,
                prediction.evidence
            );
        }
    }
}

fn print_comparison(comparison: &ComparisonDto) {
    println!(
        "Similarity: {:.0}%",
        comparison.similarity * 100.0
    );
    for protein in [&comparison.protein_1, &comparison.protein_2] {
        println!(
            "  {:<20} {:<40} {:>6} AA  {:>10}",
            protein.id,
            truncate(&protein.name, 39),
            protein.length,
            format!("{:.0} Da", protein.weight),
        );
    }
    if let Some(at) = &comparison.compared_at {
        println!("Compared at: {}", at);
    }
}

fn print_dashboard(data: &DashboardDto) {
    println!("Total predictions: {}", data.overview.total_predictions);
    println!("Processing jobs:   {}", data.overview.processing_jobs);
    println!("Saved proteins:    {}", data.overview.total_saved);

    println!("\nRecently saved:");
    if data.recent_saved.is_empty() {
        println!("  (none)");
    }
    for entry in &data.recent_saved {
        println!("  {}  {}  {}", entry.id, entry.name, entry.organism);
    }

    println!("\nRecent predictions:");
    if data.recent_predictions.is_empty() {
        println!("  (none)");
    }
    for job in &data.recent_predictions {
        println!("  {}  [{}]  {}", job.id, job.status, job.job_name);
    }
}

fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() > length {
        let cut: String = text.chars().take(length).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
